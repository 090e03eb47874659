use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the input tables.
///
/// An input that is valid but where every row is filtered out is not an error;
/// the tools write an output with only the header in that case.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Input file {} not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("Missing column '{column}' in {input}")]
    MissingColumn { column: String, input: String },

    #[error("{input}:{line} Expected at least {expected} fields, found {found}")]
    ShortLine {
        input: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{input}:{line} Could not parse '{value}' in column {column}")]
    Parse {
        input: String,
        line: usize,
        column: String,
        value: String,
    },
}
