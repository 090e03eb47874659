use std::io::{BufRead, Write};

use anyhow::Context;

use crate::{get_next_delimited_line, TableError};

/// Delimited text table with a header line
///
/// header - column names from the first line
/// rows - remaining (non blank) lines split into fields. Rows are not
/// required to have the same number of fields as the header
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column with the given name (first match)
    pub fn column_index(&self, name: &str, input: &str) -> Result<usize, TableError> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn {
                column: name.to_owned(),
                input: input.to_owned(),
            })
    }

    /// Write header and rows joined by `delim`
    pub fn write<W: Write>(&self, wrt: &mut W, delim: char) -> std::io::Result<()> {
        let d = delim.to_string();
        writeln!(wrt, "{}", self.header.join(&d))?;
        for r in self.rows.iter() {
            writeln!(wrt, "{}", r.join(&d))?
        }
        Ok(())
    }
}

/// Read a delimited table.  The first non blank line is the header.
/// `input` is used to label error messages
pub fn read_table<R: BufRead>(rdr: &mut R, delim: char, input: &str) -> anyhow::Result<Table> {
    let mut buf = String::new();
    let mut line = 0;
    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    while let Some(fields) = get_next_delimited_line(rdr, &mut buf, delim)
        .with_context(|| format!("Error after reading {} lines from {}", line, input))?
    {
        line += 1;
        // Skip blank lines
        if fields.is_empty() {
            continue;
        }
        let v: Vec<String> = fields.iter().map(|s| s.to_string()).collect();
        if header.is_some() {
            rows.push(v)
        } else {
            header = Some(v)
        }
    }

    debug!(
        "Finished reading in {} lines from {}; found {} rows",
        line,
        input,
        rows.len()
    );
    Ok(Table::new(header.unwrap_or_default(), rows))
}
