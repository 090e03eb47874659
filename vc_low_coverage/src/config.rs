use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Sequences covered below this percentage are reported
pub const DEFAULT_MAX_PERCENTAGE: f64 = 74.99;

pub type Contig = Arc<str>;

/// Config
///
/// Generated from the command line arguments; read only once set
///
/// input - per span coverage file (sequence, start, stop, depth)
/// output - output file
/// max_percentage - sequences with covered percentage strictly below this are output
/// write_all - output the coverage summary for all sequences rather than
///             only those below max_percentage
///
pub struct Config {
    input: PathBuf,
    output: PathBuf,
    max_percentage: f64,
    write_all: bool,
}

impl Config {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            max_percentage: DEFAULT_MAX_PERCENTAGE,
            write_all: false,
        }
    }

    pub fn set_max_percentage(&mut self, x: f64) -> anyhow::Result<()> {
        if (0.0..=100.0).contains(&x) {
            self.max_percentage = x;
            Ok(())
        } else {
            Err(anyhow!("Invalid percentage {} - must be between 0 and 100", x))
        }
    }

    pub fn set_write_all(&mut self) {
        self.write_all = true
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn max_percentage(&self) -> f64 {
        self.max_percentage
    }

    pub fn write_all(&self) -> bool {
        self.write_all
    }
}
