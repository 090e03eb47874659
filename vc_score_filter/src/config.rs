use std::path::{Path, PathBuf};

pub const DEFAULT_MIN_SCORE: f64 = 0.899;
pub const DEFAULT_MAX_PVALUE: f64 = 0.05;

/// Rows are kept if score > min_score and pvalue < max_pvalue (both strict)
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub min_score: f64,
    pub max_pvalue: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_pvalue: DEFAULT_MAX_PVALUE,
        }
    }
}

impl Thresholds {
    pub fn passes(&self, score: f64, pvalue: f64) -> bool {
        score > self.min_score && pvalue < self.max_pvalue
    }
}

/// Config
///
/// Generated from the command line arguments; read only once set
///
/// input - classifier table (tab separated, with header)
/// output - filtered table
/// thresholds - score and p-value cut offs
///
pub struct Config {
    input: PathBuf,
    output: PathBuf,
    thresholds: Thresholds,
}

impl Config {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            thresholds: Thresholds::default(),
        }
    }

    pub fn set_min_score(&mut self, x: f64) {
        self.thresholds.min_score = x
    }

    pub fn set_max_pvalue(&mut self, x: f64) -> anyhow::Result<()> {
        if (0.0..=1.0).contains(&x) {
            self.thresholds.max_pvalue = x;
            Ok(())
        } else {
            Err(anyhow!("Invalid p-value threshold {} - must be between 0 and 1", x))
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}
