use std::path::{Path, PathBuf};

use crate::normalize::ColumnNormalizer;

/// Config
///
/// Generated from the command line arguments; read only once set
///
/// matrix - coverage matrix (tab separated, contigs x samples)
/// exclusion_list - per sample lists of low coverage contigs (pipe separated)
/// output - filtered matrix (pipe separated)
/// normalizer - maps column headers to sample names
/// n_annotation - number of non-sample columns after the contig column
///
pub struct Config {
    matrix: PathBuf,
    exclusion_list: PathBuf,
    output: PathBuf,
    normalizer: ColumnNormalizer,
    n_annotation: usize,
}

impl Config {
    pub fn new(matrix: PathBuf, exclusion_list: PathBuf, output: PathBuf) -> Self {
        Self {
            matrix,
            exclusion_list,
            output,
            normalizer: ColumnNormalizer::default(),
            n_annotation: 0,
        }
    }

    pub fn set_normalizer(&mut self, n: ColumnNormalizer) {
        self.normalizer = n
    }

    pub fn set_n_annotation(&mut self, x: usize) {
        self.n_annotation = x
    }

    pub fn matrix(&self) -> &Path {
        &self.matrix
    }

    pub fn exclusion_list(&self) -> &Path {
        &self.exclusion_list
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn normalizer(&self) -> &ColumnNormalizer {
        &self.normalizer
    }

    pub fn n_annotation(&self) -> usize {
        self.n_annotation
    }
}
