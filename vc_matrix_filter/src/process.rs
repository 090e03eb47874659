use std::fmt;

use utils::TableError;

use crate::{
    config::Config,
    io,
    matrix::{CoverageMatrix, ExclusionList, MatrixSummary},
};

/// Record of a filtering run
///
/// before - matrix after removal of empty rows, before zeroing
/// after - final matrix
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFilterReport {
    pub rows_read: usize,
    pub empty_rows_initial: usize,
    pub cells_zeroed: usize,
    pub empty_rows_final: usize,
    pub before: MatrixSummary,
    pub after: MatrixSummary,
}

impl fmt::Display for MatrixFilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "before\n{}", self.before)?;
        write!(f, "after\n{}", self.after)
    }
}

/// Strategy
///
/// Remove contigs without coverage in any sample, then for each sample
/// set the coverage of contigs in the exclusion list for that sample to zero.
/// Finally remove contigs that have been zeroed in all samples.
///
/// Every exclusion list column must match a sample column of the matrix;
/// this is checked before the matrix is modified.
pub fn filter_matrix(
    m: &mut CoverageMatrix,
    excl: &ExclusionList,
    input: &str,
) -> Result<MatrixFilterReport, TableError> {
    let mut targets = Vec::with_capacity(excl.columns().len());
    for (name, set) in excl.columns() {
        let ix = m.sample_indices(name);
        if ix.is_empty() {
            return Err(TableError::MissingColumn {
                column: name.clone(),
                input: input.to_owned(),
            });
        }
        targets.push((name, set, ix));
    }

    let rows_read = m.rows().len();
    let empty_rows_initial = m.remove_empty_rows();
    debug!("Removed {} rows without coverage", empty_rows_initial);
    let before = m.summary();

    let mut cells_zeroed = 0;
    for (name, set, ix) in targets {
        for i in ix {
            let n = m.zero_out(i, set);
            trace!("Zeroed {} entries for sample {}", n, name);
            cells_zeroed += n
        }
    }

    let empty_rows_final = m.remove_empty_rows();
    debug!(
        "Zeroed {} entries; removed {} further rows",
        cells_zeroed, empty_rows_final
    );

    Ok(MatrixFilterReport {
        rows_read,
        empty_rows_initial,
        cells_zeroed,
        empty_rows_final,
        before,
        after: m.summary(),
    })
}

pub fn process_files(cfg: &Config) -> anyhow::Result<MatrixFilterReport> {
    let mut m = io::read_matrix(cfg.matrix(), cfg.n_annotation(), cfg.normalizer())?;
    let excl = io::read_exclusion_list(cfg.exclusion_list(), cfg.normalizer())?;
    let report = filter_matrix(&mut m, &excl, &cfg.matrix().display().to_string())?;
    io::write_matrix(cfg.output(), &m)?;
    Ok(report)
}
