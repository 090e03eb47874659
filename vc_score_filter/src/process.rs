use std::fmt;

use utils::{parse_field, Table, TableError};

use crate::{
    config::{Config, Thresholds},
    io,
};

/// Counts from a filtering run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreFilterReport {
    pub rows_read: usize,
    pub rows_kept: usize,
}

impl fmt::Display for ScoreFilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} rows kept", self.rows_kept, self.rows_read)
    }
}

/// Tokens read as a missing value (the default NA strings of pandas)
const MISSING_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// Missing values never pass the filter.  Anything else that is not a number is an error
fn get_value(
    row: &[String],
    ix: usize,
    col: &str,
    input: &str,
    line: usize,
) -> Result<Option<f64>, TableError> {
    match row.get(ix).map(|s| s.trim()) {
        None => Ok(None),
        Some(s) if MISSING_VALUES.contains(&s) => Ok(None),
        Some(s) => parse_field::<f64>(s, input, line, col).map(Some),
    }
}

/// Keep rows with score > min_score and pvalue < max_pvalue, preserving input order.
/// Kept rows are copied unchanged.
pub fn filter_scores(
    table: &Table,
    thresholds: &Thresholds,
    input: &str,
) -> Result<(Table, ScoreFilterReport), TableError> {
    let score_ix = table.column_index("score", input)?;
    let pvalue_ix = table.column_index("pvalue", input)?;

    let mut kept = Vec::new();
    for (i, row) in table.rows().iter().enumerate() {
        // Header is line 1
        let line = i + 2;
        let score = get_value(row, score_ix, "score", input, line)?;
        let pvalue = get_value(row, pvalue_ix, "pvalue", input, line)?;
        match (score, pvalue) {
            (Some(s), Some(p)) if thresholds.passes(s, p) => kept.push(row.clone()),
            _ => trace!("{}:{} Row excluded", input, line),
        }
    }

    let report = ScoreFilterReport {
        rows_read: table.len(),
        rows_kept: kept.len(),
    };
    Ok((Table::new(table.header().to_vec(), kept), report))
}

pub fn process_file(cfg: &Config) -> anyhow::Result<ScoreFilterReport> {
    let input = cfg.input().display().to_string();
    let table = io::read_classifier_table(cfg.input())?;
    let (filtered, report) = filter_scores(&table, cfg.thresholds(), &input)?;
    info!(
        "{} of {} rows from {} passed thresholds",
        report.rows_kept, report.rows_read, input
    );
    io::write_classifier_table(cfg.output(), &filtered)?;
    Ok(report)
}
