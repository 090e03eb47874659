use std::collections::HashMap;

use crate::config::Contig;

/// One line of coverage input: depth over the half open interval [start, stop)
#[derive(Debug, Clone)]
pub struct CoverageSpan {
    pub ctg: Contig,
    pub start: u64,
    pub stop: u64,
    pub depth: f64,
}

/// Coverage summary for one sequence
///
/// total_len - largest stop coordinate seen for the sequence (all spans)
/// covered - number of bases in spans with non-zero depth
///
#[derive(Debug, Clone)]
pub struct SequenceCoverage {
    ctg: Contig,
    total_len: u64,
    covered: u64,
    // Index of the first span and first non-zero span for this sequence; used for ordering
    first_seen: usize,
    first_covered: Option<usize>,
}

impl SequenceCoverage {
    fn new(ctg: Contig, first_seen: usize) -> Self {
        Self {
            ctg,
            total_len: 0,
            covered: 0,
            first_seen,
            first_covered: None,
        }
    }

    pub fn ctg(&self) -> &Contig {
        &self.ctg
    }

    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    pub fn covered(&self) -> u64 {
        self.covered
    }

    pub fn covered_fraction(&self) -> f64 {
        if self.total_len == 0 {
            0.0
        } else {
            self.covered as f64 / self.total_len as f64
        }
    }

    /// Covered fraction as a percentage.
    /// Computed as (covered * 100) / total_len so that whole number
    /// percentages are exact
    pub fn percentage(&self) -> f64 {
        if self.total_len == 0 {
            0.0
        } else {
            (self.covered as f64 * 100.0) / self.total_len as f64
        }
    }
}

/// Group spans by sequence and sum up the covered bases.
///
/// Sequences are returned in order of their first span with non-zero depth,
/// followed by sequences without coverage in order of first appearance.
pub fn summarize_spans(spans: &[CoverageSpan]) -> Vec<SequenceCoverage> {
    let mut ix_hash: HashMap<Contig, usize> = HashMap::new();
    let mut v: Vec<SequenceCoverage> = Vec::new();

    for (i, span) in spans.iter().enumerate() {
        let ix = *ix_hash.entry(span.ctg.clone()).or_insert_with(|| {
            v.push(SequenceCoverage::new(span.ctg.clone(), i));
            v.len() - 1
        });
        let s = &mut v[ix];
        s.total_len = s.total_len.max(span.stop);
        if span.depth != 0.0 {
            s.covered += span.stop.saturating_sub(span.start);
            if s.first_covered.is_none() {
                s.first_covered = Some(i)
            }
        }
    }

    v.sort_by_key(|s| match s.first_covered {
        Some(i) => (0, i),
        None => (1, s.first_seen),
    });
    v
}

/// Sequences with percentage coverage strictly below max_percentage
pub fn low_coverage(summary: &[SequenceCoverage], max_percentage: f64) -> Vec<&SequenceCoverage> {
    summary
        .iter()
        .filter(|s| s.percentage() < max_percentage)
        .collect()
}
