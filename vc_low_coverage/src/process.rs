use std::{fmt, io::Write};

use anyhow::Context;
use compress_io::compress::CompressIo;
use utils::open_input;

use crate::{
    config::Config,
    coverage::{low_coverage, summarize_spans},
    io,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageReport {
    pub spans: usize,
    pub sequences: usize,
    pub low_coverage: usize,
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} spans, {} sequences, {} with low coverage",
            self.spans, self.sequences, self.low_coverage
        )
    }
}

/// Strategy
///
/// Read in all spans, sum up covered bases per sequence and
/// write out those sequences with coverage below the threshold
/// (or all sequences if requested)
pub fn process_file(cfg: &Config) -> anyhow::Result<CoverageReport> {
    let input = cfg.input().display().to_string();
    debug!("Reading coverage spans from {}", input);
    let mut rdr = open_input(cfg.input())?;
    let spans = io::read_spans(&mut rdr, &input)?;

    let summary = summarize_spans(&spans);
    let low = low_coverage(&summary, cfg.max_percentage());
    let report = CoverageReport {
        spans: spans.len(),
        sequences: summary.len(),
        low_coverage: low.len(),
    };

    let out = cfg.output();
    debug!("Writing output to {}", out.display());
    let mut wrt = CompressIo::new()
        .path(out)
        .bufwriter()
        .with_context(|| format!("Could not open output file {}", out.display()))?;
    let res = if cfg.write_all() {
        io::write_summary(&mut wrt, &summary)
    } else {
        io::write_low_coverage(&mut wrt, &low)
    };
    res.and_then(|_| wrt.flush())
        .with_context(|| format!("Error writing to {}", out.display()))?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENOMECOV: &str = "v1\t0\t50\t5\n\
                             v1\t50\t100\t0\n\
                             v2\t0\t100\t3\n\
                             v3\t0\t20\t0\n\
                             v3\t20\t60\t2\n\
                             v3\t60\t80\t1\n";

    #[test]
    fn process_and_rerun() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("infile.tsv");
        std::fs::write(&input, GENOMECOV).unwrap();

        let out1 = dir.path().join("run1.tsv");
        let report = process_file(&Config::new(input.clone(), out1.clone())).unwrap();
        assert_eq!(
            report,
            CoverageReport {
                spans: 6,
                sequences: 3,
                low_coverage: 1
            }
        );
        let s1 = std::fs::read_to_string(&out1).unwrap();
        assert_eq!(s1, "sequence\tpercentage\nv1\t50\n");

        // Running again gives the same output
        let out2 = dir.path().join("run2.tsv");
        process_file(&Config::new(input, out2.clone())).unwrap();
        assert_eq!(std::fs::read_to_string(&out2).unwrap(), s1);
    }

    #[test]
    fn write_all_sequences() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("infile.tsv");
        std::fs::write(&input, GENOMECOV).unwrap();
        let out = dir.path().join("all.tsv");
        let mut cfg = Config::new(input, out.clone());
        cfg.set_write_all();
        cfg.set_max_percentage(80.0).unwrap();
        let report = process_file(&cfg).unwrap();
        assert_eq!(report.low_coverage, 2);
        let s = std::fs::read_to_string(&out).unwrap();
        assert_eq!(s.lines().count(), 4);
        assert!(s.contains("v3\t80\t60\t75\n"));
    }

    #[test]
    fn invalid_threshold() {
        let mut cfg = Config::new("a".into(), "b".into());
        assert!(cfg.set_max_percentage(101.0).is_err());
    }
}
