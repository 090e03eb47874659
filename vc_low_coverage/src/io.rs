use std::{
    collections::HashSet,
    io::{BufRead, Write},
    sync::Arc,
};

use anyhow::Context;
use utils::{get_next_line, parse_field, TableError};

use crate::{
    config::Contig,
    coverage::{CoverageSpan, SequenceCoverage},
};

/// Read coverage spans.
/// Expects four tab separated columns without a header:
/// sequence name, start, stop, depth.  Blank lines are skipped
pub fn read_spans<R: BufRead>(rdr: &mut R, input: &str) -> anyhow::Result<Vec<CoverageSpan>> {
    let mut buf = String::new();
    let mut line = 0;
    let mut ctg_hash: HashSet<Contig> = HashSet::new();
    let mut spans = Vec::new();

    while let Some(fields) = get_next_line(rdr, &mut buf)
        .with_context(|| format!("Error after reading {} lines from {}", line, input))?
    {
        line += 1;
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 4 {
            return Err(TableError::ShortLine {
                input: input.to_owned(),
                line,
                expected: 4,
                found: fields.len(),
            }
            .into());
        }
        let start = parse_field::<u64>(fields[1], input, line, "start")?;
        let stop = parse_field::<u64>(fields[2], input, line, "stop")?;
        let depth = parse_field::<f64>(fields[3], input, line, "coverage")?;
        if !ctg_hash.contains(fields[0]) {
            trace!("Adding contig {}", fields[0]);
            ctg_hash.insert(Arc::from(fields[0]));
        }
        let ctg = ctg_hash.get(fields[0]).unwrap().clone();
        spans.push(CoverageSpan {
            ctg,
            start,
            stop,
            depth,
        })
    }

    debug!(
        "Finished reading in {} lines from {}; found {} spans for {} sequences",
        line,
        input,
        spans.len(),
        ctg_hash.len()
    );
    Ok(spans)
}

/// Write sequence name and percentage coverage
pub fn write_low_coverage<W: Write>(wrt: &mut W, v: &[&SequenceCoverage]) -> std::io::Result<()> {
    writeln!(wrt, "sequence\tpercentage")?;
    for s in v.iter() {
        writeln!(wrt, "{}\t{}", s.ctg(), s.percentage())?
    }
    Ok(())
}

/// Write full coverage summary
pub fn write_summary<W: Write>(wrt: &mut W, v: &[SequenceCoverage]) -> std::io::Result<()> {
    writeln!(wrt, "sequence\ttotal_length\tcovered_bases\tpercentage")?;
    for s in v.iter() {
        writeln!(
            wrt,
            "{}\t{}\t{}\t{}",
            s.ctg(),
            s.total_len(),
            s.covered(),
            s.percentage()
        )?
    }
    Ok(())
}
