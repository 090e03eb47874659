use std::{io::Write, path::Path};

use anyhow::Context;
use compress_io::compress::CompressIo;
use utils::{open_input, read_table};

use crate::{
    matrix::{CoverageMatrix, ExclusionList},
    normalize::ColumnNormalizer,
};

pub fn read_matrix(
    p: &Path,
    n_annotation: usize,
    normalizer: &ColumnNormalizer,
) -> anyhow::Result<CoverageMatrix> {
    debug!("Reading coverage matrix from {}", p.display());
    let input = p.display().to_string();
    let mut rdr = open_input(p)?;
    let t = read_table(&mut rdr, '\t', &input)?;
    let m = CoverageMatrix::from_table(&t, n_annotation, normalizer, &input)?;
    debug!(
        "Read {} rows and {} samples from {}",
        m.rows().len(),
        m.samples().len(),
        input
    );
    Ok(m)
}

pub fn read_exclusion_list(
    p: &Path,
    normalizer: &ColumnNormalizer,
) -> anyhow::Result<ExclusionList> {
    debug!("Reading low coverage lists from {}", p.display());
    let mut rdr = open_input(p)?;
    let t = read_table(&mut rdr, '|', &p.display().to_string())?;
    Ok(ExclusionList::from_table(&t, normalizer))
}

pub fn write_matrix(p: &Path, m: &CoverageMatrix) -> anyhow::Result<()> {
    debug!("Writing filtered matrix to {}", p.display());
    let mut wrt = CompressIo::new()
        .path(p)
        .bufwriter()
        .with_context(|| format!("Could not open output file {}", p.display()))?;
    m.write(&mut wrt, '|')
        .and_then(|_| wrt.flush())
        .with_context(|| format!("Error writing filtered matrix to {}", p.display()))
}
