use std::{io::Write, path::Path};

use anyhow::Context;
use compress_io::compress::CompressIo;
use utils::{open_input, read_table, Table};

pub fn read_classifier_table(p: &Path) -> anyhow::Result<Table> {
    debug!("Reading classifier results from {}", p.display());
    let mut rdr = open_input(p)?;
    read_table(&mut rdr, '\t', &p.display().to_string())
}

pub fn write_classifier_table(p: &Path, t: &Table) -> anyhow::Result<()> {
    debug!("Writing {} filtered rows to {}", t.len(), p.display());
    let mut wrt = CompressIo::new()
        .path(p)
        .bufwriter()
        .with_context(|| format!("Could not open output file {}", p.display()))?;
    t.write(&mut wrt, '\t')
        .and_then(|_| wrt.flush())
        .with_context(|| format!("Error writing filtered table to {}", p.display()))
}
