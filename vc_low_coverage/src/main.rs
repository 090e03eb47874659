mod cli;
mod config;
mod coverage;
mod io;
mod process;

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli().with_context(|| "Error processing command line arguments")?;
    let report = process::process_file(&cfg)?;
    info!("{}", report);
    Ok(())
}
