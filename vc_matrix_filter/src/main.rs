mod cli;
mod config;
mod io;
mod matrix;
mod normalize;
mod process;

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli().with_context(|| "Error processing command line arguments")?;
    let report = process::process_files(&cfg)?;
    println!("{}", report);
    Ok(())
}
