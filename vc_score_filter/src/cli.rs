use std::path::PathBuf;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, Command,
};

use utils::{add_log_args, init_log};

use crate::config::*;

/// Set up definition of command options for clap
fn cli_model() -> Command {
    let cmd = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .author(crate_authors!());

    add_log_args(cmd)
        .arg(
            Arg::new("min_score")
                .short('s')
                .long("min-score")
                .value_parser(value_parser!(f64))
                .value_name("FLOAT")
                .default_value("0.899")
                .help("Keep entries with a score above this value"),
        )
        .arg(
            Arg::new("max_pvalue")
                .short('p')
                .long("max-pvalue")
                .value_parser(value_parser!(f64))
                .value_name("FLOAT")
                .default_value("0.05")
                .help("Keep entries with a p-value below this value"),
        )
        .arg(
            Arg::new("input")
                .value_parser(value_parser!(PathBuf))
                .value_name("INPUT")
                .default_value("infile.tsv")
                .help("Classifier output with score and pvalue columns"),
        )
        .arg(
            Arg::new("output")
                .value_parser(value_parser!(PathBuf))
                .value_name("OUTPUT")
                .default_value("outfile.tsv")
                .help("Output file for filtered table"),
        )
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = cli_model().get_matches();

    // Setup logging
    init_log(&m);

    debug!("Processing command line options");

    let input = m
        .get_one::<PathBuf>("input")
        .expect("Missing default input file")
        .clone();

    let output = m
        .get_one::<PathBuf>("output")
        .expect("Missing default output file")
        .clone();

    let mut cfg = Config::new(input, output);

    if let Some(x) = m.get_one::<f64>("min_score") {
        cfg.set_min_score(*x)
    }
    if let Some(x) = m.get_one::<f64>("max_pvalue") {
        cfg.set_max_pvalue(*x)?
    }

    debug!("Thresholds: {:?}", cfg.thresholds());
    Ok(cfg)
}
