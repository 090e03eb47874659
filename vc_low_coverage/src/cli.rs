use std::path::PathBuf;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    Command,
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
            Arg::new("max_percentage")
                .short('m')
                .long("max-percentage")
                .value_parser(value_parser!(f64))
                .value_name("FLOAT")
                .default_value("74.99")
                .help("Report sequences with a covered percentage below this value"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Output coverage summary for all sequences"),
        )
        .arg(
            Arg::new("input")
                .value_parser(value_parser!(PathBuf))
                .value_name("INPUT")
                .required(true)
                .help("Coverage file with sequence, start, stop and depth columns"),
        )
        .arg(
            Arg::new("output")
                .value_parser(value_parser!(PathBuf))
                .value_name("OUTPUT")
                .required(true)
                .help("Output file"),
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
        .expect("Missing input file")
        .clone();

    let output = m
        .get_one::<PathBuf>("output")
        .expect("Missing output file")
        .clone();

    let mut cfg = Config::new(input, output);

    if let Some(x) = m.get_one::<f64>("max_percentage") {
        cfg.set_max_percentage(*x)?
    }
    if m.get_flag("all") {
        cfg.set_write_all()
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_input_and_output() {
        assert!(cli_model()
            .try_get_matches_from(["vc_low_coverage", "genomecov.tsv"])
            .is_err());
        let m = cli_model()
            .try_get_matches_from(["vc_low_coverage", "genomecov.tsv", "under_75.tsv"])
            .unwrap();
        assert_eq!(
            *m.get_one::<f64>("max_percentage").unwrap(),
            DEFAULT_MAX_PERCENTAGE
        );
        assert!(!m.get_flag("all"));
    }
}
