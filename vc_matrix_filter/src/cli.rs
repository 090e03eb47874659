use std::path::PathBuf;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    Command,
};

use utils::{add_log_args, init_log};

use crate::{config::*, normalize::*};

/// Set up definition of command options for clap
fn cli_model() -> Command {
    let cmd = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .author(crate_authors!());

    add_log_args(cmd)
        .arg(
            Arg::new("marker")
                .short('m')
                .long("marker")
                .value_parser(value_parser!(String))
                .value_name("STRING")
                .default_value(DEFAULT_SUFFIX_MARKER)
                .help("Strip column names from this marker onwards to get sample names"),
        )
        .arg(
            Arg::new("suffix_regex")
                .short('r')
                .long("suffix-regex")
                .value_parser(value_parser!(String))
                .value_name("REGEX")
                .conflicts_with_all(["marker", "keep_names"])
                .help("Remove the first match of REGEX from column names to get sample names"),
        )
        .arg(
            Arg::new("keep_names")
                .short('k')
                .long("keep-names")
                .action(ArgAction::SetTrue)
                .conflicts_with("marker")
                .help("Use column names unchanged as sample names"),
        )
        .arg(
            Arg::new("annotation_columns")
                .short('a')
                .long("annotation-columns")
                .value_parser(value_parser!(usize))
                .value_name("INT")
                .default_value("0")
                .help("Number of non-sample columns following the contig column"),
        )
        .arg(
            Arg::new("matrix")
                .value_parser(value_parser!(PathBuf))
                .value_name("MATRIX")
                .default_value("coverage_table.tsv")
                .help("Coverage matrix with one row per contig and one column per sample"),
        )
        .arg(
            Arg::new("exclusion_list")
                .value_parser(value_parser!(PathBuf))
                .value_name("EXCLUSION_LIST")
                .default_value("under_75_per_sample.csv")
                .help("Low coverage contigs with one column per sample"),
        )
        .arg(
            Arg::new("output")
                .value_parser(value_parser!(PathBuf))
                .value_name("OUTPUT")
                .default_value("biochar_covtab_filter.csv")
                .help("Output file for filtered matrix"),
        )
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = cli_model().get_matches();

    // Setup logging
    init_log(&m);

    debug!("Processing command line options");

    let get_path = |s: &str| {
        m.get_one::<PathBuf>(s)
            .expect("Missing default file name")
            .clone()
    };

    let mut cfg = Config::new(
        get_path("matrix"),
        get_path("exclusion_list"),
        get_path("output"),
    );

    cfg.set_normalizer(get_normalizer(&m)?);

    if let Some(x) = m.get_one::<usize>("annotation_columns") {
        cfg.set_n_annotation(*x)
    }

    debug!("Column normalization: {:?}", cfg.normalizer());
    Ok(cfg)
}

fn get_normalizer(m: &clap::ArgMatches) -> anyhow::Result<ColumnNormalizer> {
    if let Some(s) = m.get_one::<String>("suffix_regex") {
        ColumnNormalizer::from_pattern(s)
    } else if m.get_flag("keep_names") {
        Ok(ColumnNormalizer::Identity)
    } else {
        let marker = m
            .get_one::<String>("marker")
            .expect("Missing default marker");
        Ok(ColumnNormalizer::from_marker(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer_for(args: &[&str]) -> ColumnNormalizer {
        let mut v = vec!["vc_matrix_filter"];
        v.extend_from_slice(args);
        let m = cli_model().try_get_matches_from(v).unwrap();
        get_normalizer(&m).unwrap()
    }

    #[test]
    fn default_files() {
        let m = cli_model()
            .try_get_matches_from(["vc_matrix_filter"])
            .unwrap();
        assert_eq!(
            m.get_one::<PathBuf>("matrix").unwrap(),
            &PathBuf::from("coverage_table.tsv")
        );
        assert_eq!(
            m.get_one::<PathBuf>("output").unwrap(),
            &PathBuf::from("biochar_covtab_filter.csv")
        );
        assert_eq!(*m.get_one::<usize>("annotation_columns").unwrap(), 0);
    }

    #[test]
    fn normalizer_options() {
        assert_eq!(normalizer_for(&[]).normalize("A_L006_x"), "A");
        assert_eq!(
            normalizer_for(&["--marker", "_S"]).normalize("A_S1_L006"),
            "A"
        );
        assert_eq!(normalizer_for(&["-k"]).normalize("A_L006_x"), "A_L006_x");
        assert_eq!(
            normalizer_for(&["-r", r"_L\d+.*"]).normalize("A_L001_x"),
            "A"
        );
    }
}
