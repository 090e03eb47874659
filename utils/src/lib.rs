#[macro_use]
extern crate log;

use std::{fmt, io::BufRead, path::Path, str::FromStr};

use anyhow::Context;
use clap::ArgMatches;
use compress_io::compress::CompressIo;

pub mod error;
pub mod table;

pub use error::TableError;
pub use table::{read_table, Table};

/// LogLevel
///
/// Represents minimum level of messages that will be logged
///
#[derive(Debug, Clone, Copy)]
pub struct LogLevel {
    pub level: usize,
}

impl FromStr for LogLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel { level: 0 }),
            "warn" => Ok(LogLevel { level: 1 }),
            "info" => Ok(LogLevel { level: 2 }),
            "debug" => Ok(LogLevel { level: 3 }),
            "trace" => Ok(LogLevel { level: 4 }),
            "none" => Ok(LogLevel { level: 5 }),
            _ => Err("no match"),
        }
    }
}

impl LogLevel {
    pub fn is_none(&self) -> bool {
        self.level > 4
    }
    pub fn get_level(&self) -> usize {
        if self.level > 4 {
            0
        } else {
            self.level
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let level_str = ["error", "warn", "info", "debug", "trace", "none"];
        if self.level < 6 {
            write!(f, "{}", level_str[self.level])
        } else {
            write!(f, "unknown")
        }
    }
}

/// Add the logging options shared by all tools to a clap Command
pub fn add_log_args(cmd: clap::Command) -> clap::Command {
    use clap::{value_parser, Arg, ArgAction};

    cmd.arg(
        Arg::new("timestamp")
            .short('X')
            .long("timestamp")
            .value_parser(value_parser!(stderrlog::Timestamp))
            .value_name("GRANULARITY")
            .default_value("none")
            .help("Prepend log entries with a timestamp"),
    )
    .arg(
        Arg::new("loglevel")
            .short('l')
            .long("loglevel")
            .value_name("LOGLEVEL")
            .value_parser(value_parser!(LogLevel))
            .ignore_case(true)
            .default_value("warn")
            .help("Set log level"),
    )
    .arg(
        Arg::new("quiet")
            .action(ArgAction::SetTrue)
            .long("quiet")
            .conflicts_with("loglevel")
            .help("Silence all output"),
    )
}

/// Initialize logging from command line arguments
pub fn init_log(m: &ArgMatches) {
    let verbose = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .unwrap_or_else(|| LogLevel::from_str("info").expect("Could not set loglevel info"));
    let quiet = verbose.is_none() || m.get_flag("quiet");
    let ts = m
        .get_one::<stderrlog::Timestamp>("timestamp")
        .copied()
        .unwrap_or(stderrlog::Timestamp::Off);

    stderrlog::new()
        .quiet(quiet)
        .verbosity(verbose.get_level())
        .timestamp(ts)
        .init()
        .unwrap();
}

/// Read in next line and split on tabs after trimming white space.
/// Blank lines give an empty vector.
pub fn get_next_line<'a, R: BufRead>(
    rdr: &mut R,
    buf: &'a mut String,
) -> anyhow::Result<Option<Vec<&'a str>>> {
    buf.clear();
    if rdr.read_line(buf)? == 0 {
        Ok(None)
    } else {
        let s = buf.trim();
        if s.is_empty() {
            Ok(Some(Vec::new()))
        } else {
            Ok(Some(s.split('\t').collect()))
        }
    }
}

/// Read in next line and split on `delim`.
///
/// Only the line terminator is removed, so empty trailing fields are kept
/// (needed for ragged tables). Blank lines give an empty vector.
pub fn get_next_delimited_line<'a, R: BufRead>(
    rdr: &mut R,
    buf: &'a mut String,
    delim: char,
) -> anyhow::Result<Option<Vec<&'a str>>> {
    buf.clear();
    if rdr.read_line(buf)? == 0 {
        Ok(None)
    } else {
        let s = buf.trim_end_matches(['\n', '\r']);
        if s.trim().is_empty() {
            Ok(Some(Vec::new()))
        } else {
            Ok(Some(s.split(delim).collect()))
        }
    }
}

/// Open a (possibly compressed) input file, checking first that it exists
pub fn open_input<P: AsRef<Path>>(name: P) -> anyhow::Result<impl BufRead> {
    let name = name.as_ref();
    if !name.exists() {
        return Err(TableError::InputNotFound(name.to_owned()).into());
    }
    trace!("Opening {} for reading", name.display());
    CompressIo::new()
        .path(name)
        .bufreader()
        .with_context(|| format!("Could not open {} for reading", name.display()))
}

/// Parse a single field, reporting the position of the field on failure
pub fn parse_field<T: FromStr>(
    s: &str,
    input: &str,
    line: usize,
    column: &str,
) -> Result<T, TableError> {
    s.trim().parse::<T>().map_err(|_| TableError::Parse {
        input: input.to_owned(),
        line,
        column: column.to_owned(),
        value: s.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parse() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap().level, 3);
        assert!(LogLevel::from_str("none").unwrap().is_none());
        assert_eq!(LogLevel::from_str("none").unwrap().get_level(), 0);
        assert!(LogLevel::from_str("loud").is_err());
        assert_eq!(format!("{}", LogLevel { level: 2 }), "info");
    }

    #[test]
    fn next_line_tabs() {
        let mut rdr: &[u8] = b"a\t1\t2 \n\n b\t3\n";
        let mut buf = String::new();
        assert_eq!(
            get_next_line(&mut rdr, &mut buf).unwrap(),
            Some(vec!["a", "1", "2"])
        );
        assert_eq!(get_next_line(&mut rdr, &mut buf).unwrap(), Some(vec![]));
        assert_eq!(
            get_next_line(&mut rdr, &mut buf).unwrap(),
            Some(vec!["b", "3"])
        );
        assert_eq!(get_next_line(&mut rdr, &mut buf).unwrap(), None);
    }

    #[test]
    fn next_line_keeps_empty_trailing_fields() {
        let mut rdr: &[u8] = b"a|b|\r\n";
        let mut buf = String::new();
        assert_eq!(
            get_next_delimited_line(&mut rdr, &mut buf, '|').unwrap(),
            Some(vec!["a", "b", ""])
        );
        assert_eq!(
            get_next_delimited_line(&mut rdr, &mut buf, '|').unwrap(),
            None
        );
    }

    #[test]
    fn parse_field_error_position() {
        let x: f64 = parse_field(" 0.5", "in.tsv", 3, "score").unwrap();
        assert_eq!(x, 0.5);
        let e = parse_field::<u64>("12x", "in.tsv", 4, "start").unwrap_err();
        assert_eq!(
            e.to_string(),
            "in.tsv:4 Could not parse '12x' in column start"
        );
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("absent.tsv");
        let e = open_input(&p).err().unwrap();
        assert!(matches!(
            e.downcast_ref::<TableError>(),
            Some(TableError::InputNotFound(_))
        ));
    }

    #[test]
    fn read_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("in.tsv");
        std::fs::write(&p, "x\t1\n").unwrap();
        let mut rdr = open_input(&p).unwrap();
        let mut buf = String::new();
        assert_eq!(
            get_next_line(&mut rdr, &mut buf).unwrap(),
            Some(vec!["x", "1"])
        );
    }
}
