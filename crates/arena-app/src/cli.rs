//! Command-line parsing for the `arena` binary.
//!
//! Usage:
//!   arena [--seed N] [--tuning tuning.toml] [--ticks N] [--every N] [--fast]

use std::path::PathBuf;

use crate::error::AppError;

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub seed: Option<u64>,
    /// Tuning file (`.json` or `.toml`).
    pub tuning: Option<PathBuf>,
    /// Stop after this many ticks. Runs until stdin closes when absent.
    pub ticks: Option<u64>,
    /// Emit every Nth snapshot.
    pub every: u64,
    /// Tick as fast as possible instead of at 60 Hz.
    pub fast: bool,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            seed: None,
            tuning: None,
            ticks: None,
            every: 1,
            fast: false,
            help: false,
        }
    }
}

impl CliArgs {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Self, AppError> {
        let mut parsed = Self::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--seed" => parsed.seed = Some(parse_number(arg, iter.next())?),
                "--tuning" => parsed.tuning = Some(PathBuf::from(value(arg, iter.next())?)),
                "--ticks" => parsed.ticks = Some(parse_number(arg, iter.next())?),
                "--every" => {
                    parsed.every = parse_number(arg, iter.next())?;
                    if parsed.every == 0 {
                        return Err(AppError::Args("--every must be at least 1".into()));
                    }
                }
                "--fast" => parsed.fast = true,
                "help" | "--help" | "-h" => parsed.help = true,
                other => return Err(AppError::Args(format!("Unknown argument: {other}"))),
            }
        }

        Ok(parsed)
    }
}

fn value<'a>(flag: &str, next: Option<&'a String>) -> Result<&'a str, AppError> {
    next.map(String::as_str)
        .ok_or_else(|| AppError::Args(format!("{flag} needs a value")))
}

fn parse_number(flag: &str, next: Option<&String>) -> Result<u64, AppError> {
    let raw = value(flag, next)?;
    raw.parse()
        .map_err(|_| AppError::Args(format!("{flag} expects a number, got {raw:?}")))
}

pub fn print_usage() {
    eprintln!(
        "arena: headless sumo arena simulation\n\
         \n\
         Reads player commands as JSON lines on stdin and writes game state\n\
         snapshots as JSON lines on stdout.\n\
         \n\
         Options:\n\
         \n\
           --seed <N>       RNG seed (default: 42)\n\
           --tuning <path>  Tuning file, .json or .toml (default: built-in values)\n\
           --ticks <N>      Stop after N ticks (default: run until stdin closes)\n\
           --every <N>      Emit every Nth snapshot (default: 1)\n\
           --fast           Do not pace ticks to 60 Hz\n\
         \n\
         Examples:\n\
         \n\
           echo '{{\"type\":\"StartGame\"}}' | arena --ticks 600 --every 60 --fast\n\
           arena --seed 7 --tuning tuning.toml\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::parse(&[]).unwrap();
        assert_eq!(parsed, CliArgs::default());
        assert_eq!(parsed.every, 1);
    }

    #[test]
    fn test_all_flags() {
        let parsed = CliArgs::parse(&args(&[
            "--seed", "7", "--tuning", "arena.toml", "--ticks", "600", "--every", "60", "--fast",
        ]))
        .unwrap();
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.tuning, Some(PathBuf::from("arena.toml")));
        assert_eq!(parsed.ticks, Some(600));
        assert_eq!(parsed.every, 60);
        assert!(parsed.fast);
        assert!(!parsed.help);
    }

    #[test]
    fn test_help() {
        assert!(CliArgs::parse(&args(&["--help"])).unwrap().help);
        assert!(CliArgs::parse(&args(&["-h"])).unwrap().help);
    }

    #[test]
    fn test_missing_value() {
        let err = CliArgs::parse(&args(&["--seed"])).unwrap_err();
        assert!(matches!(err, AppError::Args(_)));
    }

    #[test]
    fn test_bad_number() {
        let err = CliArgs::parse(&args(&["--ticks", "lots"])).unwrap_err();
        assert!(err.to_string().contains("--ticks"));
    }

    #[test]
    fn test_zero_stride_rejected() {
        assert!(CliArgs::parse(&args(&["--every", "0"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        let err = CliArgs::parse(&args(&["--turbo"])).unwrap_err();
        assert!(err.to_string().contains("--turbo"));
    }
}
