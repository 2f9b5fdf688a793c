//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::inputs::InputSource;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default input directory
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";
const DEFAULT_INPUT_DIR: &str = "inputs";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    pub input_source: InputSource,
    /// Quiet mode
    pub quiet: bool,
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var(INPUT_DIR_ENV).ok())
    }

    /// Build config with an explicit value for [`INPUT_DIR_ENV`]
    pub fn resolve(args: Args, env_input_dir: Option<String>) -> Result<Self, CliError> {
        let input_source = match (args.input, args.input_dir) {
            (Some(_), _) if args.day.is_none() => {
                return Err(CliError::Config(
                    "--input needs --day to know which puzzle the file belongs to".to_string(),
                ));
            }
            (Some(file), _) => InputSource::File(expand_tilde(&file)),
            (None, Some(dir)) => InputSource::Directory(expand_tilde(&dir)),
            (None, None) => {
                let dir = env_input_dir
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| DEFAULT_INPUT_DIR.to_string());
                InputSource::Directory(expand_tilde(Path::new(&dir)))
            }
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_source,
            quiet: args.quiet,
            verbosity: args.verbose,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("aoc").chain(argv.iter().copied()))
    }

    #[test]
    fn test_default_input_dir() {
        let config = Config::resolve(args(&[]), None).unwrap();
        assert_eq!(
            config.input_source,
            InputSource::Directory(PathBuf::from("inputs"))
        );
        assert_eq!(config.year_filter, None);
        assert!(!config.quiet);
    }

    #[test]
    fn test_env_input_dir() {
        let config = Config::resolve(args(&[]), Some("/data/aoc".to_string())).unwrap();
        assert_eq!(
            config.input_source,
            InputSource::Directory(PathBuf::from("/data/aoc"))
        );
    }

    #[test]
    fn test_flag_beats_env() {
        let config =
            Config::resolve(args(&["--input-dir", "here"]), Some("/data/aoc".to_string())).unwrap();
        assert_eq!(config.input_source, InputSource::Directory(PathBuf::from("here")));
    }

    #[test]
    fn test_input_requires_day() {
        let result = Config::resolve(args(&["--input", "day01.txt"]), None);
        assert!(matches!(result, Err(CliError::Config(_))));

        let config = Config::resolve(args(&["--input", "day01.txt", "-d", "1"]), None).unwrap();
        assert_eq!(config.input_source, InputSource::File(PathBuf::from("day01.txt")));
        assert_eq!(config.day_filter, Some(1));
    }

    #[test]
    fn test_filters_and_flags() {
        let config = Config::resolve(
            args(&["-y", "2020", "-p", "2", "-t", "2020,pair-sum", "-q", "-vv"]),
            None,
        )
        .unwrap();
        assert_eq!(config.year_filter, Some(2020));
        assert_eq!(config.part_filter, Some(2));
        assert_eq!(config.tags, vec!["2020", "pair-sum"]);
        assert!(config.quiet);
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
