//! Configuration resolution from CLI args

use crate::cli::Args;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the data directory when `--data-dir` is absent
pub const DATA_DIR_ENV: &str = "AOC_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_TEMPLATE: &str = "aoc-2023/templates/day.rs.tmpl";
const DEFAULT_SOLUTIONS_DIR: &str = "aoc-2023/src/solutions";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the `inputs/` and `examples/` directories
    pub data_dir: PathBuf,
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args, falling back to the environment
    pub fn from_args(args: &Args) -> Self {
        Self::resolve(args, std::env::var_os(DATA_DIR_ENV))
    }

    fn resolve(args: &Args, env_data_dir: Option<OsString>) -> Self {
        let data_dir = args
            .data_dir
            .clone()
            .or_else(|| env_data_dir.filter(|s| !s.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Config {
            data_dir: expand_tilde(&data_dir),
            verbosity: args.verbose,
        }
    }
}

/// Where `aoc create` reads the template and writes the new file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPaths {
    pub template: PathBuf,
    pub solutions_dir: PathBuf,
}

impl ScaffoldPaths {
    pub fn resolve(template: Option<&Path>, solutions_dir: Option<&Path>) -> Self {
        Self {
            template: expand_tilde(template.unwrap_or(Path::new(DEFAULT_TEMPLATE))),
            solutions_dir: expand_tilde(solutions_dir.unwrap_or(Path::new(DEFAULT_SOLUTIONS_DIR))),
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_data_dir_precedence() {
        let flag = args(&["aoc", "--data-dir", "puzzles", "list"]);
        assert_eq!(
            Config::resolve(&flag, Some("elsewhere".into())).data_dir,
            PathBuf::from("puzzles")
        );

        let bare = args(&["aoc", "list"]);
        assert_eq!(
            Config::resolve(&bare, Some("elsewhere".into())).data_dir,
            PathBuf::from("elsewhere")
        );
        assert_eq!(Config::resolve(&bare, None).data_dir, PathBuf::from("data"));
        assert_eq!(
            Config::resolve(&bare, Some(OsString::new())).data_dir,
            PathBuf::from("data")
        );
    }

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/aoc/data")), home.join("aoc/data"));
        assert_eq!(expand_tilde(Path::new("data/~x")), PathBuf::from("data/~x"));
    }

    #[test]
    fn test_scaffold_defaults() {
        let paths = ScaffoldPaths::resolve(None, Some(Path::new("elsewhere")));
        assert_eq!(paths.template, PathBuf::from(DEFAULT_TEMPLATE));
        assert_eq!(paths.solutions_dir, PathBuf::from("elsewhere"));
    }
}
