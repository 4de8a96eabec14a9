//! Command-line interface module.
//!
//! This module handles CLI argument parsing and palette file discovery.

use crate::progress::{Moment, parse_moment};
use clap::{ArgAction, Parser, builder::RangedU64ValueParser};
use std::{
    env,
    path::{Path, PathBuf},
};

/// File name of the palette config, looked up in several directories.
pub const DEFAULT_CONFIG_FILE: &str = ".year_progress_colors.json";

/// Subdirectory of `$XDG_CONFIG_HOME` holding the palette config.
pub const CONFIG_DIR_NAME: &str = "year-progress";

/// Number of glyphs in the progress bar unless `--length` says otherwise.
pub const DEFAULT_BAR_LENGTH: usize = 30;

/// Longest bar `--length` accepts.
pub const MAX_BAR_LENGTH: usize = 1024;

/// CLI arguments for year-progress
#[derive(Parser, Debug)]
#[command(
    name = "year-progress",
    author,
    version,
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Output only the percentage number
    #[arg(short = 'p', long = "percentage")]
    pub percentage: bool,

    /// Output in JSON format
    #[arg(short = 'j', long = "json", conflicts_with = "percentage")]
    pub json: bool,

    /// Path to the color palette file (JSON).
    /// If not provided, searches $XDG_CONFIG_HOME/year-progress, the home
    /// directory and finally the current directory.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Emit colors even when stdout is not a terminal
    #[arg(long = "force-color", conflicts_with = "no_color")]
    pub force_color: bool,

    /// Never emit colors
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Number of glyphs in the progress bar (at most 1024)
    #[arg(
        short = 'l',
        long = "length",
        default_value_t = DEFAULT_BAR_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_BAR_LENGTH as u64)
    )]
    pub length: usize,

    /// Compute progress for this timestamp instead of now
    /// (RFC 3339, 'YYYY-MM-DDTHH:MM:SS' or 'YYYY-MM-DD')
    #[arg(short = 'd', long = "date", value_parser = parse_moment)]
    pub date: Option<Moment>,
}

/// Searches the usual locations for a palette file.
///
/// Candidates are checked in order and the first existing file wins:
/// 1. `<xdg_config_home>/year-progress/.year_progress_colors.json`
/// 2. `<home>/.year_progress_colors.json`
///
/// Falls back to the bare file name, i.e. the current directory.
///
/// # Arguments
/// * `xdg_config_home` - Value of `$XDG_CONFIG_HOME`, if set
/// * `home` - The user's home directory, if known
///
/// # Returns
/// `PathBuf` of the first existing candidate, or `.year_progress_colors.json`
pub fn find_config_file(xdg_config_home: Option<&Path>, home: Option<&Path>) -> PathBuf {
    let candidates = [
        xdg_config_home.map(|dir| dir.join(CONFIG_DIR_NAME).join(DEFAULT_CONFIG_FILE)),
        home.map(|dir| dir.join(DEFAULT_CONFIG_FILE)),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|path| path.is_file())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Resolves the palette file path from CLI arguments or auto-discovery.
///
/// An explicit `--config` path is returned as-is, even if it does not exist;
/// loading it later decides how to report that.
///
/// # Arguments
/// * `args` - The parsed CLI arguments
///
/// # Returns
/// `PathBuf` of the palette file to try loading
pub fn resolve_config_path(args: &Args) -> PathBuf {
    if let Some(ref path) = args.config {
        return path.clone();
    }

    let xdg_config_home = env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);
    let home = dirs::home_dir();

    find_config_file(xdg_config_home.as_deref(), home.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_defaults() {
        let args = Args::try_parse_from(["year-progress"]).unwrap();
        assert!(!args.percentage && !args.json && !args.force_color && !args.no_color);
        assert_eq!(args.length, DEFAULT_BAR_LENGTH);
        assert!(args.config.is_none());
        assert!(args.date.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "year-progress",
            "--json",
            "--config",
            "colors.json",
            "--force-color",
            "-l",
            "12",
            "--date",
            "2024-07-01",
        ])
        .unwrap();

        assert!(args.json);
        assert!(args.force_color);
        assert_eq!(args.config.as_deref(), Some(Path::new("colors.json")));
        assert_eq!(args.length, 12);
        assert!(args.date.is_some());
    }

    #[test]
    fn rejects_conflicting_modes() {
        assert!(Args::try_parse_from(["year-progress", "--json", "--percentage"]).is_err());
        assert!(Args::try_parse_from(["year-progress", "--force-color", "--no-color"]).is_err());
    }

    #[test]
    fn bar_length_is_bounded() {
        let args = Args::try_parse_from(["year-progress", "--length", "1024"]).unwrap();
        assert_eq!(args.length, MAX_BAR_LENGTH);

        for length in ["1025", "9223372036854775807"] {
            let err = Args::try_parse_from(["year-progress", "--length", length]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{length}");
        }
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(Args::try_parse_from(["year-progress", "--date", "soon"]).is_err());
    }

    #[test]
    fn version_flag_short_and_long() {
        for flag in ["-v", "--version"] {
            let err = Args::try_parse_from(["year-progress", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn explicit_config_wins() {
        let args = Args::try_parse_from(["year-progress", "-c", "/tmp/missing.json"]).unwrap();
        assert_eq!(resolve_config_path(&args), PathBuf::from("/tmp/missing.json"));
    }

    #[test]
    fn xdg_config_preferred_over_home() {
        let xdg = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let xdg_file = xdg.path().join(CONFIG_DIR_NAME).join(DEFAULT_CONFIG_FILE);
        touch(&xdg_file);
        touch(&home.path().join(DEFAULT_CONFIG_FILE));

        assert_eq!(find_config_file(Some(xdg.path()), Some(home.path())), xdg_file);
    }

    #[test]
    fn home_used_when_xdg_file_missing() {
        let xdg = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let home_file = home.path().join(DEFAULT_CONFIG_FILE);
        touch(&home_file);

        assert_eq!(find_config_file(Some(xdg.path()), Some(home.path())), home_file);
    }

    #[test]
    fn falls_back_to_current_directory() {
        let empty = tempfile::tempdir().unwrap();

        assert_eq!(
            find_config_file(Some(empty.path()), Some(empty.path())),
            PathBuf::from(DEFAULT_CONFIG_FILE)
        );
        assert_eq!(find_config_file(None, None), PathBuf::from(DEFAULT_CONFIG_FILE));
    }
}
