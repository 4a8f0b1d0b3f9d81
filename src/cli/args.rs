//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::logging::{default_log_dir, normalize_level};
use crate::prefs::default_prefs_path;

/// Assemble a mobile release note and copy it to the clipboard
#[derive(Debug, Parser)]
#[command(name = "release-note")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Preferences file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// Directory for log files (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "info", value_parser = parse_level)]
    pub log_level: String,

    /// Seconds the "copied" toast stays visible (0 keeps it until closed)
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub toast_secs: u64,
}

fn parse_level(value: &str) -> Result<String, String> {
    normalize_level(value).map(str::to_string)
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub prefs_path: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub toast_duration: Duration,
}

impl CliArgs {
    /// Fill in platform defaults. Without a config directory the
    /// preferences file falls back to the working directory.
    pub fn resolve(self) -> CliConfig {
        let prefs_path = self
            .prefs
            .or_else(default_prefs_path)
            .unwrap_or_else(|| PathBuf::from("release-note-preferences.json"));
        CliConfig {
            prefs_path,
            log_dir: self.log_dir.or_else(default_log_dir),
            log_level: self.log_level,
            toast_duration: Duration::from_secs(self.toast_secs),
        }
    }
}

/// Parse process arguments; exits on `--help`, `--version` or bad input
pub fn parse_args() -> CliConfig {
    CliArgs::parse().resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["release-note"]).unwrap();
        assert_eq!(args.log_level, "info");
        assert_eq!(args.toast_secs, 3);
        assert!(args.prefs.is_none());
    }

    #[test]
    fn test_explicit_paths_win() {
        let args = CliArgs::try_parse_from([
            "release-note",
            "--prefs",
            "/tmp/prefs.json",
            "--log-dir",
            "/tmp/logs",
            "--toast-secs",
            "0",
        ])
        .unwrap();
        let config = args.resolve();
        assert_eq!(config.prefs_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(config.toast_duration.is_zero());
    }

    #[test]
    fn test_log_level_is_normalized() {
        let args = CliArgs::try_parse_from(["release-note", "--log-level", "WARNING"]).unwrap();
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(CliArgs::try_parse_from(["release-note", "--log-level", "loud"]).is_err());
    }
}
