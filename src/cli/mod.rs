//! Command-line configuration for the release-note TUI.

mod args;

pub use args::{CliConfig, parse_args};
