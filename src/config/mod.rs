//! Configuration loading and merging
//!
//! Resolves the roster file locations from an optional config file, environment
//! variables and CLI arguments with proper precedence (CLI > Env > File > Defaults).

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

use std::path::PathBuf;

pub const DEFAULT_MAINTAINERS_PATH: &str = "MAINTAINERS.yaml";
pub const DEFAULT_AMBASSADORS_PATH: &str = "AMBASSADORS_MEMBERS.json";
pub const DEFAULT_OUTPUT_PATH: &str = "TSC_BOARD_MEMBERS.yaml";

/// Locations of the two source rosters and the generated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub maintainers_path: PathBuf,
    pub ambassadors_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            maintainers_path: PathBuf::from(DEFAULT_MAINTAINERS_PATH),
            ambassadors_path: PathBuf::from(DEFAULT_AMBASSADORS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
