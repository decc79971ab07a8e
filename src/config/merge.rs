//! CLI and environment overrides on top of file config

use super::RosterConfig;
use std::path::PathBuf;

/// Path overrides collected from CLI flags (clap also fills these from env vars).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub maintainers: Option<PathBuf>,
    pub ambassadors: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn merge_cli_with_config(mut config: RosterConfig, cli: CliOverrides) -> RosterConfig {
    if let Some(path) = cli.maintainers {
        config.maintainers_path = path;
    }
    if let Some(path) = cli.ambassadors {
        config.ambassadors_path = path;
    }
    if let Some(path) = cli.output {
        config.output_path = path;
    }
    config
}
