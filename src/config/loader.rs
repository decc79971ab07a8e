//! Config file loading

use super::RosterConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Path entries a config file may set. Anything left out keeps its default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    maintainers: Option<PathBuf>,
    ambassadors: Option<PathBuf>,
    output: Option<PathBuf>,
}

/// Load a config file, or return defaults when no path is given.
///
/// Relative paths inside the file are resolved against the file's own directory.
pub fn load_config(config_path: Option<&Path>) -> Result<RosterConfig> {
    let Some(config_file) = config_path else {
        return Ok(RosterConfig::default());
    };

    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file)?,
        "yaml" | "yml" => parse_yaml_config(&content, config_file)?,
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };

    let base = config_file.parent().unwrap_or_else(|| Path::new(""));
    let defaults = RosterConfig::default();
    let resolve = |value: Option<PathBuf>, default: PathBuf| match value {
        Some(p) if p.is_relative() => base.join(p),
        Some(p) => p,
        None => default,
    };

    tracing::debug!("Loaded config from {}", config_file.display());
    Ok(RosterConfig {
        maintainers_path: resolve(parsed.maintainers, defaults.maintainers_path),
        ambassadors_path: resolve(parsed.ambassadors, defaults.ambassadors_path),
        output_path: resolve(parsed.output, defaults.output_path),
    })
}

/// Parse TOML config, supporting a nested [tsc-roster] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<ConfigFile> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get("tsc-roster") {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn parse_yaml_config(content: &str, config_file: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}
