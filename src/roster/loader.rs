//! Roster file loading

use crate::domain::{Member, Roster};
use crate::error::{Result, RosterError};
use std::fs;
use std::path::Path;

/// Read a YAML roster. An empty document is an empty roster.
///
/// Entries that are not mappings carry no flags and are skipped.
pub fn load_yaml(path: &Path) -> Result<Roster> {
    let content = read(path)?;
    if content.trim().is_empty() {
        return Ok(Roster::new());
    }
    let parse_err = |source| RosterError::ParseYaml { path: path.to_path_buf(), source };
    let entries: Vec<serde_yaml::Value> = serde_yaml::from_str(&content).map_err(parse_err)?;
    let total = entries.len();
    let roster = entries
        .into_iter()
        .filter(serde_yaml::Value::is_mapping)
        .map(serde_yaml::from_value::<Member>)
        .collect::<std::result::Result<Roster, _>>()
        .map_err(parse_err)?;
    log_loaded(path, roster.len(), total);
    Ok(roster)
}

/// Read a JSON roster. Entries that are not objects are skipped.
pub fn load_json(path: &Path) -> Result<Roster> {
    let content = read(path)?;
    let parse_err = |source| RosterError::ParseJson { path: path.to_path_buf(), source };
    let entries: Vec<serde_json::Value> = serde_json::from_str(&content).map_err(parse_err)?;
    let total = entries.len();
    let roster = entries
        .into_iter()
        .filter(serde_json::Value::is_object)
        .map(serde_json::from_value::<Member>)
        .collect::<std::result::Result<Roster, _>>()
        .map_err(parse_err)?;
    log_loaded(path, roster.len(), total);
    Ok(roster)
}

fn log_loaded(path: &Path, loaded: usize, total: usize) {
    if loaded < total {
        tracing::warn!("Skipped {} non-mapping entries in {}", total - loaded, path.display());
    }
    tracing::debug!("Loaded {} members from {}", loaded, path.display());
}

/// Load a roster, picking the parser from the file extension.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => load_yaml(path),
        "json" => load_json(path),
        _ => Err(RosterError::UnsupportedFormat { path: path.to_path_buf() }),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RosterError::Read { path: path.to_path_buf(), source })
}
