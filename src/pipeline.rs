//! End-to-end generation of the TSC/Board members list.
//!
//! Load maintainers → load ambassadors → merge → render → write. Any failure
//! aborts the remaining steps, so a failed run never touches the output file.

use crate::config::RosterConfig;
use crate::domain::Roster;
use crate::error::Result;
use crate::render::{render_roster_yaml, write_roster};
use crate::roster::{load_roster, merge_unique_members};

/// Prefix of the error line logged when generation fails.
pub const FAILURE_PREFIX: &str = "Failed to generate TSC members list:";

/// Load both source rosters and merge them.
///
/// The parser for each roster follows its file extension.
pub fn build_merged_roster(config: &RosterConfig) -> Result<Roster> {
    let maintainers = load_roster(&config.maintainers_path)?;
    let ambassadors = load_roster(&config.ambassadors_path)?;
    Ok(merge_unique_members(&maintainers, &ambassadors))
}

/// Generate the list and write it to `config.output_path`.
///
/// Returns the number of members written. Failures are logged with
/// [`FAILURE_PREFIX`] and handed back to the caller.
pub fn generate_tsc_board_members_list(config: &RosterConfig) -> Result<usize> {
    report(config, || {
        let members = build_merged_roster(config)?;
        let yaml = render_roster_yaml(&members)?;
        write_roster(&config.output_path, &yaml)?;
        Ok(members.len())
    })
}

/// Same as [`generate_tsc_board_members_list`] but returns the YAML instead of writing it.
pub fn preview_tsc_board_members_list(config: &RosterConfig) -> Result<String> {
    let mut rendered = String::new();
    report(config, || {
        let members = build_merged_roster(config)?;
        rendered = render_roster_yaml(&members)?;
        Ok(members.len())
    })?;
    Ok(rendered)
}

fn report(config: &RosterConfig, run: impl FnOnce() -> Result<usize>) -> Result<usize> {
    tracing::debug!(
        "Generating from {} and {} into {}",
        config.maintainers_path.display(),
        config.ambassadors_path.display(),
        config.output_path.display()
    );
    match run() {
        Ok(count) => {
            tracing::info!("Generated {} filtered TSC/Board members", count);
            Ok(count)
        }
        Err(err) => {
            tracing::error!("{} {}", FAILURE_PREFIX, err);
            Err(err)
        }
    }
}
