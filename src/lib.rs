//! tsc-roster: build the TSC/Board members list from community rosters
//!
//! Reads the maintainers roster (YAML) and the ambassadors roster (JSON), keeps
//! everyone holding a governance flag, merges them by GitHub handle and writes
//! the result as YAML.

pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod roster;

pub use config::RosterConfig;
pub use domain::{Flag, Member, Roster};
pub use error::{Result, RosterError};
pub use pipeline::{generate_tsc_board_members_list, preview_tsc_board_members_list};
pub use roster::{has_relevant_flag, load_json, load_yaml, merge_unique_members};
