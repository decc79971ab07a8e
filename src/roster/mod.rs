//! Roster loading and merging

pub mod loader;
pub mod merge;

pub use loader::{load_json, load_roster, load_yaml};
pub use merge::{has_relevant_flag, merge_unique_members};
