//! Output rendering (YAML)

pub mod yaml;

pub use yaml::{render_roster_yaml, write_roster};
