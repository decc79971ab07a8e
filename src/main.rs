//! tsc-roster: Generate the TSC/Board members list
//!
//! Merges the maintainers and ambassadors rosters into a single YAML file
//! listing everyone who holds a TSC or Board role.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
