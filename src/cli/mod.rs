//! Command-line interface for tsc-roster

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tsc_roster::config::{load_config, merge_cli_with_config, CliOverrides};
use tsc_roster::pipeline::{generate_tsc_board_members_list, preview_tsc_board_members_list};

/// Merge maintainer and ambassador rosters into the TSC/Board members list
#[derive(Parser)]
#[command(name = "tsc-roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Maintainers roster (YAML)
    #[arg(long, value_name = "PATH", env = "TSC_ROSTER_MAINTAINERS")]
    maintainers: Option<PathBuf>,

    /// Ambassadors roster (JSON)
    #[arg(long, value_name = "PATH", env = "TSC_ROSTER_AMBASSADORS")]
    ambassadors: Option<PathBuf>,

    /// Where to write the generated list (YAML)
    #[arg(short, long, value_name = "PATH", env = "TSC_ROSTER_OUTPUT")]
    output: Option<PathBuf>,

    /// Config file (TOML or YAML) providing default paths
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the generated YAML to stdout instead of writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, replaces the default level entirely.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .try_init();

    let file_config = load_config(cli.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides { maintainers: cli.maintainers, ambassadors: cli.ambassadors, output: cli.output },
    );

    // The pipeline has already logged failures with their prefix.
    if cli.dry_run {
        let yaml = preview_tsc_board_members_list(&config)?;
        print!("{yaml}");
        return Ok(());
    }

    generate_tsc_board_members_list(&config)?;
    Ok(())
}
