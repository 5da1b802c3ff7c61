use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bp_cli::commands::{interactive, preload};
use bp_cli::session::INSTRUCTIONS;
use bp_cli::{Cli, Commands, Config, OutputFormat, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr; stdout carries the reports.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut session = Session::new(io::stdout().lock(), format);

    if config.show_instructions {
        session.say(INSTRUCTIONS)?;
    }

    // A failed preload ends the run before any interactive input is read.
    if let Some(Commands::Filename { file }) = &cli.command {
        preload::run(&mut session, file)?;
    }

    interactive::run(&mut session, io::stdin().lock(), &config)?;

    Ok(())
}
