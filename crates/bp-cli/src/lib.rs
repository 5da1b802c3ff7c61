//! Busiest break period CLI library.
//!
//! This crate provides the command-line surface, configuration, and the
//! input loops that feed records into `bp-core`.

mod cli;
pub mod commands;
mod config;
pub mod session;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use session::{LineOutcome, OutputFormat, Session};
