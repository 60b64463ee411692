//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::config::{NameIdentity, OnUnresolved};
use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// PlantUML state diagram analyzer CLI
#[derive(Parser, Debug)]
#[command(name = "puml-stategraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a state diagram and print the resulting states
    Analyze {
        /// Diagram file, or `-` to read from stdin
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,

        /// Assign identifiers above this value (overrides config)
        #[arg(long)]
        starting_id: Option<u64>,

        /// Plain-name identity rule (overrides config)
        #[arg(long, value_enum)]
        identity: Option<NameIdentity>,

        /// Policy for content lines naming unknown states (overrides config)
        #[arg(long, value_enum)]
        on_unresolved: Option<OnUnresolved>,
    },
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text listing of states and transitions
    Table,
    /// JSON output
    Json,
    /// Graph statistics
    Summary,
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Analyze { .. } => commands::analyze::execute(args, config),
    }
}
