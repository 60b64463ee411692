//! PlantUML State Graph
//!
//! Parses the state-diagram subset of PlantUML into an in-memory hierarchy of
//! states and transitions.
//!
//! This library provides functionality for:
//! - Classifying diagram lines (composite states, declarations, transitions, content)
//! - Tracking composite-state nesting and aliases for one document
//! - Resolving names, including `[*]` entry/exit and `[H]`/`[H*]` history pseudostates
//! - Exposing the result as an ordered state list or a petgraph view
//!
//! ```text
//! state Active {
//!   [*] --> Idle
//!   Idle --> Busy : request
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod state_machine;

pub use config::{AnalyzerConfig, Config};
pub use error::{Diagnostic, Error, Issue, Result};
pub use state_machine::{Analysis, Analyzer, State, StateKind, Transition, analyze};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
