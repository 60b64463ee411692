//! State machine module - Resolve diagram lines into a hierarchical graph of states

use crate::Result;
use crate::config::AnalyzerConfig;

pub mod alias;
pub mod builder;
pub mod context;
pub mod graph;
pub mod registry;
pub mod resolver;
pub mod scope;
pub mod state;
pub mod transition;

// Re-export key types
pub use alias::AliasTable;
pub use builder::{Analysis, Analyzer};
pub use context::ParseContext;
pub use graph::{GraphStats, StateGraph};
pub use registry::StateRegistry;
pub use resolver::{Placement, Resolution, Role};
pub use scope::ScopeStack;
pub use state::{ScopeId, State, StateId, StateKind};
pub use transition::Transition;

/// Analyze a diagram with default options.
///
/// New identifiers are assigned strictly above `starting_id`, so callers can
/// continue one identifier space across several documents.
pub fn analyze(starting_id: StateId, text: &str) -> Result<Vec<State>> {
    let analyzer = Analyzer::new(AnalyzerConfig::default().with_starting_id(starting_id));
    Ok(analyzer.analyze(text)?.states)
}
