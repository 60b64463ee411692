//! Per-parse session state

use crate::state_machine::{AliasTable, ScopeStack, StateId, StateRegistry};

/// Everything one parse mutates: aliases, nesting and the states built so far.
///
/// A fresh context is created for every document so nothing leaks between
/// calls.
#[derive(Debug, Clone)]
pub struct ParseContext {
    pub aliases: AliasTable,
    pub scopes: ScopeStack,
    pub registry: StateRegistry,
}

impl ParseContext {
    pub fn new(starting_id: StateId) -> Self {
        Self {
            aliases: AliasTable::new(),
            scopes: ScopeStack::new(),
            registry: StateRegistry::new(starting_id),
        }
    }
}
