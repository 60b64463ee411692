//! Transition representation

use crate::state_machine::StateId;
use serde::{Deserialize, Serialize};

/// A transition between states, owned by its source state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub source: StateId,
    pub target: StateId,
    pub event: Option<String>,
}

impl Transition {
    pub fn new(source: StateId, target: StateId) -> Self {
        Self {
            source,
            target,
            event: None,
        }
    }

    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn is_self_transition(&self) -> bool {
        self.source == self.target
    }

    /// Get display label for the transition
    pub fn display_label(&self) -> &str {
        self.event.as_deref().unwrap_or("")
    }
}
