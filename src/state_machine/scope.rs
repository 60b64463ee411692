//! Composite-state nesting

use crate::state_machine::{ScopeId, StateId};

/// Stack of enclosing composite states.
///
/// The bottom frame is always [`ScopeId::Root`] and is never popped, so the
/// stack is never empty and surplus close markers have no effect.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<ScopeId>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            frames: vec![ScopeId::Root],
        }
    }

    pub fn push(&mut self, id: StateId) {
        self.frames.push(ScopeId::State(id));
    }

    /// Leave the innermost composite. Returns `None` at root.
    pub fn pop(&mut self) -> Option<StateId> {
        if self.frames.len() > 1 {
            self.frames.pop().and_then(|scope| scope.state_id())
        } else {
            None
        }
    }

    pub fn top(&self) -> ScopeId {
        self.frames.last().copied().unwrap_or_default()
    }

    /// Number of open composites
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Scopes from innermost to root
    pub fn outward(&self) -> impl Iterator<Item = ScopeId> + '_ {
        self.frames.iter().rev().copied()
    }
}
