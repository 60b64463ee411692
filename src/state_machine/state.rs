//! State representation

use crate::state_machine::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type StateId = u64;

/// The owning scope of a state: the root of the diagram or a composite state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScopeId {
    #[default]
    Root,
    State(StateId),
}

impl ScopeId {
    pub fn state_id(&self) -> Option<StateId> {
        match self {
            ScopeId::Root => None,
            ScopeId::State(id) => Some(*id),
        }
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeId::Root => write!(f, "root"),
            ScopeId::State(id) => write!(f, "{}", id),
        }
    }
}

/// State kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    #[default]
    Plain,
    Initial,
    History,
    Fork,
    Join,
    Choice,
    Start,
    End,
    Custom(String),
}

impl StateKind {
    /// Derive a kind from the text between `<<` and `>>`
    pub fn from_stereotype(text: &str) -> Self {
        let text = text.trim();
        match text.to_ascii_lowercase().as_str() {
            "fork" => StateKind::Fork,
            "join" => StateKind::Join,
            "choice" => StateKind::Choice,
            "start" => StateKind::Start,
            "end" => StateKind::End,
            _ => StateKind::Custom(text.to_string()),
        }
    }

    /// True for control-flow nodes rather than durable states
    pub fn is_pseudostate(&self) -> bool {
        !matches!(self, StateKind::Plain | StateKind::Custom(_))
    }

    pub fn name(&self) -> &str {
        match self {
            StateKind::Plain => "Plain",
            StateKind::Initial => "Initial",
            StateKind::History => "History",
            StateKind::Fork => "Fork",
            StateKind::Join => "Join",
            StateKind::Choice => "Choice",
            StateKind::Start => "Start",
            StateKind::End => "End",
            StateKind::Custom(label) => label,
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Custom(label) => write!(f, "<<{}>>", label),
            other => f.write_str(other.name()),
        }
    }
}

/// A state in the diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub kind: StateKind,
    pub owner: ScopeId,
    pub content: String,
    pub transitions: Vec<Transition>,
}

impl State {
    pub fn new(id: StateId, name: impl Into<String>, kind: StateKind, owner: ScopeId) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            owner,
            content: String::new(),
            transitions: Vec::new(),
        }
    }

    /// Append a content annotation, separated from earlier ones
    pub fn append_content(&mut self, text: &str, separator: &str) {
        if !self.content.is_empty() {
            self.content.push_str(separator);
        }
        self.content.push_str(text);
    }

    pub fn is_owned_by(&self, scope: ScopeId) -> bool {
        self.owner == scope
    }

    /// Get a short display string
    pub fn display_short(&self) -> String {
        match self.kind {
            StateKind::Plain => format!("{} ({})", self.name, self.id),
            ref kind => format!("{} [{}] ({})", self.name, kind, self.id),
        }
    }
}
