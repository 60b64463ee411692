//! State registry
//!
//! Arena of every state created during one parse, kept in creation order and
//! indexed by identifier.

use crate::error::Issue;
use crate::parser::INITIAL_TOKEN;
use crate::state_machine::{ScopeId, State, StateId, StateKind, Transition};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct StateRegistry {
    states: Vec<State>,
    index: HashMap<StateId, usize>,
    last_id: StateId,
}

impl StateRegistry {
    /// New identifiers start at `starting_id + 1`
    pub fn new(starting_id: StateId) -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
            last_id: starting_id,
        }
    }

    /// Create a state and return its identifier
    pub fn create(
        &mut self,
        name: &str,
        kind: StateKind,
        owner: ScopeId,
    ) -> Result<StateId, Issue> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or(Issue::IdentifierOverflow {
                last_id: self.last_id,
            })?;
        self.last_id = id;
        self.index.insert(id, self.states.len());
        self.states.push(State::new(id, name, kind, owner));
        Ok(id)
    }

    pub fn get(&self, id: StateId) -> Option<&State> {
        self.index.get(&id).map(|&idx| &self.states[idx])
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.index.get(&id).map(|&idx| &mut self.states[idx])
    }

    /// First state with this display name, in any scope
    pub fn find_by_name(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|state| state.name == name)
    }

    /// First state with this display name owned by `scope`
    pub fn find_in_scope(&self, name: &str, scope: ScopeId) -> Option<&State> {
        self.states
            .iter()
            .find(|state| state.name == name && state.is_owned_by(scope))
    }

    /// History pseudostate with this marker owned by `scope`
    pub fn find_history(&self, marker: &str, scope: ScopeId) -> Option<&State> {
        self.states.iter().find(|state| {
            state.kind == StateKind::History && state.name == marker && state.is_owned_by(scope)
        })
    }

    /// `[*]` pseudostates owned by `scope`, in creation order
    pub fn initials_in(&self, scope: ScopeId) -> impl Iterator<Item = &State> + '_ {
        self.states.iter().filter(move |state| {
            state.kind == StateKind::Initial
                && state.name == INITIAL_TOKEN
                && state.is_owned_by(scope)
        })
    }

    /// Append a transition to its source state's outgoing list
    pub fn add_transition(&mut self, transition: Transition) -> bool {
        match self.get_mut(transition.source) {
            Some(source) => {
                source.transitions.push(transition);
                true
            }
            None => false,
        }
    }

    pub fn last_id(&self) -> StateId {
        self.last_id
    }

    pub fn into_states(self) -> Vec<State> {
        self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_starting_id() {
        let mut registry = StateRegistry::new(41);
        let a = registry.create("A", StateKind::Plain, ScopeId::Root).unwrap();
        let b = registry.create("B", StateKind::Plain, ScopeId::State(a)).unwrap();

        assert_eq!((a, b), (42, 43));
        assert_eq!(registry.last_id(), 43);
        assert_eq!(registry.get(b).unwrap().owner, ScopeId::State(42));
        assert!(registry.get(41).is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        let mut registry = StateRegistry::new(0);
        let outer = registry.create("X", StateKind::Plain, ScopeId::Root).unwrap();
        let inner = registry.create("X", StateKind::Plain, ScopeId::State(outer)).unwrap();

        assert_eq!(registry.find_by_name("X").unwrap().id, outer);
        assert_eq!(
            registry.find_in_scope("X", ScopeId::State(outer)).unwrap().id,
            inner
        );
        assert!(registry.find_by_name("Y").is_none());
    }

    #[test]
    fn test_initials_in_scope() {
        let mut registry = StateRegistry::new(0);
        let entry = registry.create(INITIAL_TOKEN, StateKind::Initial, ScopeId::Root).unwrap();
        let s = registry.create("S", StateKind::Plain, ScopeId::Root).unwrap();
        registry
            .create(INITIAL_TOKEN, StateKind::Initial, ScopeId::State(s))
            .unwrap();
        let exit = registry
            .create(INITIAL_TOKEN, StateKind::Initial, ScopeId::Root)
            .unwrap();

        let ids: Vec<_> = registry
            .initials_in(ScopeId::Root)
            .map(|state| state.id)
            .collect();
        assert_eq!(ids, vec![entry, exit]);
    }

    #[test]
    fn test_add_transition_to_source() {
        let mut registry = StateRegistry::new(0);
        let a = registry.create("A", StateKind::Plain, ScopeId::Root).unwrap();
        let b = registry.create("B", StateKind::Plain, ScopeId::Root).unwrap();

        assert!(registry.add_transition(Transition::new(a, b).with_event("go")));
        assert!(!registry.add_transition(Transition::new(99, b)));

        let source = registry.get(a).unwrap();
        assert_eq!(source.transitions.len(), 1);
        assert_eq!(source.transitions[0].event.as_deref(), Some("go"));
        assert!(registry.get(b).unwrap().transitions.is_empty());
    }

    #[test]
    fn test_identifier_overflow_is_reported() {
        let mut registry = StateRegistry::new(u64::MAX - 1);
        let last = registry.create("A", StateKind::Plain, ScopeId::Root).unwrap();
        assert_eq!(last, u64::MAX);

        let err = registry
            .create("B", StateKind::Plain, ScopeId::Root)
            .unwrap_err();
        assert_eq!(err, Issue::IdentifierOverflow { last_id: u64::MAX });
        assert_eq!(registry.last_id(), u64::MAX);
        assert_eq!(registry.into_states().len(), 1);
    }
}
