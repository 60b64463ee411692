use crate::state_machine::{ScopeId, State, StateId, StateKind, Transition};
use petgraph::Direction;
use petgraph::prelude::EdgeRef;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use std::collections::HashMap;

/// A read-only directed graph over analyzed states, for consumers that need
/// graph traversal (validators, code generators).
///
/// Nodes borrow the states and edges borrow the transitions they own, so the
/// view never diverges from the analysis it was built from.
pub struct StateGraph<'a> {
    /// The underlying graph structure.
    pub graph: StableGraph<&'a State, &'a Transition>,

    /// Lookup from state identifier to graph node.
    pub state_index: HashMap<StateId, NodeIndex>,
}

impl<'a> StateGraph<'a> {
    pub fn from_states(states: &'a [State]) -> Self {
        let mut graph = StableGraph::new();
        let mut state_index = HashMap::new();

        for state in states {
            let node_index = graph.add_node(state);
            state_index.insert(state.id, node_index);
        }

        for state in states {
            for transition in &state.transitions {
                if let (Some(&from_idx), Some(&to_idx)) = (
                    state_index.get(&transition.source),
                    state_index.get(&transition.target),
                ) {
                    graph.add_edge(from_idx, to_idx, transition);
                } else {
                    tracing::warn!(
                        "Transition {} -> {} references an unknown state",
                        transition.source,
                        transition.target
                    );
                }
            }
        }

        Self { graph, state_index }
    }

    /// Get a state by its ID
    pub fn get_state(&self, state_id: StateId) -> Option<&'a State> {
        self.state_index
            .get(&state_id)
            .and_then(|&idx| self.graph.node_weight(idx).copied())
    }

    /// Get outgoing transitions from a state
    pub fn outgoing_transitions(&self, state_id: StateId) -> Vec<&'a Transition> {
        self.transitions(state_id, Direction::Outgoing)
    }

    /// Get incoming transitions to a state
    pub fn incoming_transitions(&self, state_id: StateId) -> Vec<&'a Transition> {
        self.transitions(state_id, Direction::Incoming)
    }

    fn transitions(&self, state_id: StateId, direction: Direction) -> Vec<&'a Transition> {
        if let Some(&node_idx) = self.state_index.get(&state_id) {
            self.graph
                .edges_directed(node_idx, direction)
                .map(|edge| *edge.weight())
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Find all states with no incoming transitions
    pub fn find_source_states(&self) -> Vec<&'a State> {
        self.states_without(Direction::Incoming)
    }

    /// Find all states with no outgoing transitions
    pub fn find_sink_states(&self) -> Vec<&'a State> {
        self.states_without(Direction::Outgoing)
    }

    fn states_without(&self, direction: Direction) -> Vec<&'a State> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.edges_directed(idx, direction).next().is_none())
            .filter_map(|idx| self.graph.node_weight(idx).copied())
            .collect()
    }

    /// States directly owned by `scope`, in creation order
    pub fn children(&self, scope: ScopeId) -> Vec<&'a State> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx).copied())
            .filter(|state| state.owner == scope)
            .collect()
    }

    /// Number of composite states enclosing a state (0 at root)
    pub fn depth(&self, state_id: StateId) -> Option<usize> {
        let mut state = self.get_state(state_id)?;
        let mut depth = 0;
        while let ScopeId::State(owner) = state.owner {
            depth += 1;
            // Owners are created before their members; a longer chain is a cycle
            if depth > self.state_index.len() {
                return None;
            }
            state = self.get_state(owner)?;
        }
        Some(depth)
    }

    pub fn has_cycles(&self) -> bool {
        petgraph::algo::is_cyclic_directed(&self.graph)
    }

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        let states: Vec<&State> = self
            .graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx).copied())
            .collect();

        let composite_states = states
            .iter()
            .filter(|state| !self.children(ScopeId::State(state.id)).is_empty())
            .count();
        let pseudostates = states
            .iter()
            .filter(|state| state.kind.is_pseudostate())
            .count();
        let initial_states = states
            .iter()
            .filter(|state| state.kind == StateKind::Initial)
            .count();
        let max_depth = states
            .iter()
            .filter_map(|state| self.depth(state.id))
            .max()
            .unwrap_or(0);

        GraphStats {
            total_states: self.graph.node_count(),
            total_transitions: self.graph.edge_count(),
            composite_states,
            pseudostates,
            initial_states,
            max_depth,
            has_cycles: self.has_cycles(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GraphStats {
    pub total_states: usize,
    pub total_transitions: usize,
    pub composite_states: usize,
    pub pseudostates: usize,
    pub initial_states: usize,
    pub max_depth: usize,
    pub has_cycles: bool,
}
