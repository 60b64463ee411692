//! End-to-end behaviour of the analyzer on small diagrams.

use puml_stategraph::state_machine::{ScopeId, StateGraph};
use puml_stategraph::{Analyzer, Issue, State, StateKind, analyze};
use rstest::rstest;

fn by_name<'a>(states: &'a [State], name: &str) -> &'a State {
    states
        .iter()
        .find(|state| state.name == name)
        .unwrap_or_else(|| panic!("no state named {name}"))
}

#[test]
fn composite_nesting_and_outer_transition() {
    let states = analyze(0, "state A {\n  state X {\n  }\n}\nX --> A\n").unwrap();

    assert_eq!(states.len(), 2);
    let a = by_name(&states, "A");
    let x = by_name(&states, "X");
    assert_eq!(a.owner, ScopeId::Root);
    assert_eq!(x.owner, ScopeId::State(a.id));

    assert_eq!(x.transitions.len(), 1);
    assert_eq!(x.transitions[0].source, x.id);
    assert_eq!(x.transitions[0].target, a.id);
    assert_eq!(x.transitions[0].event, None);
    assert!(a.transitions.is_empty());
}

#[test]
fn entry_and_exit_pseudostates_are_distinct() {
    let states = analyze(0, "[*] --> S1\nS1 --> [*]\n").unwrap();

    assert_eq!(states.len(), 3);
    let (entry, s1, exit) = (&states[0], &states[1], &states[2]);
    assert_eq!(entry.kind, StateKind::Initial);
    assert_eq!(s1.name, "S1");
    assert_eq!(s1.kind, StateKind::Plain);
    assert_eq!(exit.kind, StateKind::Initial);
    assert_ne!(entry.id, exit.id);
    for state in &states {
        assert_eq!(state.owner, ScopeId::Root);
    }

    assert_eq!(entry.transitions.len(), 1);
    assert_eq!(entry.transitions[0].target, s1.id);
    assert_eq!(s1.transitions.len(), 1);
    assert_eq!(s1.transitions[0].target, exit.id);
}

#[test]
fn fork_fans_out_to_new_plain_states() {
    let states = analyze(0, "state fork1 <<fork>>\nfork1 --> A\nfork1 --> B\n").unwrap();

    let fork = by_name(&states, "fork1");
    assert_eq!(fork.kind, StateKind::Fork);
    let targets: Vec<_> = fork.transitions.iter().map(|t| t.target).collect();
    let a = by_name(&states, "A");
    let b = by_name(&states, "B");
    assert_eq!(targets, vec![a.id, b.id]);
    assert_eq!(a.kind, StateKind::Plain);
    assert_eq!(b.kind, StateKind::Plain);
}

#[test]
fn nested_initial_and_labelled_self_transition() {
    let states = analyze(0, "state S3 {\n  [*] --> L1\n}\nS3 --> S3 : Failed\n").unwrap();

    let s3 = by_name(&states, "S3");
    let l1 = by_name(&states, "L1");
    assert_eq!(l1.owner, ScopeId::State(s3.id));

    assert_eq!(s3.transitions.len(), 1);
    assert_eq!(s3.transitions[0].target, s3.id);
    assert_eq!(s3.transitions[0].event.as_deref(), Some("Failed"));
}

#[test]
fn alias_is_referentially_transparent() {
    let text = "\
state \"Long Name\" as L
state L {
  [*] --> Inner
}
L --> Other : go
Other --> L : back
Other --> L[H]
L : described
";
    let states = analyze(0, text).unwrap();

    assert!(states.iter().all(|state| state.name != "L"));
    let long = by_name(&states, "Long Name");
    assert_eq!(by_name(&states, "Inner").owner, ScopeId::State(long.id));
    assert_eq!(long.transitions.len(), 1);
    assert_eq!(long.transitions[0].event.as_deref(), Some("go"));
    assert_eq!(long.content, "described");

    let other = by_name(&states, "Other");
    let history = by_name(&states, "[H]");
    assert_eq!(history.kind, StateKind::History);
    assert_eq!(history.owner, ScopeId::State(long.id));
    let targets: Vec<_> = other.transitions.iter().map(|t| t.target).collect();
    assert_eq!(targets, vec![long.id, history.id]);
    assert_eq!(other.transitions[0].event.as_deref(), Some("back"));
}

#[test]
fn history_belongs_to_named_owner() {
    let text = "\
state Paused {
}
state Running {
  Work --> Paused[H]
  Work --> Paused[H*]
}
Resume --> Paused[H]
";
    let states = analyze(0, text).unwrap();

    let paused = by_name(&states, "Paused");
    let histories: Vec<_> = states
        .iter()
        .filter(|state| state.kind == StateKind::History)
        .collect();
    assert_eq!(histories.len(), 2);
    for history in &histories {
        assert_eq!(history.owner, ScopeId::State(paused.id));
    }

    let shallow = histories.iter().find(|h| h.name == "[H]").unwrap();
    let resume = by_name(&states, "Resume");
    assert_eq!(resume.transitions[0].target, shallow.id);
}

#[test]
fn bare_history_uses_current_scope() {
    let states = analyze(0, "state Outer {\n  A --> [H]\n}\n").unwrap();
    let outer = by_name(&states, "Outer");
    let history = by_name(&states, "[H]");
    assert_eq!(history.kind, StateKind::History);
    assert_eq!(history.owner, ScopeId::State(outer.id));
}

#[rstest]
#[case("A --> B\nA --> B\n", 2)]
#[case("state A\nA --> A\nstate A\n", 1)]
#[case("[*] --> A\n[*] --> B\nA --> [*]\nB --> [*]\n", 4)]
#[case("state fork1 <<fork>>\nstate fork1 <<fork>>\n", 1)]
fn re_resolving_names_does_not_duplicate(#[case] text: &str, #[case] expected: usize) {
    let states = analyze(0, text).unwrap();
    assert_eq!(states.len(), expected);
}

#[test]
fn starting_id_continues_across_documents() {
    let first = analyze(0, "A --> B").unwrap();
    let last = first.iter().map(|state| state.id).max().unwrap();

    let second = analyze(last, "C --> D").unwrap();
    assert!(second.iter().all(|state| state.id > last));
    assert_eq!(second[0].id, last + 1);
}

#[test]
fn starting_id_at_the_top_of_the_range_is_an_error() {
    let err = analyze(u64::MAX, "A --> B").unwrap_err();
    assert!(matches!(
        err.issue(),
        Some(Issue::IdentifierOverflow { last_id: u64::MAX })
    ));

    let states = analyze(u64::MAX - 1, "state Last").unwrap();
    assert_eq!(states[0].id, u64::MAX);
}

#[test]
fn full_diagram_round_trip() {
    let text = "\
@startuml
' Camera controller
state \"Not Shooting\" as NS {
  [*] --> Idle
  Idle --> Configuring : EvConfig
  Configuring --> Idle : EvConfig
  state choice1 <<choice>>
  Idle --> choice1
  choice1 --> Configuring
  choice1 --> [*]
}
state Shooting <<Custom>>
NS --> Shooting : EvShutter
Shooting -down-> NS
Idle : entry / reset()
@enduml
";
    let analysis = Analyzer::default().analyze(text).unwrap();
    let states = &analysis.states;
    assert!(analysis.diagnostics.is_empty());

    let ns = by_name(states, "Not Shooting");
    let inner: Vec<_> = analysis.children(ScopeId::State(ns.id)).collect();
    let inner_names: Vec<_> = inner.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        inner_names,
        vec!["[*]", "Idle", "Configuring", "choice1", "[*]"]
    );
    assert_eq!(by_name(states, "choice1").kind, StateKind::Choice);
    assert_eq!(
        by_name(states, "Shooting").kind,
        StateKind::Custom("Custom".to_string())
    );
    assert_eq!(by_name(states, "Idle").content, "entry / reset()");

    let graph = StateGraph::from_states(states);
    let stats = graph.stats();
    assert_eq!(stats.total_states, 7);
    assert_eq!(stats.total_transitions, 8);
    assert_eq!(stats.initial_states, 2);
    assert_eq!(stats.max_depth, 1);
    assert!(stats.has_cycles);
}
