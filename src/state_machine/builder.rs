//! Graph builder
//!
//! Drives one pass over the diagram text: every line is classified, names are
//! resolved against the current [`ParseContext`], and states are created on a
//! miss. Content annotations are the exception: they only attach to states
//! that already exist.

use crate::config::{AnalyzerConfig, OnUnresolved};
use crate::error::{Diagnostic, Issue, Result};
use crate::parser::{Line, classify};
use crate::state_machine::resolver::{self, Resolution, Role};
use crate::state_machine::{ParseContext, ScopeId, State, StateId, StateKind, Transition};
use serde::Serialize;

/// Result of analyzing one diagram
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Every state, in creation order
    pub states: Vec<State>,
    /// Problems that were recorded and skipped
    pub diagnostics: Vec<Diagnostic>,
    /// Highest identifier handed out (the starting id when nothing was created)
    pub last_id: StateId,
}

impl Analysis {
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.iter().find(|state| state.id == id)
    }

    /// First state with this display name
    pub fn find(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|state| state.name == name)
    }

    /// States directly owned by `scope`
    pub fn children(&self, scope: ScopeId) -> impl Iterator<Item = &State> + '_ {
        self.states.iter().filter(move |state| state.owner == scope)
    }

    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|state| state.transitions.len()).sum()
    }
}

/// Reusable diagram analyzer.
///
/// Holds only options; each call to [`Analyzer::analyze`] works on its own
/// [`ParseContext`].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let mut session = Session {
            ctx: ParseContext::new(self.config.starting_id),
            config: &self.config,
            diagnostics: Vec::new(),
        };

        let mut line_count = 0;
        for (idx, raw) in text.lines().enumerate() {
            line_count += 1;
            session.handle(idx + 1, classify(raw))?;
        }

        if session.ctx.scopes.depth() > 0 {
            tracing::debug!(
                "Input ended with {} composite state(s) still open",
                session.ctx.scopes.depth()
            );
        }

        let last_id = session.ctx.registry.last_id();
        let analysis = Analysis {
            states: session.ctx.registry.into_states(),
            diagnostics: session.diagnostics,
            last_id,
        };

        tracing::info!(
            "Analyzed {} lines: {} states, {} transitions, {} diagnostics",
            line_count,
            analysis.states.len(),
            analysis.transition_count(),
            analysis.diagnostics.len()
        );

        Ok(analysis)
    }
}

struct Session<'a> {
    ctx: ParseContext,
    config: &'a AnalyzerConfig,
    diagnostics: Vec<Diagnostic>,
}

impl Session<'_> {
    fn handle(&mut self, line_no: usize, line: Line<'_>) -> Result<()> {
        if line != Line::Ignored {
            tracing::debug!("Line {}: {} {:?}", line_no, line.label(), line);
        }

        match line {
            Line::CompositeOpen { name, alias } => {
                if let Some(alias) = alias {
                    // The composite is still opened so braces stay balanced
                    self.register_alias(line_no, name, alias);
                }
                let id = self.resolve_or_create(line_no, name, Role::Declaration, None)?;
                self.ctx.scopes.push(id);
            }
            Line::ScopeClose => {
                if self.ctx.scopes.pop().is_none() {
                    tracing::debug!("Line {}: close marker at root ignored", line_no);
                }
            }
            Line::AliasedDeclaration {
                name,
                alias,
                stereotype,
            } => {
                if self.register_alias(line_no, name, alias) {
                    let kind = stereotype.map(StateKind::from_stereotype);
                    self.resolve_or_create(line_no, name, Role::Declaration, kind)?;
                }
            }
            Line::StereotypedDeclaration { name, stereotype } => {
                let kind = StateKind::from_stereotype(stereotype);
                self.resolve_or_create(line_no, name, Role::Declaration, Some(kind))?;
            }
            Line::SimpleDeclaration { name, content } => {
                let id = self.resolve_or_create(line_no, name, Role::Declaration, None)?;
                if let Some(text) = content {
                    self.append_content(id, text);
                }
            }
            Line::Transition {
                source,
                target,
                event,
            } => {
                let source = self.resolve_or_create(line_no, source, Role::Source, None)?;
                let target = self.resolve_or_create(line_no, target, Role::Target, None)?;
                let mut transition = Transition::new(source, target);
                if let Some(event) = event {
                    transition = transition.with_event(event);
                }
                self.ctx.registry.add_transition(transition);
            }
            Line::Content { name, text } => match self.resolve_existing(name) {
                Some(id) => self.append_content(id, text),
                None => {
                    let issue = Issue::UnresolvedReference {
                        name: name.to_string(),
                    };
                    let fatal = self.config.on_unresolved == OnUnresolved::Abort;
                    self.report(line_no, issue, fatal)?;
                }
            },
            Line::Ignored => {}
        }

        Ok(())
    }

    /// Create-if-missing policy: used by declarations and transition endpoints.
    ///
    /// `kind` overrides the kind the resolver proposes for a new state. An
    /// existing state keeps the kind it was created with.
    fn resolve_or_create(
        &mut self,
        line_no: usize,
        raw: &str,
        role: Role,
        kind: Option<StateKind>,
    ) -> Result<StateId> {
        match resolver::resolve(&self.ctx, self.config.identity, raw, role) {
            Resolution::Found(id) => {
                if let Some(kind) = kind
                    && let Some(state) = self.ctx.registry.get(id)
                    && state.kind != kind
                {
                    tracing::debug!(
                        "State {:?} already exists as {}, keeping it over {}",
                        state.name,
                        state.kind,
                        kind
                    );
                }
                Ok(id)
            }
            Resolution::Missing(placement) => {
                let kind = kind.unwrap_or(placement.kind);
                let id = self
                    .ctx
                    .registry
                    .create(&placement.name, kind.clone(), placement.owner)
                    .map_err(|issue| Diagnostic {
                        line: line_no,
                        issue,
                    })?;
                tracing::debug!(
                    "Created state {} {:?} ({}) in {}",
                    id,
                    placement.name,
                    kind,
                    placement.owner
                );
                Ok(id)
            }
        }
    }

    /// Resolve-or-report policy: used by content annotations.
    fn resolve_existing(&self, raw: &str) -> Option<StateId> {
        resolver::resolve(&self.ctx, self.config.identity, raw, Role::Declaration).found()
    }

    fn append_content(&mut self, id: StateId, text: &str) {
        let separator = self.config.content_separator.as_str();
        if let Some(state) = self.ctx.registry.get_mut(id) {
            state.append_content(text, separator);
        }
    }

    /// Returns false when the alias conflicts with an earlier binding
    fn register_alias(&mut self, line_no: usize, name: &str, alias: &str) -> bool {
        match self.ctx.aliases.register(name, alias) {
            Ok(()) => true,
            Err(issue) => {
                // Alias conflicts are never fatal
                let _ = self.report(line_no, issue, false);
                false
            }
        }
    }

    fn report(&mut self, line: usize, issue: Issue, fatal: bool) -> Result<()> {
        let diagnostic = Diagnostic { line, issue };
        if fatal {
            return Err(diagnostic.into());
        }
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
        Ok(())
    }
}
