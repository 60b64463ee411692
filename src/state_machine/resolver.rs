//! Name resolver
//!
//! Turns a raw name token into an existing state, or into a [`Placement`]
//! describing the state to create when nothing matches. Resolution runs in
//! this order:
//!
//! 1. Alias substitution.
//! 2. History markers (`Owner[H]`, `[H*]`) are looked up inside their named
//!    owner when that owner exists, otherwise inside the current scope.
//! 3. `[*]` depends on the role: as a source or declaration it is the first
//!    initial pseudostate of the current scope (the entry); as a target it is
//!    the second one (the exit), so `[*] --> A` and `B --> [*]` get two
//!    distinct nodes.
//! 4. Plain names are matched according to [`NameIdentity`].

use crate::config::NameIdentity;
use crate::parser::{INITIAL_TOKEN, NameToken};
use crate::state_machine::{ParseContext, ScopeId, State, StateId, StateKind};

/// How a name is being referenced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Source,
    Target,
    Declaration,
}

/// Where and how to create a state for a name that did not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub name: String,
    pub kind: StateKind,
    pub owner: ScopeId,
}

/// Outcome of resolving a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(StateId),
    Missing(Placement),
}

impl Resolution {
    pub fn found(&self) -> Option<StateId> {
        match self {
            Resolution::Found(id) => Some(*id),
            Resolution::Missing(_) => None,
        }
    }
}

/// Resolve `raw` against the current scope of `ctx`
pub fn resolve(ctx: &ParseContext, identity: NameIdentity, raw: &str, role: Role) -> Resolution {
    let name = ctx.aliases.canonical(raw.trim());
    let scope = ctx.scopes.top();

    let resolution = match NameToken::parse(name) {
        NameToken::Initial => resolve_initial(ctx, scope, role),
        NameToken::History { owner, marker } => {
            let owner_scope = match owner {
                None => Some(scope),
                Some(owner) => find_plain(ctx, identity, ctx.aliases.canonical(owner))
                    .map(|state| ScopeId::State(state.id)),
            };
            match owner_scope {
                Some(owner_scope) => lookup(
                    ctx.registry.find_history(marker, owner_scope),
                    marker,
                    StateKind::History,
                    owner_scope,
                ),
                // Unknown owner: the whole token names a history node here
                None => lookup(
                    ctx.registry.find_history(name, scope),
                    name,
                    StateKind::History,
                    scope,
                ),
            }
        }
        NameToken::Plain(plain) => lookup(
            find_plain(ctx, identity, plain),
            plain,
            StateKind::Plain,
            scope,
        ),
    };

    tracing::trace!("Resolved {:?} as {:?} in {}: {:?}", raw, role, scope, resolution);
    resolution
}

fn resolve_initial(ctx: &ParseContext, scope: ScopeId, role: Role) -> Resolution {
    let mut initials = ctx.registry.initials_in(scope);
    let hit = match role {
        Role::Source | Role::Declaration => initials.next(),
        Role::Target => initials.nth(1),
    };
    lookup(hit, INITIAL_TOKEN, StateKind::Initial, scope)
}

fn find_plain<'a>(ctx: &'a ParseContext, identity: NameIdentity, name: &str) -> Option<&'a State> {
    match identity {
        NameIdentity::Global => ctx.registry.find_by_name(name),
        NameIdentity::Scoped => ctx
            .scopes
            .outward()
            .find_map(|scope| ctx.registry.find_in_scope(name, scope)),
    }
}

fn lookup(hit: Option<&State>, name: &str, kind: StateKind, owner: ScopeId) -> Resolution {
    match hit {
        Some(state) => Resolution::Found(state.id),
        None => Resolution::Missing(Placement {
            name: name.to_string(),
            kind,
            owner,
        }),
    }
}
