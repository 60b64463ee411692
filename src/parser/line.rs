//! Line classifier
//!
//! Each trimmed, non-blank diagram line is sorted into exactly one [`Line`]
//! kind. The checks run in a fixed order because several patterns can appear
//! on the same line: a declaration may contain `:`, a transition label may
//! contain `{`, and so on. The first match wins.

use super::token::unquote;
use regex::Regex;
use std::sync::LazyLock;

const DECLARATION_KEYWORD: &str = "state ";
const ALIAS_CONNECTIVE: &str = " as ";
const STEREOTYPE_OPEN: &str = "<<";

/// `-->`, `->` and directional variants such as `-down->`
static ARROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+(?:left|right|up|down)?-*>").unwrap());

/// `"Quoted Name" as alias <<stereotype>>` or `Bare as alias`
static ALIASED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:"(?P<quoted>[^"]*)"|(?P<bare>\S+))\s+as\s+(?P<alias>[^\s<{:]+)\s*(?:<<(?P<stereotype>[^>]*)>>)?"#)
        .unwrap()
});

/// `Name <<stereotype>>`
static STEREOTYPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<name>.*?)\s*<<(?P<stereotype>[^>]*)>>").unwrap());

/// A classified diagram line, borrowing from the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `state Name {` or `state "Long Name" as alias {`
    CompositeOpen {
        name: &'a str,
        alias: Option<&'a str>,
    },
    /// `state "Long Name" as alias [<<stereotype>>]`
    AliasedDeclaration {
        name: &'a str,
        alias: &'a str,
        stereotype: Option<&'a str>,
    },
    /// `state Name <<stereotype>>`
    StereotypedDeclaration { name: &'a str, stereotype: &'a str },
    /// `state Name [: text]`
    SimpleDeclaration {
        name: &'a str,
        content: Option<&'a str>,
    },
    /// `}`
    ScopeClose,
    /// `Source --> Target [: event]`
    Transition {
        source: &'a str,
        target: &'a str,
        event: Option<&'a str>,
    },
    /// `Name : text`
    Content { name: &'a str, text: &'a str },
    /// Comments, directives and anything outside the modelled subset
    Ignored,
}

impl Line<'_> {
    /// Short label used in log output
    pub fn label(&self) -> &'static str {
        match self {
            Line::CompositeOpen { .. } => "composite-open",
            Line::AliasedDeclaration { .. } => "aliased-declaration",
            Line::StereotypedDeclaration { .. } => "stereotyped-declaration",
            Line::SimpleDeclaration { .. } => "simple-declaration",
            Line::ScopeClose => "scope-close",
            Line::Transition { .. } => "transition",
            Line::Content { .. } => "content",
            Line::Ignored => "ignored",
        }
    }
}

/// Classify one line. Leading and trailing whitespace is ignored.
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() || is_comment(line) {
        return Line::Ignored;
    }

    if let Some(rest) = line.strip_prefix(DECLARATION_KEYWORD) {
        return classify_declaration(rest.trim());
    }

    if line.starts_with('}') {
        return Line::ScopeClose;
    }

    if let Some(arrow) = ARROW.find(line) {
        return classify_transition(&line[..arrow.start()], &line[arrow.end()..]);
    }

    if let Some((name, text)) = line.split_once(':') {
        let name = name.trim();
        if !name.is_empty() {
            return Line::Content {
                name,
                text: text.trim(),
            };
        }
    }

    Line::Ignored
}

fn classify_declaration(rest: &str) -> Line<'_> {
    if rest.is_empty() {
        return Line::Ignored;
    }

    if let Some(brace) = rest.find('{') {
        let head = rest[..brace].trim();
        let head = head
            .find(STEREOTYPE_OPEN)
            .map_or(head, |idx| head[..idx].trim());
        if head.is_empty() {
            return Line::Ignored;
        }
        if let Some(caps) = ALIASED.captures(head) {
            let name = caps
                .name("quoted")
                .or_else(|| caps.name("bare"))
                .map_or("", |m| m.as_str());
            return Line::CompositeOpen {
                name,
                alias: caps.name("alias").map(|m| m.as_str()),
            };
        }
        return Line::CompositeOpen {
            name: unquote(head),
            alias: None,
        };
    }

    if rest.contains(ALIAS_CONNECTIVE)
        && let Some(caps) = ALIASED.captures(rest)
        && let Some(alias) = caps.name("alias")
    {
        let name = caps
            .name("quoted")
            .or_else(|| caps.name("bare"))
            .map_or("", |m| m.as_str());
        return Line::AliasedDeclaration {
            name,
            alias: alias.as_str(),
            stereotype: caps.name("stereotype").map(|m| m.as_str().trim()),
        };
    }

    if let Some(caps) = STEREOTYPED.captures(rest)
        && let (Some(name), Some(stereotype)) = (caps.name("name"), caps.name("stereotype"))
    {
        let name = unquote(name.as_str());
        if name.is_empty() {
            return Line::Ignored;
        }
        return Line::StereotypedDeclaration {
            name,
            stereotype: stereotype.as_str().trim(),
        };
    }

    let (name, content) = match rest.split_once(':') {
        Some((name, text)) => (name, Some(text.trim())),
        None => (rest, None),
    };
    let name = unquote(name);
    if name.is_empty() {
        return Line::Ignored;
    }
    Line::SimpleDeclaration { name, content }
}

fn classify_transition<'a>(left: &'a str, right: &'a str) -> Line<'a> {
    let (target, event) = match right.split_once(':') {
        Some((target, event)) => {
            let event = event.trim();
            (target, (!event.is_empty()).then_some(event))
        }
        None => (right, None),
    };

    let source = left.trim();
    let target = target.trim();
    if source.is_empty() || target.is_empty() {
        return Line::Ignored;
    }

    Line::Transition {
        source,
        target,
        event,
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('\'') || (line.starts_with("/'") && line.ends_with("'/"))
}
