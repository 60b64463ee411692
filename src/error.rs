//! This module defines all error types used throughout the application.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A diagram line that cannot be processed under the active policy
    #[error("line {line}: {issue}")]
    Analysis {
        line: usize,
        #[source]
        issue: Issue,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration parsing errors
    #[error("Configuration parsing error in {file:?}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// A structured problem found while analyzing a single diagram line.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Content was attached to a name that was never declared or referenced
    #[error("content refers to undeclared state `{name}`")]
    UnresolvedReference { name: String },

    /// No identifier is left above the last one handed out
    #[error("state identifiers exhausted after {last_id}")]
    IdentifierOverflow { last_id: u64 },

    /// An alias was re-declared for a different canonical name
    #[error("alias `{alias}` is already bound to `{existing}`; ignoring `{requested}`")]
    AliasConflict {
        alias: String,
        existing: String,
        requested: String,
    },
}

/// An [`Issue`] recorded against the line it was found on (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    #[serde(flatten)]
    pub issue: Issue,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.issue)
    }
}

impl Error {
    /// The structured issue behind an analysis error, if any
    pub fn issue(&self) -> Option<&Issue> {
        match self {
            Error::Analysis { issue, .. } => Some(issue),
            _ => None,
        }
    }
}

impl From<Diagnostic> for Error {
    fn from(diagnostic: Diagnostic) -> Self {
        Error::Analysis {
            line: diagnostic.line,
            issue: diagnostic.issue,
        }
    }
}

// Implement From traits for common external error types

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse {
            file: PathBuf::from("unknown"),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Custom(format!("JSON error: {}", err))
    }
}
