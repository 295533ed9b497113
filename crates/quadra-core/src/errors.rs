//! Structured error types shared across quadra crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`QuadError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (variables, degrees, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the quadra engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum QuadError {
    /// Malformed polynomials or reduction parameters, detected before any mutation.
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// The ranking index has no bucket to select from.
    #[error("index error: {0}")]
    Index(ErrorInfo),
    /// Inconsistent multigraph or monomial index bookkeeping.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Configuration loading errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl QuadError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            QuadError::Input(info)
            | QuadError::Index(info)
            | QuadError::Graph(info)
            | QuadError::Serde(info)
            | QuadError::Config(info) => info,
        }
    }

    /// Shorthand for an [`QuadError::Input`] error.
    pub fn input(code: impl Into<String>, message: impl Into<String>) -> Self {
        QuadError::Input(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`QuadError::Graph`] error.
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        QuadError::Graph(ErrorInfo::new(code, message))
    }

    /// Adds a context entry to the payload regardless of the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            QuadError::Input(info) => QuadError::Input(info.with_context(key, value)),
            QuadError::Index(info) => QuadError::Index(info.with_context(key, value)),
            QuadError::Graph(info) => QuadError::Graph(info.with_context(key, value)),
            QuadError::Serde(info) => QuadError::Serde(info.with_context(key, value)),
            QuadError::Config(info) => QuadError::Config(info.with_context(key, value)),
        }
    }

    /// Returns whether this is an input validation error.
    pub fn is_input(&self) -> bool {
        matches!(self, QuadError::Input(_))
    }
}
