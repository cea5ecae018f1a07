// SPDX-License-Identifier: MIT

//! Typed error handling for tessera-rs
//!
//! Configuration errors are loud: an unknown operator or a malformed
//! pattern means a broken rule was deployed, and the caller must see it.
//! Resolution misses (absent paths, missing variables, type mismatches)
//! are never errors; they resolve to conservative defaults inside the
//! evaluator instead.

use crate::engine::condition::Operator;
use thiserror::Error;

/// Configuration errors surfaced by the condition evaluator
#[derive(Debug, Error)]
pub enum EvalError {
    /// Operator not present in the registry in use
    #[error("unsupported operator '{0}'")]
    UnknownOperator(Operator),

    /// Malformed `regex_match` pattern
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl EvalError {
    /// Create an invalid-pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from loading and validating declarative rule sets
#[derive(Debug, Error)]
pub enum RuleError {
    /// Rule file missing on disk
    #[error("rule file not found: {0}")]
    FileNotFound(String),

    /// I/O errors while reading a rule file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A tile carries an invalid rule
    #[error("tile '{tile}': {source}")]
    Tile {
        tile: String,
        #[source]
        source: EvalError,
    },
}

impl RuleError {
    /// Tag an evaluator configuration error with the tile it came from
    pub fn tile(tile: impl Into<String>, source: EvalError) -> Self {
        Self::Tile {
            tile: tile.into(),
            source,
        }
    }
}
