// SPDX-License-Identifier: MIT

//! Schema types for declarative tile rule files
//!
//! Rule files are authored outside this crate (and versioned with the
//! deployment, not here); these types only give them shape. Unknown
//! operator names fail deserialization, so a malformed rule never reaches
//! evaluation.

use serde::{Deserialize, Serialize};

use crate::engine::condition::{check_pattern, Condition, Operator};
use crate::error::RuleError;

/// A named list of tile definitions, the unit of loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    #[serde(default)]
    pub tiles: Vec<TileDefinition>,
}

/// One tile (or automated action) and the rules governing it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileDefinition {
    /// Unique tile identifier
    pub id: String,
    /// Display title, may contain template tokens
    pub title: String,
    /// Action target (e.g. a URL), may contain template tokens
    pub action: Option<String>,
    /// Conditions gating visibility; empty passes vacuously
    #[serde(default)]
    pub visible_when: Vec<Condition>,
    /// Conditions gating enablement; empty passes vacuously
    #[serde(default)]
    pub enabled_when: Vec<Condition>,
}

impl TileDefinition {
    fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.visible_when.iter().chain(self.enabled_when.iter())
    }
}

impl RuleSet {
    /// Static validation for deployment gates: every `regex_match` target
    /// must be a string that compiles. Failures carry the offending tile id.
    pub fn validate(&self) -> Result<(), RuleError> {
        for tile in &self.tiles {
            for condition in tile.conditions() {
                if condition.operator == Operator::RegexMatch {
                    check_pattern(&condition.value)
                        .map_err(|e| RuleError::tile(&tile.id, e))?;
                }
            }
        }
        Ok(())
    }
}

/// The decision report for one tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileDecision {
    pub id: String,
    pub visible: bool,
    pub enabled: bool,
    /// Title with every template token resolved
    pub title: String,
    /// Action with every template token resolved
    pub action: Option<String>,
    /// Configuration fault that forced this tile closed, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}
