// SPDX-License-Identifier: MIT

//! Host layer: declarative tile rules and the decision report
//!
//! This module provides:
//! - `RuleSet` / `TileDefinition` - serde types for externally authored
//!   rule files (YAML or JSON)
//! - `RuleSetLoader` - file and string loading
//! - `decide` - fold a rule set and a context into per-tile decisions

mod decider;
mod loader;
mod types;

pub use decider::decide;
pub use loader::RuleSetLoader;
pub use types::{RuleSet, TileDecision, TileDefinition};
