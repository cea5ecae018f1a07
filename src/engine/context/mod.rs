// SPDX-License-Identifier: MIT

//! Evaluation context and path resolution
//!
//! This module provides:
//! - `EvaluationContext` - the immutable per-call snapshot with `user`,
//!   `organization`, `entity`, and `variables` facets
//! - `resolve_path` - dotted-path lookup through the facet tree

mod path;
mod snapshot;

pub use path::resolve_path;
pub use snapshot::EvaluationContext;
