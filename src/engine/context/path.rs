// SPDX-License-Identifier: MIT

//! Dotted-path resolution through the facet tree

use super::snapshot::EvaluationContext;
use serde_json::Value;

/// Resolve a dotted attribute path against a context snapshot.
///
/// The first segment must name a path facet (`user`, `organization`,
/// `entity`); anything else resolves as absent. Remaining segments walk
/// nested objects.
///
/// The found flag of the contract is the `Option` itself: `Some(&Null)` is
/// "present but null", `None` is "absent". The `exists` operator and
/// equality against an explicit null depend on that distinction. This
/// function never fails.
pub fn resolve_path<'a>(path: &str, ctx: &'a EvaluationContext) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = ctx.facet(segments.next()?)?;
    for segment in segments {
        // Value::get is None for non-objects, so a walk through a scalar
        // or an array stops here rather than erroring.
        current = current.get(segment)?;
    }
    Some(current)
}
