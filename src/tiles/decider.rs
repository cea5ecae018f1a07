// SPDX-License-Identifier: MIT

//! The decision layer: rule set + context -> per-tile report

use crate::engine::condition::evaluate_conditions;
use crate::engine::context::EvaluationContext;
use crate::engine::template::resolve_template;

use super::types::{RuleSet, TileDecision, TileDefinition};

/// Decide every tile in a rule set against one context snapshot.
///
/// A configuration fault (invalid pattern, operator missing from the
/// registry) is logged and fails only its own tile closed; the rest of the
/// report is unaffected. The loud path for catching such faults before
/// deployment is [`RuleSet::validate`].
pub fn decide(rules: &RuleSet, ctx: &EvaluationContext) -> Vec<TileDecision> {
    rules.tiles.iter().map(|tile| decide_tile(tile, ctx)).collect()
}

fn decide_tile(tile: &TileDefinition, ctx: &EvaluationContext) -> TileDecision {
    let gates = evaluate_conditions(&tile.visible_when, ctx)
        .and_then(|visible| Ok((visible, evaluate_conditions(&tile.enabled_when, ctx)?)));

    let (visible, enabled, fault) = match gates {
        Ok((visible, enabled)) => (visible, enabled, None),
        Err(e) => {
            log::error!("tile '{}' has a broken rule, hiding it: {}", tile.id, e);
            (false, false, Some(e.to_string()))
        }
    };

    // The report is a full snapshot: strings resolve even for hidden tiles.
    TileDecision {
        id: tile.id.clone(),
        visible,
        enabled,
        title: resolve_template(&tile.title, ctx),
        action: tile.action.as_deref().map(|a| resolve_template(a, ctx)),
        fault,
    }
}
