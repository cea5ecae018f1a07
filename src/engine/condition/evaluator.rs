//! Condition evaluation against a context snapshot

use crate::engine::context::{resolve_path, EvaluationContext};
use crate::error::EvalError;

use super::ast::Condition;
use super::registry::{standard_registry, OperatorRegistry};

/// Evaluate a single condition with the standard operator registry
pub fn evaluate_condition(
    condition: &Condition,
    ctx: &EvaluationContext,
) -> Result<bool, EvalError> {
    evaluate_condition_with(condition, ctx, standard_registry())
}

/// Evaluate a single condition with an explicit registry.
///
/// The resolved path flows into the predicate as an `Option`, so a missing
/// path is an ordinary input (`equals` against null passes, most other
/// operators fail closed). A registry miss is the loud case: it means a
/// rule references an operator this deployment does not carry.
pub fn evaluate_condition_with(
    condition: &Condition,
    ctx: &EvaluationContext,
    registry: &OperatorRegistry,
) -> Result<bool, EvalError> {
    let resolved = resolve_path(&condition.field, ctx);
    let predicate = registry
        .get(condition.operator)
        .ok_or(EvalError::UnknownOperator(condition.operator))?;
    predicate(resolved, &condition.value)
}

/// Evaluate a condition list with the standard registry
pub fn evaluate_conditions(
    conditions: &[Condition],
    ctx: &EvaluationContext,
) -> Result<bool, EvalError> {
    evaluate_conditions_with(conditions, ctx, standard_registry())
}

/// AND-fold a condition list, short-circuiting at the first failure.
///
/// An empty list passes vacuously; "show unless a rule says otherwise"
/// defaults live at the call site, not here.
pub fn evaluate_conditions_with(
    conditions: &[Condition],
    ctx: &EvaluationContext,
    registry: &OperatorRegistry,
) -> Result<bool, EvalError> {
    for condition in conditions {
        if !evaluate_condition_with(condition, ctx, registry)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::condition::{Operator, OperatorRegistry};
    use serde_json::json;

    fn ctx() -> EvaluationContext {
        EvaluationContext::new()
            .with_user(json!({
                "user_id": "user-123",
                "role": "admin",
                "permissions": ["read", "write", "delete"],
                "deactivated_at": null
            }))
            .with_organization(json!({
                "plan": "pro",
                "limits": {"seats": 25}
            }))
            .with_entity(json!({
                "kind": "invoice",
                "status": "open",
                "created_at": "2024-01-15T10:00:00Z"
            }))
    }

    #[test]
    fn test_equals_on_resolved_path() {
        let cond = Condition::new("user.role", Operator::Equals, json!("admin"));
        assert!(evaluate_condition(&cond, &ctx()).unwrap());

        let cond = Condition::new("user.role", Operator::Equals, json!("viewer"));
        assert!(!evaluate_condition(&cond, &ctx()).unwrap());
    }

    #[test]
    fn test_missing_path_equals_null() {
        let cond = Condition::new("user.missing", Operator::Equals, json!(null));
        assert!(evaluate_condition(&cond, &ctx()).unwrap());

        // Present-but-null also equals null
        let cond = Condition::new("user.deactivated_at", Operator::Equals, json!(null));
        assert!(evaluate_condition(&cond, &ctx()).unwrap());
    }

    #[test]
    fn test_exists_distinguishes_null_from_absent() {
        let cond = Condition::new("user.deactivated_at", Operator::Exists, json!(true));
        assert!(evaluate_condition(&cond, &ctx()).unwrap());

        let cond = Condition::new("user.missing", Operator::Exists, json!(false));
        assert!(evaluate_condition(&cond, &ctx()).unwrap());

        let cond = Condition::new("user.missing", Operator::Exists, json!(true));
        assert!(!evaluate_condition(&cond, &ctx()).unwrap());
    }

    #[test]
    fn test_permissions_scenario() {
        let cond = Condition::new("user.permissions", Operator::Contains, json!("write"));
        assert!(evaluate_condition(&cond, &ctx()).unwrap());

        let cond = Condition::new("user.permissions", Operator::NotContains, json!("admin"));
        assert!(evaluate_condition(&cond, &ctx()).unwrap());
    }

    #[test]
    fn test_date_scenario() {
        let cond = Condition::new(
            "entity.created_at",
            Operator::DateAfter,
            json!("2024-01-10T00:00:00Z"),
        );
        assert!(evaluate_condition(&cond, &ctx()).unwrap());
    }

    #[test]
    fn test_nested_numeric_comparison() {
        let cond = Condition::new(
            "organization.limits.seats",
            Operator::GreaterThanOrEqual,
            json!(10),
        );
        assert!(evaluate_condition(&cond, &ctx()).unwrap());
    }

    #[test]
    fn test_empty_list_is_vacuously_true() {
        assert!(evaluate_conditions(&[], &ctx()).unwrap());
    }

    #[test]
    fn test_and_combination() {
        let conds = vec![
            Condition::new("user.role", Operator::Equals, json!("admin")),
            Condition::new("organization.plan", Operator::In, json!(["pro", "enterprise"])),
            Condition::new("entity.status", Operator::NotEquals, json!("archived")),
        ];
        assert!(evaluate_conditions(&conds, &ctx()).unwrap());
    }

    #[test]
    fn test_single_failure_fails_the_list() {
        let conds = vec![
            Condition::new("user.role", Operator::Equals, json!("admin")),
            Condition::new("entity.status", Operator::Equals, json!("closed")),
            Condition::new("user.role", Operator::Equals, json!("admin")),
        ];
        assert!(!evaluate_conditions(&conds, &ctx()).unwrap());
    }

    #[test]
    fn test_short_circuit_skips_later_errors() {
        // The invalid pattern sits after a failing condition and is never
        // reached.
        let conds = vec![
            Condition::new("entity.status", Operator::Equals, json!("closed")),
            Condition::new("entity.kind", Operator::RegexMatch, json!("[unclosed")),
        ];
        assert!(!evaluate_conditions(&conds, &ctx()).unwrap());
    }

    #[test]
    fn test_unknown_operator_is_loud_for_any_context() {
        let registry = OperatorRegistry::empty();
        let cond = Condition::new("user.role", Operator::Equals, json!("admin"));

        let result = evaluate_condition_with(&cond, &ctx(), &registry);
        assert!(matches!(result, Err(EvalError::UnknownOperator(op)) if op == Operator::Equals));

        let result = evaluate_condition_with(&cond, &EvaluationContext::new(), &registry);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_pattern_propagates() {
        let conds = vec![
            Condition::new("entity.kind", Operator::Equals, json!("invoice")),
            Condition::new("entity.kind", Operator::RegexMatch, json!("[unclosed")),
        ];
        let result = evaluate_conditions(&conds, &ctx());
        assert!(matches!(result, Err(EvalError::InvalidPattern { .. })));
    }
}
