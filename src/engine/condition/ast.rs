// SPDX-License-Identifier: MIT

//! Condition and operator types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of condition operators.
///
/// Deserialized from its snake_case name; an operator name outside this set
/// is rejected when the rule is parsed, never discovered mid-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Strict equality, no cross-type coercion
    Equals,
    /// Strict inequality
    NotEquals,
    /// Numeric `>`
    GreaterThan,
    /// Numeric `<`
    LessThan,
    /// Numeric `>=`
    GreaterThanOrEqual,
    /// Numeric `<=`
    LessThanOrEqual,
    /// Array membership of the target inside the context value
    Contains,
    /// Negated array membership
    NotContains,
    /// Membership of the context value inside the target array
    In,
    /// Negated membership
    NotIn,
    /// Presence test against the resolver's found flag
    Exists,
    /// Chronological comparison, context after target
    DateAfter,
    /// Chronological comparison, context before target
    DateBefore,
    /// Case-sensitive string prefix test
    StartsWith,
    /// Case-sensitive string suffix test
    EndsWith,
    /// Case-sensitive substring test
    ContainsText,
    /// Pattern match on a string context value
    RegexMatch,
}

impl Operator {
    /// The snake_case name used in rule files
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::GreaterThanOrEqual => "greater_than_or_equal",
            Operator::LessThanOrEqual => "less_than_or_equal",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::Exists => "exists",
            Operator::DateAfter => "date_after",
            Operator::DateBefore => "date_before",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::ContainsText => "contains_text",
            Operator::RegexMatch => "regex_match",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single declarative test against a context snapshot.
///
/// `field` is a dotted path whose first segment names a facet; `value` is
/// the operand the operator compares the resolved value against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: Value,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, value: Value) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operator_display() {
        assert_eq!(format!("{}", Operator::Equals), "equals");
        assert_eq!(
            format!("{}", Operator::GreaterThanOrEqual),
            "greater_than_or_equal"
        );
        assert_eq!(format!("{}", Operator::RegexMatch), "regex_match");
    }

    #[test]
    fn test_operator_deserializes_from_snake_case() {
        let op: Operator = serde_json::from_str("\"not_contains\"").unwrap();
        assert_eq!(op, Operator::NotContains);

        let op: Operator = serde_json::from_str("\"date_after\"").unwrap();
        assert_eq!(op, Operator::DateAfter);
    }

    #[test]
    fn test_unknown_operator_name_is_rejected() {
        let result: Result<Operator, _> = serde_json::from_str("\"matches_fuzzy\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_condition_deserializes() {
        let cond: Condition = serde_json::from_value(json!({
            "field": "user.permissions",
            "operator": "contains",
            "value": "write"
        }))
        .unwrap();

        assert_eq!(
            cond,
            Condition::new("user.permissions", Operator::Contains, json!("write"))
        );
    }

    #[test]
    fn test_condition_value_defaults_to_null() {
        let cond: Condition = serde_json::from_value(json!({
            "field": "entity.deleted_at",
            "operator": "equals"
        }))
        .unwrap();

        assert_eq!(cond.value, Value::Null);
    }
}
