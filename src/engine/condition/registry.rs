// SPDX-License-Identifier: MIT

//! The operator registry: one pure predicate per operator
//!
//! Every predicate shares the signature
//! `fn(Option<&Value>, &Value) -> Result<bool, EvalError>`. The `Option`
//! carries the path resolver's found flag, so `exists` is an ordinary table
//! entry; only `regex_match` can return `Err` (a malformed pattern is a
//! configuration error, not a quiet `false`).

use crate::error::EvalError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

use super::ast::Operator;

/// A pure comparison predicate over (resolved context value, target value)
pub type Predicate = fn(Option<&Value>, &Value) -> Result<bool, EvalError>;

/// An immutable operator table, constructed once and passed by reference.
///
/// Production callers use [`standard_registry`]; tests substitute a smaller
/// table by construction rather than by mutating global state.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    table: HashMap<Operator, Predicate>,
}

impl OperatorRegistry {
    /// The full operator table
    pub fn standard() -> Self {
        let mut table: HashMap<Operator, Predicate> = HashMap::new();
        table.insert(Operator::Equals, equals);
        table.insert(Operator::NotEquals, not_equals);
        table.insert(Operator::GreaterThan, greater_than);
        table.insert(Operator::LessThan, less_than);
        table.insert(Operator::GreaterThanOrEqual, greater_than_or_equal);
        table.insert(Operator::LessThanOrEqual, less_than_or_equal);
        table.insert(Operator::Contains, contains);
        table.insert(Operator::NotContains, not_contains);
        table.insert(Operator::In, is_in);
        table.insert(Operator::NotIn, not_in);
        table.insert(Operator::Exists, exists);
        table.insert(Operator::DateAfter, date_after);
        table.insert(Operator::DateBefore, date_before);
        table.insert(Operator::StartsWith, starts_with);
        table.insert(Operator::EndsWith, ends_with);
        table.insert(Operator::ContainsText, contains_text);
        table.insert(Operator::RegexMatch, regex_match);
        Self { table }
    }

    /// A registry with no operators, for building restricted tables
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Add one operator to this registry
    pub fn with_operator(mut self, operator: Operator, predicate: Predicate) -> Self {
        self.table.insert(operator, predicate);
        self
    }

    /// Look up the predicate for an operator
    pub fn get(&self, operator: Operator) -> Option<Predicate> {
        self.table.get(&operator).copied()
    }
}

/// The process-wide standard registry
pub fn standard_registry() -> &'static OperatorRegistry {
    static REGISTRY: Lazy<OperatorRegistry> = Lazy::new(OperatorRegistry::standard);
    &REGISTRY
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Strict equality between two present values: same JSON shape or unequal.
/// Numbers compare by value so `5` equals `5.0`.
fn value_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => match (l.as_f64(), r.as_f64()) {
            (Some(l), Some(r)) => (l - r).abs() < f64::EPSILON,
            _ => false,
        },
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r).all(|(a, b)| value_eq(a, b))
        }
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(k, a)| r.get(k).is_some_and(|b| value_eq(a, b)))
        }
        _ => false,
    }
}

fn equals(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    Ok(match (left, right) {
        // A genuinely missing path equals an explicit null target
        (None, Value::Null) => true,
        (None, _) => false,
        (Some(l), r) => value_eq(l, r),
    })
}

fn not_equals(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    equals(left, right).map(|matched| !matched)
}

/// Numeric coercion: numbers as-is, strings via `parse::<f64>`, anything
/// else (and non-finite results) is not a number.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn compare_numbers<F>(left: Option<&Value>, right: &Value, cmp: F) -> Result<bool, EvalError>
where
    F: Fn(f64, f64) -> bool,
{
    match (left.and_then(as_number), as_number(right)) {
        (Some(l), Some(r)) => Ok(cmp(l, r)),
        _ => Ok(false),
    }
}

fn greater_than(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    compare_numbers(left, right, |l, r| l > r)
}

fn less_than(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    compare_numbers(left, right, |l, r| l < r)
}

fn greater_than_or_equal(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    compare_numbers(left, right, |l, r| l >= r)
}

fn less_than_or_equal(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    compare_numbers(left, right, |l, r| l <= r)
}

fn contains(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    Ok(match left {
        Some(Value::Array(items)) => items.iter().any(|item| value_eq(item, right)),
        // A non-array context value is a resolution miss, not an error
        _ => false,
    })
}

fn not_contains(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    contains(left, right).map(|matched| !matched)
}

fn is_in(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    Ok(match (left, right) {
        (Some(l), Value::Array(items)) => items.iter().any(|item| value_eq(item, l)),
        _ => false,
    })
}

fn not_in(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    is_in(left, right).map(|matched| !matched)
}

fn exists(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    Ok(match right {
        Value::Bool(expected) => left.is_some() == *expected,
        _ => false,
    })
}

/// Timestamp grammar: RFC 3339 strings, or integers taken as epoch millis
fn as_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn compare_dates<F>(left: Option<&Value>, right: &Value, cmp: F) -> Result<bool, EvalError>
where
    F: Fn(DateTime<Utc>, DateTime<Utc>) -> bool,
{
    match (left.and_then(as_timestamp), as_timestamp(right)) {
        (Some(l), Some(r)) => Ok(cmp(l, r)),
        _ => Ok(false),
    }
}

fn date_after(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    compare_dates(left, right, |l, r| l > r)
}

fn date_before(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    compare_dates(left, right, |l, r| l < r)
}

fn compare_text<F>(left: Option<&Value>, right: &Value, test: F) -> Result<bool, EvalError>
where
    F: Fn(&str, &str) -> bool,
{
    match (left, right) {
        (Some(Value::String(l)), Value::String(r)) => Ok(test(l, r)),
        _ => Ok(false),
    }
}

fn starts_with(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    compare_text(left, right, |l, r| l.starts_with(r))
}

fn ends_with(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    compare_text(left, right, |l, r| l.ends_with(r))
}

fn contains_text(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    compare_text(left, right, |l, r| l.contains(r))
}

fn regex_match(left: Option<&Value>, right: &Value) -> Result<bool, EvalError> {
    let pattern = compile_pattern(right)?;
    Ok(match left {
        Some(Value::String(s)) => pattern.is_match(s),
        _ => false,
    })
}

fn compile_pattern(target: &Value) -> Result<Regex, EvalError> {
    let pattern = match target {
        Value::String(s) => s,
        other => {
            return Err(EvalError::invalid_pattern(
                other.to_string(),
                "pattern must be a string",
            ))
        }
    };
    Regex::new(pattern).map_err(|e| EvalError::invalid_pattern(pattern, e.to_string()))
}

/// Static validation hook for rule loaders: does this `regex_match` target
/// compile?
pub(crate) fn check_pattern(target: &Value) -> Result<(), EvalError> {
    compile_pattern(target).map(|_| ())
}
