// SPDX-License-Identifier: MIT

//! Best-effort substitution of scanned tokens

use crate::engine::context::{resolve_path, EvaluationContext};
use serde_json::Value;

use super::scanner::{scan, Segment};

/// Resolve every template token inside a string.
///
/// Rendering never fails: unresolved references (and explicit nulls)
/// become the empty string, and a token-free string comes back unchanged.
pub fn resolve_template(input: &str, ctx: &EvaluationContext) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in scan(input) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::PathRef(path) => push_display(&mut out, resolve_path(path, ctx)),
            Segment::VariableRef(name) => push_display(&mut out, ctx.variable(name)),
        }
    }
    out
}

/// Resolve a value that may be a template.
///
/// Templates only apply to strings; numbers, booleans, arrays, and objects
/// pass through unchanged.
pub fn resolve_value(input: &Value, ctx: &EvaluationContext) -> Value {
    match input {
        Value::String(s) => Value::String(resolve_template(s, ctx)),
        other => other.clone(),
    }
}

/// The display form of a resolved reference: strings verbatim, scalars via
/// their canonical display, misses and nulls empty, containers as compact
/// JSON.
fn push_display(out: &mut String, value: Option<&Value>) {
    match value {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) => out.push_str(s),
        Some(Value::Bool(b)) => out.push_str(if *b { "true" } else { "false" }),
        Some(Value::Number(n)) => out.push_str(&n.to_string()),
        Some(container) => out.push_str(&serde_json::to_string(container).unwrap_or_default()),
    }
}
