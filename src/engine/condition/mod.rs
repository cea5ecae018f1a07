// SPDX-License-Identifier: MIT

//! Condition evaluation for tile and automated-action rules
//!
//! A condition is a declarative `{field, operator, value}` test against a
//! context snapshot:
//! - `{field: "user.role", operator: equals, value: "admin"}`
//! - `{field: "user.permissions", operator: contains, value: "write"}`
//! - `{field: "entity.created_at", operator: date_after, value: "2024-01-10T00:00:00Z"}`
//!
//! Lists of conditions combine with implicit AND and short-circuit on the
//! first failure; an empty list passes vacuously.

mod ast;
mod evaluator;
mod registry;

pub use ast::{Condition, Operator};
pub use evaluator::{
    evaluate_condition, evaluate_condition_with, evaluate_conditions, evaluate_conditions_with,
};
pub use registry::{standard_registry, OperatorRegistry, Predicate};

pub(crate) use registry::check_pattern;
