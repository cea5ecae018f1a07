// SPDX-License-Identifier: MIT

//! tessera-rs - declarative condition & template evaluation
//!
//! The decision layer behind "when is this tile/automated action enabled"
//! in a multi-tenant business platform. Hosts build an
//! [`EvaluationContext`] snapshot per decision point, then evaluate
//! declarative conditions and resolve display templates against it:
//!
//! ```
//! use serde_json::json;
//! use tessera_rs::{evaluate_condition, resolve_template, Condition, EvaluationContext, Operator};
//!
//! let ctx = EvaluationContext::new()
//!     .with_user(json!({"user_id": "user-123", "permissions": ["read", "write"]}))
//!     .with_variable("api_base_url", json!("https://api.example.com"));
//!
//! let rule = Condition::new("user.permissions", Operator::Contains, json!("write"));
//! assert!(evaluate_condition(&rule, &ctx).unwrap());
//!
//! let url = resolve_template("{{api_base_url}}/users/$user.user_id", &ctx);
//! assert_eq!(url, "https://api.example.com/users/user-123");
//! ```
//!
//! The `engine` module is the pure core; `tiles` is the host layer that
//! loads rule files and produces per-tile decision reports.

pub mod engine;
pub mod error;
pub mod tiles;

pub use engine::condition::{
    evaluate_condition, evaluate_condition_with, evaluate_conditions, evaluate_conditions_with,
    standard_registry, Condition, Operator, OperatorRegistry, Predicate,
};
pub use engine::context::{resolve_path, EvaluationContext};
pub use engine::template::{resolve_template, resolve_value};
pub use error::{EvalError, RuleError};
pub use tiles::{decide, RuleSet, RuleSetLoader, TileDecision, TileDefinition};
