// SPDX-License-Identifier: MIT

//! The per-call evaluation snapshot

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// An immutable snapshot of everything a decision point can see.
///
/// Built fresh by the caller for each decision point and discarded after
/// use. The three path facets (`user`, `organization`, `entity`) are JSON
/// objects addressed by the dotted-path grammar; `variables` is a flat map
/// visible only to the `{{name}}` template grammar.
///
/// A shared `&EvaluationContext` is safe to reuse across concurrent
/// evaluation calls; nothing here is ever mutated after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Attributes of the acting principal
    #[serde(default)]
    pub user: Value,
    /// Attributes of the active tenant
    #[serde(default)]
    pub organization: Value,
    /// The record currently in view
    #[serde(default)]
    pub entity: Value,
    /// Ambient values for templates (flat, no nesting)
    #[serde(default)]
    pub variables: HashMap<String, Value>,
}

impl EvaluationContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `user` facet
    pub fn with_user(mut self, user: Value) -> Self {
        self.user = user;
        self
    }

    /// Set the `organization` facet
    pub fn with_organization(mut self, organization: Value) -> Self {
        self.organization = organization;
        self
    }

    /// Set the `entity` facet
    pub fn with_entity(mut self, entity: Value) -> Self {
        self.entity = entity;
        self
    }

    /// Add one ambient variable
    pub fn with_variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Look up a path facet by its leading path segment.
    ///
    /// `variables` is deliberately not addressable here; it belongs to the
    /// template grammar only.
    pub fn facet(&self, name: &str) -> Option<&Value> {
        match name {
            "user" => Some(&self.user),
            "organization" => Some(&self.organization),
            "entity" => Some(&self.entity),
            _ => None,
        }
    }

    /// Look up an ambient variable by name
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}
