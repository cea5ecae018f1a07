// SPDX-License-Identifier: MIT

//! Rule set loader - YAML and JSON file loading and parsing

use std::fs;
use std::path::Path;

use crate::error::RuleError;

use super::types::RuleSet;

/// Loads rule sets from YAML or JSON files
pub struct RuleSetLoader;

impl RuleSetLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a rule set from a file, picking the parser by extension
    /// (`.json` is JSON, everything else is YAML).
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<RuleSet, RuleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RuleError::FileNotFound(path.display().to_string())
            } else {
                RuleError::Io(e)
            }
        })?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    /// Parse a rule set from a YAML string
    pub fn parse_yaml(content: &str) -> Result<RuleSet, RuleError> {
        let rules: RuleSet = serde_yaml::from_str(content)?;
        Ok(rules)
    }

    /// Parse a rule set from a JSON string
    pub fn parse_json(content: &str) -> Result<RuleSet, RuleError> {
        let rules: RuleSet = serde_json::from_str(content)?;
        Ok(rules)
    }
}

impl Default for RuleSetLoader {
    fn default() -> Self {
        Self::new()
    }
}
