// SPDX-License-Identifier: MIT

//! Template resolution for display strings
//!
//! Strings handed to the host layer may embed two reference grammars:
//! - `$facet.path.path` - direct context-path references
//! - `{{variable_name}}` - ambient-variable references
//!
//! Both are substituted in a single left-to-right pass; an unresolved
//! reference renders as the empty string so a broken optional field
//! degrades the string instead of breaking the surrounding page/action.

mod resolver;
mod scanner;

pub use resolver::{resolve_template, resolve_value};
