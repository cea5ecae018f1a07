// SPDX-License-Identifier: MIT

//! The evaluator core: pure, synchronous, I/O-free
//!
//! Three layers, leaves first:
//! - `context` - the four-facet evaluation snapshot and dotted-path resolution
//! - `condition` - enumerated operators, the predicate registry, and
//!   AND-combination of condition lists
//! - `template` - single-pass scanning and substitution of `$path` and
//!   `{{variable}}` references inside strings
//!
//! Nothing in this module touches the network, the disk, or shared mutable
//! state; every call is a pure function of a condition/template and a
//! context snapshot.

pub mod condition;
pub mod context;
pub mod template;
