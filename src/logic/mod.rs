//! The reasoning kernel: restricted first-order forward chaining and the
//! explanation metric derived from it.
//!
//! Data flows leaf-first: [`fact`] underlies everything; [`unify`] matches
//! one premise against one fact; [`matcher`] joins a rule's premises into
//! satisfying environments; [`apply`] instantiates conclusions; [`saturate`]
//! iterates rule application to a fixpoint; [`metrics`] turns a closure and
//! a candidate explanation into precision/recall/F1.
//!
//! Everything here is pure and single-threaded: no I/O, no shared state, no
//! configuration beyond the function arguments. Inputs are read-only, so
//! independent metric computations can run in parallel freely.

pub mod apply;
pub mod fact;
pub mod matcher;
pub mod metrics;
pub mod pattern;
pub mod saturate;
pub mod unify;

pub use apply::apply_rule_once;
pub use fact::{Fact, FactSet};
pub use matcher::find_rule_matches;
pub use metrics::{MetricReport, logical_metrics};
pub use pattern::{AtomPattern, Bindings};
pub use saturate::{SaturationStats, saturate, saturate_with_stats};
pub use unify::unify;
