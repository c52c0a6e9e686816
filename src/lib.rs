//! # logiscore
//!
//! Scores whether a free-text "explanation" is logically supported by facts
//! extracted from a source text chunk. A restricted first-order
//! forward-chaining reasoner saturates the chunk facts under a rule set;
//! the explanation's facts are then scored against the closure with
//! precision/recall/F1.
//!
//! ## Architecture
//!
//! - **Reasoning kernel** (`logic`): unification, premise joins, fixpoint
//!   saturation, and the closure-vs-explanation metric
//! - **Rules** (`rules`): data-driven rule sets, loadable from JSON
//! - **Schema** (`schema`): descriptive predicate declarations
//! - **Dataset** (`dataset`): JSON Lines samples from the extraction stage
//! - **Experiments** (`experiment`): multi-trial scoring runs with
//!   per-trial aggregation
//!
//! ## Library usage
//!
//! ```
//! use logiscore::logic::{Fact, FactSet, logical_metrics};
//! use logiscore::rules::RuleSet;
//!
//! let chunk: FactSet = [
//!     Fact::new("located_in", ["Paris", "France"]),
//!     Fact::new("located_in", ["France", "Europe"]),
//! ]
//! .into_iter()
//! .collect();
//! let explanation: FactSet = [Fact::new("located_in", ["Paris", "Europe"])]
//!     .into_iter()
//!     .collect();
//!
//! let report = logical_metrics(&chunk, &explanation, &RuleSet::builtin(), None);
//! assert_eq!(report.precision, 1.0);
//! assert!(report.closure.len() > chunk.len());
//! ```

pub mod dataset;
pub mod error;
pub mod experiment;
pub mod logic;
pub mod rules;
pub mod schema;
