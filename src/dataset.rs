//! Loading the fact collections produced by the extraction stage.
//!
//! Two wire formats: a JSON Lines sample file (one scored sample per line)
//! and a plain JSON fact list. Both carry facts in the `{predicate, args}`
//! shape; set semantics are applied when the kernel consumes them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};
use crate::logic::fact::{Fact, FactSet};

/// One sample: the facts extracted from a source chunk and the facts
/// extracted from the explanation under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Identifier carried through to the reports. Filled with the line
    /// number when the extraction stage omitted it.
    #[serde(default)]
    pub sample_id: String,
    pub chunk_facts: Vec<Fact>,
    pub explanation_facts: Vec<Fact>,
}

impl Sample {
    /// The chunk facts, canonicalized (duplicates collapse).
    pub fn chunk_set(&self) -> FactSet {
        self.chunk_facts.iter().cloned().collect()
    }

    /// The explanation facts, canonicalized.
    pub fn explanation_set(&self) -> FactSet {
        self.explanation_facts.iter().cloned().collect()
    }
}

/// Load samples from a JSON Lines file, one sample per non-blank line.
///
/// A structurally invalid line is fatal and reported with its line number;
/// there is no way to repair a record missing its predicate or fact lists.
pub fn load_samples(path: &Path) -> DataResult<Vec<Sample>> {
    let data = std::fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut samples = Vec::new();
    for (index, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut sample: Sample = serde_json::from_str(line).map_err(|e| DataError::Parse {
            path: path.display().to_string(),
            line: index + 1,
            message: e.to_string(),
        })?;
        if sample.sample_id.is_empty() {
            sample.sample_id = (index + 1).to_string();
        }
        samples.push(sample);
    }
    Ok(samples)
}

/// Load a plain JSON array of `{predicate, args}` records as a fact set.
pub fn load_fact_list(path: &Path) -> DataResult<FactSet> {
    let data = std::fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let facts: Vec<Fact> = serde_json::from_str(&data).map_err(|e| DataError::FactList {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(facts.into_iter().collect())
}
