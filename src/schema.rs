//! Predicate schema: names and argument descriptions.
//!
//! Purely descriptive. The schema is produced by the extraction stage and
//! used for reporting; the reasoning kernel never validates facts or rules
//! against it.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// One predicate declaration: name plus argument-position names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// The full schema handed over by the extraction stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSchema {
    #[serde(default)]
    pub predicates: Vec<Predicate>,
}

impl PredicateSchema {
    /// Load a schema from a JSON file of shape `{"predicates": [...]}`.
    pub fn from_path(path: &Path) -> SchemaResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| SchemaError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&data).map_err(|e| SchemaError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// All predicate names, in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.name.as_str()).collect()
    }

    /// One line per predicate, `name(arg1, arg2)` style.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for p in &self.predicates {
            let _ = writeln!(out, "{}({})", p.name, p.args.join(", "));
        }
        out
    }
}
