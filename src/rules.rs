//! Data-driven inference rules.
//!
//! Rules are structs, not code — they are loaded from JSON produced by the
//! rule-extraction stage, or constructed programmatically via the builders
//! here and `RuleSet::builtin()`.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleResult};
use crate::logic::pattern::AtomPattern;

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A single inference rule: if every premise holds, the conclusion holds.
///
/// Premises are matched left to right; the order affects matching cost only,
/// never the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Ordered premises. Empty means the rule never fires.
    #[serde(default)]
    pub premises: Vec<AtomPattern>,
    /// Exactly one conclusion.
    pub conclusion: AtomPattern,
}

impl Rule {
    /// Create a rule with no premises yet.
    pub fn new(name: impl Into<String>, conclusion: AtomPattern) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            premises: Vec::new(),
            conclusion,
        }
    }

    /// Set the premises.
    pub fn with_premises(mut self, premises: Vec<AtomPattern>) -> Self {
        self.premises = premises;
        self
    }

    /// Set the human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Conclusion variables that no premise binds.
    ///
    /// Such a rule can never produce a fact: the applier drops every
    /// environment that leaves a conclusion variable unbound. Reported here
    /// so rule authors can see the problem instead of a silent no-op.
    pub fn unbound_conclusion_vars(&self) -> Vec<&str> {
        let premise_vars: HashSet<&str> = self
            .premises
            .iter()
            .flat_map(|p| p.args.iter().map(String::as_str))
            .collect();
        self.conclusion
            .args
            .iter()
            .map(String::as_str)
            .filter(|v| !premise_vars.contains(v))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Rule set
// ---------------------------------------------------------------------------

/// A collection of rules with metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Where the rules came from: a file path, or `"builtin"`.
    #[serde(default)]
    pub source: String,
}

impl RuleSet {
    /// Wrap a plain rule list.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self {
            name: String::new(),
            rules,
            source: String::new(),
        }
    }

    /// The built-in geographic containment rule set.
    pub fn builtin() -> Self {
        let rules = vec![
            Rule::new(
                "located-in-transitive",
                AtomPattern::new("located_in", ["A", "C"]),
            )
            .with_premises(vec![
                AtomPattern::new("located_in", ["A", "B"]),
                AtomPattern::new("located_in", ["B", "C"]),
            ])
            .with_description("containment is transitive"),
            Rule::new(
                "capital-implies-located",
                AtomPattern::new("located_in", ["A", "B"]),
            )
            .with_premises(vec![AtomPattern::new("capital_of", ["A", "B"])])
            .with_description("a capital lies inside its country"),
            Rule::new("borders-symmetric", AtomPattern::new("borders", ["B", "A"]))
                .with_premises(vec![AtomPattern::new("borders", ["A", "B"])])
                .with_description("bordering is symmetric"),
        ];

        Self {
            name: "builtin".into(),
            rules,
            source: "builtin".into(),
        }
    }

    /// Load a rule set from a JSON file of shape `{"name"?, "rules": [...]}`.
    ///
    /// Structurally invalid rules (missing predicate, missing conclusion)
    /// fail the whole load — the kernel cannot repair malformed input.
    /// Lint findings are logged but do not fail the load.
    pub fn from_path(path: &Path) -> RuleResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| RuleError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut set: RuleSet = serde_json::from_str(&data).map_err(|e| RuleError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        set.source = path.display().to_string();

        for warning in set.warnings() {
            tracing::warn!(source = %set.source, "{warning}");
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Lint findings: rules that can never fire or never produce a fact.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for rule in &self.rules {
            if rule.premises.is_empty() {
                warnings.push(format!("rule '{}' has no premises and never fires", rule.name));
            }
            let unbound = rule.unbound_conclusion_vars();
            if !unbound.is_empty() {
                warnings.push(format!(
                    "rule '{}' conclusion uses unbound variable(s) {} and never produces a fact",
                    rule.name,
                    unbound.join(", ")
                ));
            }
        }
        warnings
    }
}
