//! Diagnostic error types for logiscore.
//!
//! Each I/O-facing subsystem defines its own error enum with miette
//! `#[diagnostic]` derives (error codes, help text), and the top-level
//! [`LogiError`] fans them in transparently. The reasoning kernel itself is
//! a pure function of its inputs and defines no errors: unification
//! mismatches and range-restriction violations are ordinary non-matches,
//! filtered silently.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for logiscore.
#[derive(Debug, Error, Diagnostic)]
pub enum LogiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Experiment(#[from] ExperimentError),
}

/// Result type for operations that can fail anywhere in the crate.
pub type LogiResult<T> = std::result::Result<T, LogiError>;

// ---------------------------------------------------------------------------
// Rule errors
// ---------------------------------------------------------------------------

/// Errors from loading rule sets.
#[derive(Debug, Error, Diagnostic)]
pub enum RuleError {
    #[error("cannot read rule file {path}: {message}")]
    #[diagnostic(
        code(logiscore::rules::io),
        help("Check that the rule file exists and is readable.")
    )]
    Io { path: String, message: String },

    #[error("cannot parse rule file {path}: {message}")]
    #[diagnostic(
        code(logiscore::rules::parse),
        help(
            "Rule files are JSON of shape {{\"rules\": [{{\"name\", \"premises\", \
             \"conclusion\"}}]}} where premises and conclusion are \
             {{\"predicate\", \"args\"}} patterns with variable-name args."
        )
    )]
    Parse { path: String, message: String },
}

/// Result type for rule loading.
pub type RuleResult<T> = std::result::Result<T, RuleError>;

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// Errors from loading predicate schemas.
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("cannot read schema file {path}: {message}")]
    #[diagnostic(
        code(logiscore::schema::io),
        help("Check that the schema file exists and is readable.")
    )]
    Io { path: String, message: String },

    #[error("cannot parse schema file {path}: {message}")]
    #[diagnostic(
        code(logiscore::schema::parse),
        help(
            "Schema files are JSON of shape {{\"predicates\": [{{\"name\", \"args\"}}]}} \
             with argument names describing each position."
        )
    )]
    Parse { path: String, message: String },
}

/// Result type for schema loading.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

// ---------------------------------------------------------------------------
// Data errors
// ---------------------------------------------------------------------------

/// Errors from loading fact collections and sample files.
#[derive(Debug, Error, Diagnostic)]
pub enum DataError {
    #[error("cannot read facts file {path}: {message}")]
    #[diagnostic(
        code(logiscore::data::io),
        help("Check that the facts file exists and is readable.")
    )]
    Io { path: String, message: String },

    #[error("cannot parse {path} line {line}: {message}")]
    #[diagnostic(
        code(logiscore::data::parse),
        help(
            "Sample files are JSON Lines; each line needs \"chunk_facts\" and \
             \"explanation_facts\" lists of {{\"predicate\", \"args\"}} records. \
             The kernel cannot repair a structurally invalid record."
        )
    )]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("cannot parse fact list {path}: {message}")]
    #[diagnostic(
        code(logiscore::data::fact_list),
        help("Fact list files are JSON arrays of {{\"predicate\", \"args\"}} records.")
    )]
    FactList { path: String, message: String },
}

/// Result type for dataset loading.
pub type DataResult<T> = std::result::Result<T, DataError>;

// ---------------------------------------------------------------------------
// Experiment errors
// ---------------------------------------------------------------------------

/// Errors from experiment configuration and report output.
#[derive(Debug, Error, Diagnostic)]
pub enum ExperimentError {
    #[error("cannot load experiment config {path}: {message}")]
    #[diagnostic(
        code(logiscore::experiment::config),
        help(
            "The config is TOML with rules_path and facts_path required; \
             trials, seed, sample_limit, relevant_predicates and output_dir \
             are optional."
        )
    )]
    Config { path: String, message: String },

    #[error("cannot write report {path}: {message}")]
    #[diagnostic(
        code(logiscore::experiment::output),
        help("Check that the output directory is writable.")
    )]
    Output { path: String, message: String },
}

/// Result type for experiment operations.
pub type ExperimentResult<T> = std::result::Result<T, ExperimentError>;
