//! Experiment orchestration: repeated scoring trials over a sample set.
//!
//! The extraction stage is stochastic, so an experiment re-scores the same
//! dataset across several trials and aggregates per-trial means. All wiring
//! is explicit: one [`ExperimentConfig`] value carries the input paths and
//! trial parameters into the runner, which calls the typed stages directly.
//! Samples within a trial are independent read-only computations and are
//! scored in parallel.

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dataset::{self, Sample};
use crate::error::{ExperimentError, ExperimentResult, LogiResult};
use crate::logic::metrics::logical_metrics;
use crate::rules::RuleSet;
use crate::schema::PredicateSchema;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for one experiment, usually loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// JSON rule set file.
    pub rules_path: PathBuf,
    /// JSON Lines sample file.
    pub facts_path: PathBuf,
    /// Optional predicate schema, described in the log at load time.
    #[serde(default)]
    pub schema_path: Option<PathBuf>,
    /// Where to write per-trial and summary reports. No files when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Number of scoring trials (default 1).
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Predicate allow-list for the metric; all closure facts count when unset.
    #[serde(default)]
    pub relevant_predicates: Option<Vec<String>>,
    /// Score a random subsample of this size per trial instead of every sample.
    #[serde(default)]
    pub sample_limit: Option<usize>,
    /// Seed for the per-trial subsample draw.
    #[serde(default)]
    pub seed: u64,
}

fn default_trials() -> usize {
    1
}

impl ExperimentConfig {
    /// Load a config from a TOML file.
    pub fn from_toml_path(path: &Path) -> ExperimentResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| ExperimentError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&data).map_err(|e| ExperimentError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Scores for one sample within a trial.
#[derive(Debug, Clone, Serialize)]
pub struct SampleScore {
    pub sample_id: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    /// Facts the closure added beyond the chunk facts.
    pub derived_facts: usize,
}

/// One trial: every selected sample scored, plus mean scores.
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    pub trial: usize,
    pub samples: Vec<SampleScore>,
    pub mean_precision: f64,
    pub mean_recall: f64,
    pub mean_f1: f64,
}

/// The whole experiment.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub rules_source: String,
    pub total_samples: usize,
    pub trials: Vec<TrialReport>,
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Loads the inputs once and runs the configured trials.
pub struct ExperimentRunner {
    config: ExperimentConfig,
    rules: RuleSet,
    samples: Vec<Sample>,
}

impl ExperimentRunner {
    /// Load rules and samples per the config.
    pub fn from_config(config: ExperimentConfig) -> LogiResult<Self> {
        let rules = RuleSet::from_path(&config.rules_path)?;
        let samples = dataset::load_samples(&config.facts_path)?;
        if let Some(path) = &config.schema_path {
            let schema = PredicateSchema::from_path(path)?;
            tracing::info!(predicates = schema.predicates.len(), "schema loaded");
        }
        tracing::info!(
            rules = rules.len(),
            samples = samples.len(),
            trials = config.trials,
            "experiment loaded"
        );
        Ok(Self {
            config,
            rules,
            samples,
        })
    }

    /// Run every trial, writing reports if an output directory is set.
    pub fn run(&self) -> LogiResult<ExperimentReport> {
        let mut trials = Vec::with_capacity(self.config.trials);
        for trial in 1..=self.config.trials {
            let report = self.run_trial(trial);
            tracing::info!(
                trial,
                samples = report.samples.len(),
                mean_f1 = report.mean_f1,
                "trial complete"
            );
            if let Some(dir) = &self.config.output_dir {
                write_json(&dir.join(format!("trial_{trial}.json")), &report)?;
            }
            trials.push(report);
        }

        let report = ExperimentReport {
            rules_source: self.rules.source.clone(),
            total_samples: self.samples.len(),
            trials,
        };
        if let Some(dir) = &self.config.output_dir {
            write_json(&dir.join("summary.json"), &report)?;
        }
        Ok(report)
    }

    fn run_trial(&self, trial: usize) -> TrialReport {
        let selected = self.select_samples(trial);
        let samples: Vec<SampleScore> = selected
            .par_iter()
            .map(|sample| self.score_sample(sample))
            .collect();

        TrialReport {
            trial,
            mean_precision: mean(samples.iter().map(|s| s.precision)),
            mean_recall: mean(samples.iter().map(|s| s.recall)),
            mean_f1: mean(samples.iter().map(|s| s.f1)),
            samples,
        }
    }

    /// The samples scored in this trial: all of them, or a seeded random
    /// subsample when `sample_limit` is set. Each trial draws its own.
    fn select_samples(&self, trial: usize) -> Vec<&Sample> {
        match self.config.sample_limit {
            Some(limit) if limit < self.samples.len() => {
                let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(trial as u64));
                let mut indices: Vec<usize> =
                    rand::seq::index::sample(&mut rng, self.samples.len(), limit).into_vec();
                indices.sort_unstable();
                indices.into_iter().map(|i| &self.samples[i]).collect()
            }
            _ => self.samples.iter().collect(),
        }
    }

    fn score_sample(&self, sample: &Sample) -> SampleScore {
        let chunk = sample.chunk_set();
        let report = logical_metrics(
            &chunk,
            &sample.explanation_set(),
            &self.rules,
            self.config.relevant_predicates.as_deref(),
        );
        SampleScore {
            sample_id: sample.sample_id.clone(),
            precision: report.precision,
            recall: report.recall,
            f1: report.f1,
            true_positives: report.true_positives.len(),
            false_positives: report.false_positives.len(),
            false_negatives: report.false_negatives.len(),
            derived_facts: report.closure.len() - chunk.len(),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> ExperimentResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ExperimentError::Output {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| ExperimentError::Output {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(|e| ExperimentError::Output {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
