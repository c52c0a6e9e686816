//! logiscore CLI: score explanations against extracted facts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use logiscore::dataset::load_fact_list;
use logiscore::experiment::{ExperimentConfig, ExperimentRunner};
use logiscore::logic::logical_metrics;
use logiscore::rules::RuleSet;
use logiscore::schema::PredicateSchema;

#[derive(Parser)]
#[command(
    name = "logiscore",
    version,
    about = "Logical support scoring for free-text explanations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one explanation against one chunk's facts.
    Score {
        /// JSON fact list extracted from the source chunk.
        #[arg(long)]
        chunk: PathBuf,

        /// JSON fact list extracted from the explanation.
        #[arg(long)]
        explanation: PathBuf,

        /// JSON rule set file. Uses the built-in rules when omitted.
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Comma-separated predicate allow-list for the metric.
        #[arg(long)]
        relevant: Option<String>,
    },

    /// Run a multi-trial experiment from a TOML config.
    Run {
        /// Experiment config file.
        #[arg(long)]
        config: PathBuf,
    },

    /// Inspect and lint rule files.
    Rules {
        #[command(subcommand)]
        action: RuleAction,
    },

    /// Inspect predicate schema files.
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },
}

#[derive(Subcommand)]
enum RuleAction {
    /// List every rule with its premises and conclusion.
    List {
        /// JSON rule set file.
        file: PathBuf,
    },
    /// Report rules that can never fire or never produce a fact.
    Check {
        /// JSON rule set file.
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SchemaAction {
    /// Print the predicates declared in a schema file.
    Show {
        /// JSON schema file.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            chunk,
            explanation,
            rules,
            relevant,
        } => {
            let chunk_facts = load_fact_list(&chunk)?;
            let explanation_facts = load_fact_list(&explanation)?;
            let rule_set = match rules {
                Some(path) => RuleSet::from_path(&path)?,
                None => RuleSet::builtin(),
            };
            let relevant: Option<Vec<String>> = relevant
                .map(|list| list.split(',').map(|p| p.trim().to_string()).collect());

            let report = logical_metrics(
                &chunk_facts,
                &explanation_facts,
                &rule_set,
                relevant.as_deref(),
            );
            println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        }

        Commands::Run { config } => {
            let config = ExperimentConfig::from_toml_path(&config)?;
            let runner = ExperimentRunner::from_config(config)?;
            let report = runner.run()?;
            println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        }

        Commands::Rules { action } => match action {
            RuleAction::List { file } => {
                let set = RuleSet::from_path(&file)?;
                println!("Rules ({}):", set.len());
                for rule in &set.rules {
                    let premises: Vec<String> =
                        rule.premises.iter().map(|p| p.to_string()).collect();
                    println!("  {}: {} => {}", rule.name, premises.join(", "), rule.conclusion);
                    if !rule.description.is_empty() {
                        println!("      {}", rule.description);
                    }
                }
            }
            RuleAction::Check { file } => {
                let set = RuleSet::from_path(&file)?;
                let warnings = set.warnings();
                if warnings.is_empty() {
                    println!("{} rules, no findings", set.len());
                } else {
                    for warning in &warnings {
                        println!("warning: {warning}");
                    }
                }
            }
        },

        Commands::Schema { action } => match action {
            SchemaAction::Show { file } => {
                let schema = PredicateSchema::from_path(&file)?;
                print!("{}", schema.describe());
            }
        },
    }

    Ok(())
}
