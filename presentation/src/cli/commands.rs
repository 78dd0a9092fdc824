//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for ensemble-debates
#[derive(Parser, Debug)]
#[command(name = "ensemble-debates")]
#[command(author, version, about = "Ensemble vs single-model LLM debates on AI alignment topics")]
#[command(long_about = r#"
Runs structured debates between locally served models and compares
single-model baselines against role-specialised ensembles.

Each debate has a proponent and an opponent exchanging arguments for a
fixed number of rounds, then a judge naming the winner. Batches are saved
after every model or ensemble, so an interrupted run can be resumed.

Configuration files are loaded from (in priority order):
1. DEBATES_* environment variables
2. --config <path>     Explicit config file
3. ./debates.toml      Project-level config
4. ~/.config/ensemble-debates/config.toml   Global config

Example:
  ensemble-debates quick
  ensemble-debates run --scenarios 5 --rounds 2 --category safety
  ensemble-debates resume results/experiment_results_20250101_120000_incremental.json
  ensemble-debates evaluate results/small_experiment_results.json --sample 10
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Ollama server URL (overrides config)
    #[arg(long, value_name = "URL", global = true)]
    pub ollama_url: Option<String>,

    /// Directory for batch, evaluation and log files (overrides config)
    #[arg(long, value_name = "DIR", global = true)]
    pub results_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 2 scenarios, 1 round, no evaluation
    Quick,

    /// 5 scenarios, 2 rounds, then evaluate
    Small(EvaluateFlag),

    /// 15 scenarios, 2 rounds, then evaluate
    Full(EvaluateFlag),

    /// Custom batch
    Run(RunArgs),

    /// Continue an interrupted batch from its incremental file
    Resume {
        /// Incremental experiment file
        file: PathBuf,

        #[command(flatten)]
        evaluate: EvaluateFlag,
    },

    /// Score the debates of a finished batch
    Evaluate(EvaluateArgs),

    /// Show completed and remaining units of a batch file
    Status {
        file: PathBuf,
    },

    /// One single-model and one ensemble debate to check the setup
    Smoke,

    /// List the built-in scenarios
    Scenarios {
        /// Only this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Check which configured models are installed on the server
    Models,

    /// Show configuration file locations and the effective configuration
    Config,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct EvaluateFlag {
    /// Skip the evaluation step after the batch
    #[arg(long)]
    pub no_evaluate: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of scenarios sampled from the catalog (all when omitted)
    #[arg(long, value_name = "N")]
    pub scenarios: Option<usize>,

    /// Rounds per debate (defaults to `experiment.rounds`)
    #[arg(long, value_name = "R")]
    pub rounds: Option<u32>,

    /// Only sample scenarios of this category
    #[arg(long)]
    pub category: Option<String>,

    /// Seed for scenario sampling
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub evaluate: EvaluateFlag,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Experiment results file
    pub file: PathBuf,

    /// Model issuing the scoring calls (overrides config)
    #[arg(long, value_name = "MODEL")]
    pub evaluator_model: Option<String>,

    /// Evaluate at most N debates per group
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,
}
