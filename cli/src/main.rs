//! CLI entrypoint for ensemble-debates
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use debate_application::{
    ConversationLogger, EvaluateDebatesUseCase, ExperimentPreset, ExperimentStore, ModelGateway,
    NoConversationLogger, NoProgress, ProgressNotifier, ResultPaths, RunDebateUseCase,
    RunExperimentUseCase,
};
use debate_domain::{ExperimentBatch, ModelId, Scenario, ScenarioCatalog, analyze_results};
use debate_infrastructure::{
    ConfigLoader, FileConfig, JsonExperimentStore, JsonlConversationLogger, OllamaGateway,
};
use debate_presentation::{
    Cli, Command, ConsoleFormatter, EvaluateArgs, EvaluationReport, ProgressReporter, RunArgs,
    SimpleProgress,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    if let Some(url) = &cli.ollama_url {
        config.ollama.base_url = url.clone();
    }
    if let Some(dir) = &cli.results_dir {
        config.experiment.results_dir = dir.to_string_lossy().into_owned();
    }

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("{} configuration issue(s) found", issues.len());
    }

    let _guard = init_logging(cli.verbose, &config)?;
    info!("Starting ensemble-debates");

    let app = App::new(&config, cli.quiet)?;

    match cli.command {
        Command::Quick => app.run_preset(ExperimentPreset::Quick, false).await,
        Command::Small(flag) => {
            app.run_preset(ExperimentPreset::Small, flag.no_evaluate)
                .await
        }
        Command::Full(flag) => {
            app.run_preset(ExperimentPreset::Full, flag.no_evaluate)
                .await
        }
        Command::Run(args) => app.run_custom(args).await,
        Command::Resume { file, evaluate } => app.resume(&file, evaluate.no_evaluate).await,
        Command::Evaluate(args) => app.evaluate(args).await,
        Command::Status { file } => app.status(&file),
        Command::Smoke => app.smoke().await,
        Command::Scenarios { category } => list_scenarios(category.as_deref()),
        Command::Models => app.models().await,
        Command::Config => show_config(cli.config.as_deref(), &config),
    }
}

/// Console layer on stderr plus, when enabled, a non-blocking file layer in
/// the results directory. The returned guard flushes the file on drop.
fn init_logging(verbose: u8, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let (file_layer, guard) = if config.logging.log_file {
        let dir = config.result_paths().results_dir().to_path_buf();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create results directory {}", dir.display()))?;
        let appender =
            tracing_appender::rolling::never(&dir, ResultPaths::log_file_name(Local::now()));
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(guard)
}

/// Wired adapters shared by every command
struct App {
    config: FileConfig,
    paths: ResultPaths,
    gateway: Arc<OllamaGateway>,
    store: Arc<JsonExperimentStore>,
    logger: Arc<dyn ConversationLogger>,
    progress: Box<dyn ProgressNotifier>,
}

impl App {
    fn new(config: &FileConfig, quiet: bool) -> Result<Self> {
        let paths = config.result_paths();
        let gateway = Arc::new(
            OllamaGateway::new(&config.ollama.base_url, config.generation_options())
                .context("Failed to create Ollama client")?,
        );

        let logger: Arc<dyn ConversationLogger> = if config.logging.transcript {
            match JsonlConversationLogger::new(paths.transcript(Local::now())) {
                Some(logger) => {
                    info!("Recording model calls to {}", logger.path().display());
                    Arc::new(logger)
                }
                None => Arc::new(NoConversationLogger),
            }
        } else {
            Arc::new(NoConversationLogger)
        };

        let progress: Box<dyn ProgressNotifier> = if quiet {
            Box::new(NoProgress)
        } else if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

        Ok(Self {
            config: config.clone(),
            paths,
            gateway,
            store: Arc::new(JsonExperimentStore),
            logger,
            progress,
        })
    }

    fn debates(&self) -> RunDebateUseCase<OllamaGateway> {
        RunDebateUseCase::new(Arc::clone(&self.gateway))
            .with_conversation_logger(Arc::clone(&self.logger))
    }

    fn experiments(&self) -> RunExperimentUseCase<OllamaGateway> {
        RunExperimentUseCase::new(
            self.debates(),
            self.store.clone(),
            self.config.experiment.to_orchestrator_config(),
        )
    }

    async fn run_custom(&self, args: RunArgs) -> Result<()> {
        let catalog = match &args.category {
            Some(category) => ScenarioCatalog::from_scenarios(
                ScenarioCatalog::builtin().by_category(category)?,
            ),
            None => ScenarioCatalog::builtin(),
        };
        let preset = ExperimentPreset::Custom {
            scenarios: args.scenarios.unwrap_or(catalog.len()),
            rounds: args.rounds.unwrap_or(self.config.experiment.rounds),
        };
        let scenarios = match args.seed {
            Some(seed) => catalog.sample(preset.scenarios(), &mut StdRng::seed_from_u64(seed)),
            None => catalog.sample(preset.scenarios(), &mut rand::thread_rng()),
        };
        self.run_batch(preset, scenarios, args.evaluate.no_evaluate)
            .await
    }

    async fn run_preset(&self, preset: ExperimentPreset, no_evaluate: bool) -> Result<()> {
        let scenarios =
            ScenarioCatalog::builtin().sample(preset.scenarios(), &mut rand::thread_rng());
        self.run_batch(preset, scenarios, no_evaluate).await
    }

    async fn run_batch(
        &self,
        preset: ExperimentPreset,
        scenarios: Vec<Scenario>,
        no_evaluate: bool,
    ) -> Result<()> {
        let incremental = self.paths.incremental(Local::now());
        info!(
            "{}: {} scenarios, {} rounds",
            preset.label(),
            scenarios.len(),
            preset.rounds()
        );

        let batch = self
            .experiments()
            .run_experiment_suite_with_progress(
                scenarios,
                preset.rounds(),
                &incremental,
                self.progress.as_ref(),
            )
            .await?;

        let output = self.paths.final_results(preset);
        self.finish(&format!("{} RESULTS", preset.label()), &batch, &output)?;

        if preset.evaluates_by_default() && !no_evaluate {
            self.evaluate_and_report(&output, None, None).await?;
        }
        Ok(())
    }

    async fn resume(&self, file: &Path, no_evaluate: bool) -> Result<()> {
        let batch = self
            .experiments()
            .resume_from_incremental_with_progress(file, self.progress.as_ref())
            .await
            .with_context(|| format!("Failed to resume from {}", file.display()))?;

        let output = self.paths.resumed(Local::now());
        self.finish("RESUMED EXPERIMENT RESULTS", &batch, &output)?;

        if !no_evaluate {
            self.evaluate_and_report(&output, None, None).await?;
        }
        Ok(())
    }

    /// Save the finished batch under its final name and print the summary.
    fn finish(&self, title: &str, batch: &ExperimentBatch, output: &Path) -> Result<()> {
        self.store
            .save_batch(batch, output)
            .with_context(|| format!("Failed to save results to {}", output.display()))?;
        println!(
            "{}",
            ConsoleFormatter::format_summary(title, &analyze_results(batch), output)
        );
        Ok(())
    }

    async fn evaluate(&self, args: EvaluateArgs) -> Result<()> {
        self.evaluate_and_report(&args.file, args.evaluator_model, args.sample)
            .await
    }

    async fn evaluate_and_report(
        &self,
        source: &Path,
        evaluator_model: Option<String>,
        sample: Option<usize>,
    ) -> Result<()> {
        let mut evaluator = self.config.evaluator_config();
        if let Some(model) = evaluator_model {
            evaluator = evaluator.with_evaluator_model(ModelId::new(model));
        }
        if sample.is_some() {
            evaluator = evaluator.with_sample(sample);
        }

        let num_scenarios = self
            .store
            .load_batch(source)
            .with_context(|| format!("Failed to load {}", source.display()))?
            .scenarios_tested
            .len();

        let use_case =
            EvaluateDebatesUseCase::new(Arc::clone(&self.gateway), self.store.clone(), evaluator)
                .with_conversation_logger(Arc::clone(&self.logger));
        let (document, output) = use_case
            .evaluate_file_with_progress(source, self.progress.as_ref())
            .await
            .with_context(|| format!("Failed to evaluate {}", source.display()))?;

        let report_path = ResultPaths::report_for(source);
        let report = EvaluationReport::render(&document, num_scenarios, Local::now());
        std::fs::write(&report_path, report)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;

        println!(
            "{}",
            ConsoleFormatter::format_evaluation(&document, &output, &report_path)
        );
        Ok(())
    }

    fn status(&self, file: &Path) -> Result<()> {
        let batch = self
            .store
            .load_batch(file)
            .with_context(|| format!("Failed to load {}", file.display()))?;
        let progress = self
            .config
            .experiment
            .to_orchestrator_config()
            .progress_of(&batch);
        println!("{}", ConsoleFormatter::format_status(file, &batch, &progress));
        Ok(())
    }

    /// One single-model and one ensemble debate over the first scenario.
    async fn smoke(&self) -> Result<()> {
        let orchestrator = self.config.experiment.to_orchestrator_config();
        let Some(model) = orchestrator.baseline_models.first() else {
            bail!("No baseline models configured");
        };
        let Some(ensemble) = orchestrator.ensembles.first() else {
            bail!("No ensemble configs configured");
        };
        let catalog = ScenarioCatalog::builtin();
        let Some(scenario) = catalog.all().first() else {
            bail!("Scenario catalog is empty");
        };

        let debates = self.debates();
        let single = debates
            .run_single_model_debate(model, &scenario.topic, 1)
            .await?;
        println!(
            "{}",
            ConsoleFormatter::format_debate(&format!("Single model: {}", model), &single)
        );

        let multi = debates
            .run_ensemble_debate(&ensemble.assignment, &scenario.topic, 1)
            .await?;
        println!(
            "{}",
            ConsoleFormatter::format_debate(&format!("Ensemble: {}", ensemble.name), &multi)
        );
        Ok(())
    }

    async fn models(&self) -> Result<()> {
        let mut configured = self
            .config
            .experiment
            .to_orchestrator_config()
            .referenced_models();
        let evaluator = self.config.evaluator_config().evaluator_model;
        if !configured.contains(&evaluator) {
            configured.push(evaluator);
        }

        let available = self.gateway.available_models().await.with_context(|| {
            format!("Failed to list models at {}", self.gateway.base_url())
        })?;
        println!("{}", ConsoleFormatter::format_models(&configured, &available));
        Ok(())
    }
}

fn list_scenarios(category: Option<&str>) -> Result<()> {
    let catalog = ScenarioCatalog::builtin();
    let scenarios = match category {
        Some(category) => catalog.by_category(category)?,
        None => catalog.all().to_vec(),
    };
    println!("{}", ConsoleFormatter::format_scenarios(&scenarios));
    Ok(())
}

fn show_config(explicit: Option<&Path>, config: &FileConfig) -> Result<()> {
    ConfigLoader::print_config_sources(explicit);
    let effective = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    println!("\nEffective configuration:\n\n{}", effective);
    Ok(())
}
