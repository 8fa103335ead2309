//! CLI entrypoint for survey-navigator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use navigator_application::{
    ActivateSurveyUseCase, NavigateSurveyError, NavigateSurveyUseCase, NavigationLogger,
    NoNavigationLogger, SessionStore,
};
use navigator_domain::ResponseId;
use navigator_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, InMemorySessionStore, JsonFileSessionStore,
    JsonlNavigationLogger, LoadedSurvey, SessionStoreKind, SurveyFileLoader,
};
use navigator_presentation::{
    AnswerSource, Cli, Command, OutputConfig, OutputFormat, OutputFormatter, PromptAnswers,
    ScriptedAnswers, SurveyWalker, WalkError, WalkOutcome,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG applies without -v
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting survey-navigator");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    let output = OutputConfig {
        format: match config.output.format {
            FileOutputFormat::Text => OutputFormat::Text,
            FileOutputFormat::Json => OutputFormat::Json,
        },
        color: config.output.color,
    }
    .with_format_override(cli.format);
    output.apply_color();
    let formatter = output.formatter();

    // === Dependency Injection ===
    let logger = event_logger(&config);

    match cli.command {
        Command::ShowConfig => {
            for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
                println!("{}", line);
            }
            println!();
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }

        Command::Validate { file } => {
            let survey = load_survey(&file)?;
            let use_case = ActivateSurveyUseCase::new().with_logger(logger);
            let title = survey.title.as_deref();

            match use_case.execute(survey.id, &survey.graph) {
                Ok(report) => {
                    println!("{}", formatter.format_report(survey.id, title, &report));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    println!("{}", formatter.format_report(survey.id, title, e.report()));
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Command::Walk { file, answer } => {
            let survey = load_survey(&file)?;
            let store = open_store(&config).await?;
            let use_case = NavigateSurveyUseCase::new(store)
                .with_logger(logger)
                .with_params(config.navigation.to_params());
            let walker = SurveyWalker::new(&use_case, &survey.graph, formatter.as_ref());

            let mut source = answer_source(answer);
            let result = walker
                .start(survey.id, source.as_mut(), &mut std::io::stdout())
                .await;
            finish_walk(result, &survey, formatter.as_ref(), &config, &file)
        }

        Command::Resume {
            file,
            response_id,
            answer,
        } => {
            if config.sessions.store != SessionStoreKind::Json {
                bail!(
                    "resume needs a persistent session store; \
                     set sessions.store = \"json\" and sessions.directory"
                );
            }
            let survey = load_survey(&file)?;
            let store = open_store(&config).await?;
            let use_case = NavigateSurveyUseCase::new(store)
                .with_logger(logger)
                .with_params(config.navigation.to_params());
            let walker = SurveyWalker::new(&use_case, &survey.graph, formatter.as_ref());

            let mut source = answer_source(answer);
            let result = walker
                .resume(
                    ResponseId::new(response_id),
                    source.as_mut(),
                    &mut std::io::stdout(),
                )
                .await;
            finish_walk(result, &survey, formatter.as_ref(), &config, &file)
        }
    }
}

fn load_survey(path: &Path) -> Result<LoadedSurvey> {
    let survey = SurveyFileLoader::load(path)
        .with_context(|| format!("Failed to load survey {}", path.display()))?;
    info!(
        "Loaded {} with {} questions from {}",
        survey.id,
        survey.graph.len(),
        path.display()
    );
    Ok(survey)
}

fn event_logger(config: &FileConfig) -> Arc<dyn NavigationLogger> {
    match &config.logging.event_log {
        Some(path) => match JsonlNavigationLogger::new(path) {
            Some(logger) => {
                info!("Navigation events logged to {}", logger.path().display());
                Arc::new(logger)
            }
            None => {
                warn!("Continuing without navigation event log");
                Arc::new(NoNavigationLogger)
            }
        },
        None => Arc::new(NoNavigationLogger),
    }
}

async fn open_store(config: &FileConfig) -> Result<Arc<dyn SessionStore>> {
    match (config.sessions.store, &config.sessions.directory) {
        (SessionStoreKind::Json, Some(directory)) => {
            let store = JsonFileSessionStore::open(directory).await?;
            Ok(Arc::new(store))
        }
        (SessionStoreKind::Json, None) => {
            bail!("sessions.directory is required for the json store")
        }
        (SessionStoreKind::Memory, _) => Ok(Arc::new(InMemorySessionStore::new())),
    }
}

fn answer_source(answers: Vec<String>) -> Box<dyn AnswerSource> {
    if answers.is_empty() {
        // Prompts go to stderr so stdout stays clean for --format json
        Box::new(PromptAnswers::new(std::io::stdin().lock(), std::io::stderr()))
    } else {
        Box::new(ScriptedAnswers::new(answers))
    }
}

fn finish_walk(
    result: Result<WalkOutcome, WalkError>,
    survey: &LoadedSurvey,
    formatter: &dyn OutputFormatter,
    config: &FileConfig,
    file: &Path,
) -> Result<ExitCode> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(WalkError::Navigate(NavigateSurveyError::UnsafeGraph(report))) => {
            println!(
                "{}",
                formatter.format_report(survey.id, survey.title.as_deref(), &report)
            );
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if !outcome.is_finished() {
        match config.sessions.store {
            SessionStoreKind::Json => eprintln!(
                "Session paused. Continue with: survey-navigator resume {} {}",
                file.display(),
                outcome.response_id.get()
            ),
            SessionStoreKind::Memory => {
                eprintln!("Session paused; the memory store does not keep it after exit.")
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
