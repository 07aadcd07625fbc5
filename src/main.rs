//! ATS analyzer: resume compatibility scoring from the command line

use ats_analyzer::cli::{self, Cli, Commands, ConfigAction};
use ats_analyzer::config::{Config, OutputFormat};
use ats_analyzer::error::{AtsError, Result};
use ats_analyzer::input::InputManager;
use ats_analyzer::output::{AnalysisReport, JobMatchReport, ReportGenerator, ReportMetadata};
use ats_analyzer::processing::analyzer::AtsEngine;
use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["json", "toml"];
const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "pdf"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            validate(&resume, RESUME_EXTENSIONS, "Resume file")?;
            if let Some(job) = &job {
                validate(job, JOB_EXTENSIONS, "Job description file")?;
            }
            let format = resolve_format(output.as_deref(), &config)?;
            config.output.detailed |= detailed;

            let engine = AtsEngine::with_config(&config)?;
            let mut input_manager = InputManager::new();
            let record = input_manager.load_resume(&resume).await?;

            info!("Analyzing resume: {}", resume.display());
            let analysis = match &job {
                Some(job_path) => {
                    let job_text = input_manager.load_job_text(job_path).await?;
                    engine.analyze_with_job_description(&record, &job_text)
                }
                None => engine.analyze(&record),
            };

            let report = AnalysisReport {
                metadata: ReportMetadata::new(
                    resume.display().to_string(),
                    job.as_ref().map(|p| p.display().to_string()),
                ),
                analysis,
            };
            let rendered = ReportGenerator::new(&config.output).render_analysis(&report, format)?;
            emit(&rendered, save.as_deref()).await
        }

        Commands::Match {
            resume,
            job,
            output,
            save,
        } => {
            validate(&resume, RESUME_EXTENSIONS, "Resume file")?;
            validate(&job, JOB_EXTENSIONS, "Job description file")?;
            let format = resolve_format(output.as_deref(), &config)?;

            let engine = AtsEngine::with_config(&config)?;
            let mut input_manager = InputManager::new();
            let record = input_manager.load_resume(&resume).await?;
            let job_text = input_manager.load_job_text(&job).await?;

            info!("Matching {} against {}", resume.display(), job.display());
            let report = JobMatchReport {
                metadata: ReportMetadata::new(resume.display().to_string(), Some(job.display().to_string())),
                job_match: engine.match_job_description(&record, &job_text),
            };
            let rendered = ReportGenerator::new(&config.output).render_job_match(&report, format)?;
            emit(&rendered, save.as_deref()).await
        }

        Commands::Optimize { resume, save } => {
            validate(&resume, RESUME_EXTENSIONS, "Resume file")?;

            let engine = AtsEngine::with_config(&config)?;
            let record = InputManager::new().load_resume(&resume).await?;

            info!("Generating ATS-optimized version of {}", resume.display());
            let optimized = engine.generate_optimized_version(&record);
            let json = serde_json::to_string_pretty(&optimized)?;
            emit(&json, save.as_deref()).await
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        AtsError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }
                Some(ConfigAction::Reset) => {
                    let path = config_path.unwrap_or_else(Config::config_path);
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }
                Some(ConfigAction::Path) => {
                    let path = config_path.unwrap_or_else(Config::config_path);
                    println!("{}", path.display());
                }
            }
            Ok(())
        }
    }
}

fn validate(path: &Path, allowed: &[&str], label: &str) -> Result<()> {
    cli::validate_file_extension(path, allowed)
        .map_err(|e| AtsError::InvalidInput(format!("{}: {}", label, e)))
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(AtsError::InvalidInput),
        None => Ok(config.output.format),
    }
}

async fn emit(content: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            tokio::fs::write(path, content).await?;
            info!("Output written to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
