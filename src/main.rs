//! resume-scan: CLI client for a remote resume and job description analysis service

mod api;
mod cli;
mod config;
mod error;
mod input;
mod output;

use api::client::{AnalysisClient, AnalysisRequest};
use api::response::AnalysisResult;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeScanError};
use indicatif::ProgressBar;
use input::file_detector::SUPPORTED_EXTENSIONS;
use input::manager::{FieldInput, InputManager};
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::ScanReport;
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Scan {
            job,
            job_text,
            resume,
            resume_text,
            output,
            save,
            endpoint,
            detailed,
        } => {
            // Validate input files
            if let Some(path) = &job {
                cli::validate_file_extension(path, SUPPORTED_EXTENSIONS).map_err(|e| {
                    ResumeScanError::InvalidInput(format!("Job description file: {}", e))
                })?;
            }
            if let Some(path) = &resume {
                cli::validate_file_extension(path, SUPPORTED_EXTENSIONS)
                    .map_err(|e| ResumeScanError::InvalidInput(format!("Resume file: {}", e)))?;
            }

            // Parse output format, falling back to the configured default
            let output_format = match &output {
                Some(format) => {
                    cli::parse_output_format(format).map_err(ResumeScanError::InvalidInput)?
                }
                None => config.output.format.clone(),
            };

            let endpoint = endpoint.unwrap_or_else(|| config.api.endpoint.clone());

            let job_input = FieldInput::new(job_text, job);
            let resume_input = FieldInput::new(resume_text, resume);

            // Loading indicator for the extraction + request duration.
            // Cleared on every outcome, including extraction failure.
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Analyzing...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let started = Instant::now();
            let result =
                run_scan(&job_input, &resume_input, &endpoint, config.api.timeout_secs).await;
            spinner.finish_and_clear();

            let analysis = result?;

            let report = ScanReport::new(
                analysis,
                endpoint,
                job_input.describe(),
                resume_input.describe(),
                started.elapsed().as_millis() as u64,
            );

            // Console colors are dropped when writing to a file
            let use_colors = config.output.color_output && save.is_none();
            let generator =
                ReportGenerator::new(use_colors, detailed, config.output.include_styles);
            let formatted = generator.format(&report, &output_format)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, formatted)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", formatted),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("API endpoint: {}", config.api.endpoint);
                println!("Request timeout: {}s", config.api.timeout_secs);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Color output: {}", config.output.color_output);
                println!("  Include HTML styles: {}", config.output.include_styles);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set_value(&key, &value)?;
                config.save()?;
                println!("✅ Set {}: {}", key, value);
            }
        },
    }

    Ok(())
}

/// Resolve both fields and submit them for analysis.
///
/// One invocation issues exactly one request; there is no retry and no
/// second submission racing this one.
async fn run_scan(
    job: &FieldInput,
    resume: &FieldInput,
    endpoint: &str,
    timeout_secs: u64,
) -> Result<AnalysisResult> {
    let mut input_manager = InputManager::new();

    let job_description = job.resolve("job description", &mut input_manager).await?;
    let resume_text = resume.resolve("resume", &mut input_manager).await?;

    info!(
        "Resolved inputs: job description {} chars, resume {} chars",
        job_description.len(),
        resume_text.len()
    );

    let client = AnalysisClient::new(endpoint.to_string(), timeout_secs)?;
    client
        .analyze(&AnalysisRequest {
            job_description,
            resume: resume_text,
        })
        .await
}
