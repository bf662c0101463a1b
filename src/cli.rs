//! CLI interface for the resume scan client

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-scan")]
#[command(about = "Submit a job description and resume to a remote analysis service")]
#[command(
    long_about = "Send a job description and a resume (pasted text or a PDF/text/markdown file) to a remote analysis endpoint and render the returned keyword coverage and summary"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a job description and resume for analysis
    Scan {
        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Job description as inline text (ignored when --job is given)
        #[arg(long)]
        job_text: Option<String>,

        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Resume as inline text (ignored when --resume is given)
        #[arg(long)]
        resume_text: Option<String>,

        /// Output format: console, json, markdown, html (default from config)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file instead of stdout
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Override the configured analysis endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Include submission details in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "api.endpoint")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    format.parse()
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
