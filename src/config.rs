//! Configuration management for the resume scan client

use crate::error::{Result, ResumeScanError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Default analysis endpoint, carried over from the original deployment.
/// Expected to be overridden via `resume-scan config set api.endpoint <url>`.
pub const DEFAULT_ENDPOINT: &str = "https://your-api-gateway-endpoint.amazonaws.com/dev/process";

/// Default request timeout. The service runs a language model per request,
/// so responses routinely take tens of seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub include_styles: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Invalid output format: {}. Supported: console, json, markdown, html",
                s
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                include_styles: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeScanError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeScanError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-scan")
            .join("config.toml")
    }

    /// Set a single configuration value by dotted key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.endpoint" => {
                if !value.starts_with("https://") && !value.starts_with("http://") {
                    return Err(ResumeScanError::Configuration(format!(
                        "api.endpoint must be an http(s) URL, got: {}",
                        value
                    )));
                }
                self.api.endpoint = value.to_string();
            }
            "api.timeout_secs" | "api.timeout-secs" => {
                self.api.timeout_secs = value.parse().map_err(|_| {
                    ResumeScanError::Configuration(format!(
                        "api.timeout_secs must be a number of seconds, got: {}",
                        value
                    ))
                })?;
            }
            "output.format" => {
                self.output.format = value
                    .parse()
                    .map_err(ResumeScanError::Configuration)?;
            }
            "output.color_output" | "output.color-output" => {
                self.output.color_output = value.parse().map_err(|_| {
                    ResumeScanError::Configuration(format!(
                        "output.color_output must be true or false, got: {}",
                        value
                    ))
                })?;
            }
            "output.include_styles" | "output.include-styles" => {
                self.output.include_styles = value.parse().map_err(|_| {
                    ResumeScanError::Configuration(format!(
                        "output.include_styles must be true or false, got: {}",
                        value
                    ))
                })?;
            }
            _ => {
                return Err(ResumeScanError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )));
            }
        }
        Ok(())
    }
}
