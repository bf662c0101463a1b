//! HTTP client for the analysis service

use crate::api::response::{self, AnalysisResult};
use crate::error::{Result, ResumeScanError};
use log::{debug, info};
use serde::Serialize;
use std::time::Duration;

/// The submission payload: both fields already resolved to plain text.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub job_description: String,
    pub resume: String,
}

pub struct AnalysisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ResumeScanError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit both fields and decode the analysis from the response.
    ///
    /// One request per call, no retries. Transport failures and non-2xx
    /// statuses surface as [`ResumeScanError::Network`]; undecodable bodies
    /// as [`ResumeScanError::ResponseParse`].
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        info!("Submitting analysis request to {}", self.endpoint);
        debug!(
            "Payload sizes: job description {} chars, resume {} chars",
            request.job_description.len(),
            request.resume.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ResumeScanError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ResumeScanError::Network(format!(
                "Network response was not ok: status {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResumeScanError::Network(format!("Failed to read response body: {}", e)))?;

        response::decode_analysis(&body)
    }
}

/// Keep error messages readable when the service returns an HTML error page.
fn truncate_body(body: &str) -> String {
    const MAX_LEN: usize = 200;
    if body.len() <= MAX_LEN {
        body.to_string()
    } else {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < MAX_LEN)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_snake_case_keys() {
        let request = AnalysisRequest {
            job_description: "Rust engineer".to_string(),
            resume: "Ten years of Rust".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["job_description"], "Rust engineer");
        assert_eq!(json["resume"], "Ten years of Rust");
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");

        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.len() < 250);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_client_rejects_nothing_at_build_time() {
        // Endpoint validity is only known at request time; building must work
        // for any string so `--endpoint` overrides are cheap.
        let client = AnalysisClient::new("https://example.invalid/process".to_string(), 5);
        assert!(client.is_ok());
    }
}
