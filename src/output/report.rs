//! Scan report structures

use crate::api::response::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// The rendered unit of a completed scan: the decoded analysis plus
/// submission metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub analysis: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Endpoint the submission was sent to
    pub endpoint: String,

    /// Active source for the job description field
    pub job_source: String,

    /// Active source for the resume field
    pub resume_source: String,

    /// Total keywords returned by the service
    pub keyword_count: usize,

    /// Keywords flagged as present in the resume
    pub keywords_present: usize,

    /// Wall-clock time of extraction + request + decode
    pub processing_time_ms: u64,

    /// Report generation time
    pub generated_at: SystemTime,

    /// Client version that produced the report
    pub client_version: String,
}

impl ScanReport {
    pub fn new(
        analysis: AnalysisResult,
        endpoint: String,
        job_source: String,
        resume_source: String,
        processing_time_ms: u64,
    ) -> Self {
        let keyword_count = analysis.keywords.len();
        let keywords_present = analysis.keywords.iter().filter(|k| k.present).count();

        Self {
            analysis,
            metadata: ReportMetadata {
                endpoint,
                job_source,
                resume_source,
                keyword_count,
                keywords_present,
                processing_time_ms,
                generated_at: SystemTime::now(),
                client_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Fraction of keywords present in the resume, in `[0, 1]`.
    pub fn presence_ratio(&self) -> f32 {
        if self.metadata.keyword_count == 0 {
            0.0
        } else {
            self.metadata.keywords_present as f32 / self.metadata.keyword_count as f32
        }
    }
}
