//! Decoding of analysis service responses.
//!
//! The service replies with a JSON envelope `{"result": ...}` whose `result`
//! value has drifted across deployments: a JSON object, that object serialized
//! into a string, or the string wrapped in a ```` ```json ```` fence. The
//! canonical contract is: strip the optional fence, then JSON-decode. Keeping
//! the fence handling in [`unwrap_payload`] means the upstream format can
//! change again without touching decoding or rendering.

use crate::error::{Result, ResumeScanError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One keyword from the job description, with a flag telling whether it
/// appears in the submitted resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    #[serde(alias = "Keyword")]
    pub keyword: String,
    #[serde(alias = "Present")]
    pub present: bool,
}

/// The decoded analysis: keyword presence list (order preserved from the
/// response) and a free-text summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(alias = "Keywords")]
    pub keywords: Vec<KeywordMatch>,
    #[serde(alias = "Summary")]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    result: Option<Value>,
}

static RE_OUTER_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```(?:json)?[ \t]*\n?(.*?)\n?```$").unwrap());

/// Strip an optional markdown fence (a leading fence tagged `json` and a
/// trailing fence, with surrounding whitespace) from a payload string.
/// Unfenced input passes through trimmed.
pub fn unwrap_payload(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(caps) = RE_OUTER_FENCE.captures(trimmed) {
        caps[1].trim().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Decode a raw response body into an [`AnalysisResult`].
pub fn decode_analysis(body: &str) -> Result<AnalysisResult> {
    let envelope: ResponseEnvelope = serde_json::from_str(body).map_err(|e| {
        ResumeScanError::ResponseParse(format!("response body is not valid JSON: {}", e))
    })?;

    let result = envelope.result.ok_or_else(|| {
        ResumeScanError::ResponseParse("response has no `result` field".to_string())
    })?;

    match result {
        Value::String(raw) => {
            let inner = unwrap_payload(&raw);
            serde_json::from_str(&inner).map_err(|e| {
                ResumeScanError::ResponseParse(format!(
                    "`result` is not valid JSON after fence stripping: {}",
                    e
                ))
            })
        }
        other => serde_json::from_value(other).map_err(|e| {
            ResumeScanError::ResponseParse(format!("`result` has an unexpected shape: {}", e))
        }),
    }
}
