//! Analysis service integration
//! Request submission and response decoding

pub mod client;
pub mod response;

pub use client::{AnalysisClient, AnalysisRequest};
pub use response::{AnalysisResult, KeywordMatch};
