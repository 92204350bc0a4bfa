//! Wire types for the creator API

use crate::state::PriceType;
use serde::{Deserialize, Serialize};

/// `{ "data": ... }` wrapper used by the lookup endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    pub url: String,
}

/// Upload endpoints answer with the URL either at the top level or under `data`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Flat(UploadedFile),
    Wrapped(DataEnvelope<UploadedFile>),
}

impl UploadResponse {
    pub fn into_url(self) -> String {
        match self {
            Self::Flat(file) => file.url,
            Self::Wrapped(envelope) => envelope.data.url,
        }
    }
}

/// Fields shared by both submission payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionCommon {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub category: String,
    pub tags: Vec<String>,
    pub price_type: PriceType,
    pub price: f64,
    pub cover_image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowSubmission {
    #[serde(flatten)]
    pub common: SubmissionCommon,
    pub workflow_file_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiAppSubmission {
    #[serde(flatten)]
    pub common: SubmissionCommon,
    pub api_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_message: Option<String>,
    pub preset_questions: Vec<String>,
    pub runtime_duration: u32,
}

fn default_success() -> bool {
    true
}

/// Body returned by the submit endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl Default for SubmitResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: None,
            id: None,
        }
    }
}
