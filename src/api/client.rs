//! HTTP client for the creator platform API
//!
//! Lookups are plain JSON GETs wrapped in `{ "data": ... }`; uploads are
//! multipart POSTs with a single `file` part; submissions are JSON POSTs.

use super::traits::CreatorApi;
use super::types::{
    AiAppSubmission, DataEnvelope, SubmitResponse, UploadResponse, WorkflowSubmission,
};
use crate::state::{Category, Country, FileKind, SelectedFile, Tag};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Failures talking to the creator API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed with status {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Client for the creator platform's HTTP API
#[derive(Debug, Clone)]
pub struct HttpCreatorApi {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpCreatorApi {
    /// Create a new API client
    pub fn new(base_url: &str, auth_token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn a non-2xx response into an [`ApiError::Status`]
    async fn check_status(path: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            path: path.to_string(),
            status: status.as_u16(),
            body,
        }
        .into())
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!(path, "GET");
        let response = self
            .authorized(self.client.get(self.url(path)).query(query))
            .send()
            .await
            .with_context(|| format!("Failed to reach {path}"))?;
        let response = Self::check_status(path, response).await?;
        let envelope: DataEnvelope<T> = response
            .json()
            .await
            .with_context(|| format!("Invalid response from {path}"))?;
        Ok(envelope.data)
    }

    async fn post_submission<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<SubmitResponse> {
        tracing::debug!(path, "POST submission");
        let response = self
            .authorized(self.client.post(self.url(path)).json(payload))
            .send()
            .await
            .with_context(|| format!("Failed to reach {path}"))?;
        let response = Self::check_status(path, response).await?;

        let body = response.text().await?;
        let parsed = if body.trim().is_empty() {
            SubmitResponse::default()
        } else {
            match serde_json::from_str::<SubmitResponse>(&body) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::warn!(
                        path,
                        error = %err,
                        "submit response is not JSON, accepting on status"
                    );
                    SubmitResponse::default()
                }
            }
        };

        if !parsed.success {
            let message = parsed
                .message
                .unwrap_or_else(|| "the server did not accept the submission".to_string());
            return Err(ApiError::Rejected(message).into());
        }
        Ok(parsed)
    }
}

/// Endpoint path for each upload slot
pub fn upload_path(kind: FileKind) -> &'static str {
    match kind {
        FileKind::CoverImage => "/api/upload/cover-image",
        FileKind::PreviewVideo => "/api/upload/preview-video",
        FileKind::MainFile => "/api/upload/workflow-file",
    }
}

/// Best-effort MIME type from the file extension
pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "json" => "application/json",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl CreatorApi for HttpCreatorApi {
    async fn list_countries(&self) -> Result<Vec<Country>> {
        self.get_data("/api/countries", &[]).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get_data("/api/categories", &[]).await
    }

    async fn list_tags(&self, category_id: i64) -> Result<Vec<Tag>> {
        self.get_data("/api/tags", &[("category_id", category_id.to_string())])
            .await
    }

    async fn upload_file(&self, kind: FileKind, file: &SelectedFile) -> Result<String> {
        let path = upload_path(kind);
        let bytes = tokio::fs::read(&file.path)
            .await
            .with_context(|| format!("Failed to read {}", file.path.display()))?;
        tracing::info!(path, file = %file.file_name, size = bytes.len(), "uploading file");

        let part = multipart::Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(mime_for(&file.path))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .authorized(self.client.post(self.url(path)).multipart(form))
            .send()
            .await
            .with_context(|| format!("Failed to reach {path}"))?;
        let response = Self::check_status(path, response).await?;
        let uploaded: UploadResponse = response
            .json()
            .await
            .with_context(|| format!("Upload response from {path} has no url"))?;
        Ok(uploaded.into_url())
    }

    async fn submit_workflow(&self, payload: &WorkflowSubmission) -> Result<SubmitResponse> {
        self.post_submission("/api/workflows", payload).await
    }

    async fn submit_ai_app(&self, payload: &AiAppSubmission) -> Result<SubmitResponse> {
        self.post_submission("/api/ai-apps", payload).await
    }
}
