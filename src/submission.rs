//! Submission orchestration
//!
//! Re-validates the whole form, uploads files one after another, assembles
//! the payload for the content type and submits it. Any failure aborts the
//! whole run; nothing is retried.

use crate::api::{
    AiAppSubmission, CreatorApi, SubmissionCommon, SubmitResponse, WorkflowSubmission,
};
use crate::state::validation::{MSG_CATEGORY, MSG_RUNTIME};
use crate::state::{validate_all, ContentType, FileKind, UploadForm};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Route the creator lands on after a successful submission
pub const CREATOR_ROUTE: &str = "/creator";

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{}", .0.join("\n"))]
    Invalid(Vec<String>),
    #[error("Failed to upload {}: {source:#}", .kind.label())]
    Upload {
        kind: FileKind,
        #[source]
        source: anyhow::Error,
    },
    #[error("Failed to submit: {0:#}")]
    Submit(#[source] anyhow::Error),
}

/// Progress reported by a running submission
#[derive(Debug)]
pub enum SubmissionEvent {
    UploadStarted(FileKind),
    Uploaded { kind: FileKind, url: String },
    UploadFailed { kind: FileKind, error: String },
    Finished(Result<SubmissionReceipt, SubmissionError>),
}

/// What the server acknowledged
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub content_type: ContentType,
    pub id: Option<String>,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    fn from_response(content_type: ContentType, response: SubmitResponse) -> Self {
        let id = response.id.map(|id| match id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });
        Self {
            content_type,
            id,
            message: response.message,
            submitted_at: Utc::now(),
        }
    }
}

/// URLs returned by the upload endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedUrls {
    urls: HashMap<FileKind, String>,
}

impl UploadedUrls {
    pub fn insert(&mut self, kind: FileKind, url: String) {
        self.urls.insert(kind, url);
    }

    pub fn get(&self, kind: FileKind) -> Option<&str> {
        self.urls.get(&kind).map(String::as_str)
    }

    fn require(&self, kind: FileKind) -> Result<String, SubmissionError> {
        self.get(kind)
            .map(str::to_string)
            .ok_or_else(|| SubmissionError::Invalid(vec![format!("{} is missing", kind.label())]))
    }
}

/// Fields shared by both payloads
pub fn build_common(
    form: &UploadForm,
    urls: &UploadedUrls,
) -> Result<SubmissionCommon, SubmissionError> {
    let category = form
        .category_name()
        .ok_or_else(|| SubmissionError::Invalid(vec![MSG_CATEGORY.to_string()]))?;

    Ok(SubmissionCommon {
        title: form.title.trimmed().to_string(),
        description: form.description.trimmed().to_string(),
        country: form.country_name(),
        category_id: form.category_id(),
        category,
        tags: form.merged_tags(),
        price_type: form.price_type,
        price: form.effective_price(),
        cover_image_url: urls.require(FileKind::CoverImage)?,
        preview_video_url: urls.get(FileKind::PreviewVideo).map(str::to_string),
    })
}

pub fn build_workflow_payload(
    form: &UploadForm,
    urls: &UploadedUrls,
) -> Result<WorkflowSubmission, SubmissionError> {
    Ok(WorkflowSubmission {
        common: build_common(form, urls)?,
        workflow_file_url: urls.require(FileKind::MainFile)?,
    })
}

pub fn build_ai_app_payload(
    form: &UploadForm,
    urls: &UploadedUrls,
) -> Result<AiAppSubmission, SubmissionError> {
    let runtime_duration = form
        .runtime_duration
        .as_integer()
        .filter(|d| *d > 0)
        .ok_or_else(|| SubmissionError::Invalid(vec![MSG_RUNTIME.to_string()]))?;

    Ok(AiAppSubmission {
        common: build_common(form, urls)?,
        api_code: form.api_code.trimmed().to_string(),
        opening_message: Some(form.opening_message.trimmed().to_string())
            .filter(|m| !m.is_empty()),
        preset_questions: form.preset_questions.clone(),
        runtime_duration,
    })
}

/// Run a full submission against the API.
///
/// Events are best effort; a closed receiver does not stop the submission.
pub async fn submit_form<A: CreatorApi + ?Sized>(
    api: &A,
    form: &UploadForm,
    events: &UnboundedSender<SubmissionEvent>,
) -> Result<SubmissionReceipt, SubmissionError> {
    let errors = validate_all(form);
    if !errors.is_empty() {
        return Err(SubmissionError::Invalid(errors));
    }

    let mut urls = UploadedUrls::default();
    for kind in form.upload_order() {
        let Some(file) = form.slot(kind).file.as_ref() else {
            continue;
        };

        let _ = events.send(SubmissionEvent::UploadStarted(kind));
        match api.upload_file(kind, file).await {
            Ok(url) => {
                tracing::info!(kind = kind.label(), %url, "upload finished");
                let _ = events.send(SubmissionEvent::Uploaded {
                    kind,
                    url: url.clone(),
                });
                urls.insert(kind, url);
            }
            Err(source) => {
                tracing::error!(kind = kind.label(), error = %source, "upload failed");
                let _ = events.send(SubmissionEvent::UploadFailed {
                    kind,
                    error: source.to_string(),
                });
                return Err(SubmissionError::Upload { kind, source });
            }
        }
    }

    let response = match form.content_type {
        ContentType::Workflow => {
            let payload = build_workflow_payload(form, &urls)?;
            api.submit_workflow(&payload).await
        }
        ContentType::AiApp => {
            let payload = build_ai_app_payload(form, &urls)?;
            api.submit_ai_app(&payload).await
        }
    }
    .map_err(SubmissionError::Submit)?;

    let receipt = SubmissionReceipt::from_response(form.content_type, response);
    tracing::info!(
        content_type = %receipt.content_type,
        id = receipt.id.as_deref().unwrap_or("-"),
        "submission accepted"
    );
    Ok(receipt)
}

/// Run a submission on a background task. The final event is always
/// [`SubmissionEvent::Finished`].
pub fn spawn_submission(
    api: Arc<dyn CreatorApi>,
    form: UploadForm,
) -> UnboundedReceiver<SubmissionEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let result = submit_form(api.as_ref(), &form, &tx).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "submission failed");
        }
        let _ = tx.send(SubmissionEvent::Finished(result));
    });
    rx
}
