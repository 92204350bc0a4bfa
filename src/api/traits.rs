//! Trait abstraction for the creator API to enable mocking in tests

use super::types::{AiAppSubmission, SubmitResponse, WorkflowSubmission};
use crate::state::{Category, Country, FileKind, SelectedFile, Tag};
use anyhow::Result;
use async_trait::async_trait;

/// Operations the upload wizard needs from the creator platform
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatorApi: Send + Sync {
    /// List selectable countries
    async fn list_countries(&self) -> Result<Vec<Country>>;

    /// List selectable categories
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// List the tags of a category
    async fn list_tags(&self, category_id: i64) -> Result<Vec<Tag>>;

    /// Upload a file to the endpoint for its slot and return the stored URL
    async fn upload_file(&self, kind: FileKind, file: &SelectedFile) -> Result<String>;

    /// Submit a workflow
    async fn submit_workflow(&self, payload: &WorkflowSubmission) -> Result<SubmitResponse>;

    /// Submit an AI app
    async fn submit_ai_app(&self, payload: &AiAppSubmission) -> Result<SubmitResponse>;
}
