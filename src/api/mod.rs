//! Creator platform API: HTTP client, wire types and the mockable trait

mod client;
mod traits;
mod types;

pub use client::HttpCreatorApi;
pub use traits::CreatorApi;
pub use types::{AiAppSubmission, SubmissionCommon, SubmitResponse, WorkflowSubmission};

#[cfg(test)]
pub use traits::MockCreatorApi;
