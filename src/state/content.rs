//! Content classification shared by the form, the validator and the API payloads

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content being uploaded. Fixed for the lifetime of a wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Workflow,
    AiApp,
}

impl ContentType {
    /// Number of wizard steps for this content type
    pub fn total_steps(self) -> u8 {
        match self {
            Self::Workflow => 4,
            Self::AiApp => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::AiApp => "ai-app",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workflow" => Ok(Self::Workflow),
            "ai-app" | "ai_app" | "aiapp" => Ok(Self::AiApp),
            other => Err(format!(
                "unknown content type '{other}' (expected 'workflow' or 'ai-app')"
            )),
        }
    }
}

/// Access cost classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    #[default]
    Free,
    MemberFree,
    Paid,
}

impl PriceType {
    pub const ALL: [PriceType; 3] = [Self::Free, Self::MemberFree, Self::Paid];

    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::MemberFree => "Free for members",
            Self::Paid => "Paid",
        }
    }
}

/// The three file slots of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    CoverImage,
    PreviewVideo,
    MainFile,
}

impl FileKind {
    /// Largest accepted file size in bytes
    pub fn max_bytes(self) -> u64 {
        match self {
            Self::CoverImage | Self::MainFile => 1024 * 1024,
            Self::PreviewVideo => 50 * 1024 * 1024,
        }
    }

    /// Human readable form of the size ceiling
    pub fn max_size_label(self) -> &'static str {
        match self {
            Self::CoverImage | Self::MainFile => "1 MB",
            Self::PreviewVideo => "50 MB",
        }
    }

    /// Accepted file extensions (lowercase, without the dot)
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::CoverImage => &["png", "jpg", "jpeg", "gif", "webp"],
            Self::PreviewVideo => &["mp4", "mov", "webm", "mkv"],
            Self::MainFile => &["json", "zip"],
        }
    }

    /// Stable identifier used for field names and logs
    pub fn as_key(self) -> &'static str {
        match self {
            Self::CoverImage => "cover_image",
            Self::PreviewVideo => "preview_video",
            Self::MainFile => "main_file",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CoverImage => "Cover image",
            Self::PreviewVideo => "Preview video",
            Self::MainFile => "Workflow file",
        }
    }
}
