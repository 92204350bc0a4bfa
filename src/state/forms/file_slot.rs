//! File slots and their upload sub-state

use crate::state::FileKind;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A file picked from disk, not yet uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl SelectedFile {
    /// Size formatted for display
    pub fn size_label(&self) -> String {
        format_size(self.size)
    }
}

/// Upload progress of a single slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadProgress {
    #[default]
    Idle,
    Uploading,
    Uploaded {
        url: String,
    },
    Failed {
        error: String,
    },
}

/// Why a file was not accepted into a slot
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileRejection {
    #[error("No file path entered")]
    EmptyPath,
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Not a regular file: {0}")]
    NotAFile(String),
    #[error("{kind} must be one of: {allowed}")]
    UnsupportedType { kind: &'static str, allowed: String },
    #[error("{kind} is {size}, the limit is {limit}")]
    TooLarge {
        kind: &'static str,
        size: String,
        limit: &'static str,
    },
}

/// One of the form's file inputs
#[derive(Debug, Clone)]
pub struct FileSlot {
    pub kind: FileKind,
    pub file: Option<SelectedFile>,
    pub progress: UploadProgress,
}

impl FileSlot {
    pub fn new(kind: FileKind) -> Self {
        Self {
            kind,
            file: None,
            progress: UploadProgress::Idle,
        }
    }

    pub fn is_present(&self) -> bool {
        self.file.is_some()
    }

    /// Check a candidate against this slot's type and size rules without
    /// touching the slot.
    pub fn check(&self, file: &SelectedFile) -> Result<(), FileRejection> {
        let allowed = self.kind.allowed_extensions();
        let extension = file
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        if !extension.is_some_and(|e| allowed.contains(&e.as_str())) {
            return Err(FileRejection::UnsupportedType {
                kind: self.kind.label(),
                allowed: allowed.join(", "),
            });
        }

        if file.size > self.kind.max_bytes() {
            return Err(FileRejection::TooLarge {
                kind: self.kind.label(),
                size: file.size_label(),
                limit: self.kind.max_size_label(),
            });
        }

        Ok(())
    }

    /// Accept a file into the slot. On rejection the slot is left unchanged.
    pub fn accept(&mut self, file: SelectedFile) -> Result<(), FileRejection> {
        self.check(&file)?;
        self.file = Some(file);
        self.progress = UploadProgress::Idle;
        Ok(())
    }

    /// Remove the selected file
    pub fn clear(&mut self) {
        self.file = None;
        self.progress = UploadProgress::Idle;
    }
}

/// Stat a path on disk and describe it as a selectable file
pub fn inspect_file(path: &str) -> Result<SelectedFile, FileRejection> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(FileRejection::EmptyPath);
    }

    let path = expand_home(trimmed);
    let metadata =
        fs::metadata(&path).map_err(|_| FileRejection::NotFound(path.display().to_string()))?;
    if !metadata.is_file() {
        return Err(FileRejection::NotAFile(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(SelectedFile {
        size: metadata.len(),
        file_name,
        path,
    })
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(dirs) = directories::BaseDirs::new() {
            return dirs.home_dir().join(rest);
        }
    }
    Path::new(path).to_path_buf()
}

/// Format a byte count as B / KB / MB
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn selected(name: &str, size: u64) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(format!("/tmp/{name}")),
            file_name: name.to_string(),
            size,
        }
    }

    mod accept {
        use super::*;

        #[test]
        fn test_cover_within_limit_is_accepted() {
            let mut slot = FileSlot::new(FileKind::CoverImage);
            assert!(slot.accept(selected("cover.png", 1024 * 1024)).is_ok());
            assert!(slot.is_present());
        }

        #[test]
        fn test_cover_over_limit_leaves_slot_unchanged() {
            let mut slot = FileSlot::new(FileKind::CoverImage);
            slot.accept(selected("old.png", 10)).unwrap();

            let result = slot.accept(selected("big.png", 1024 * 1024 + 1));
            assert!(matches!(result, Err(FileRejection::TooLarge { .. })));
            assert_eq!(slot.file.as_ref().unwrap().file_name, "old.png");
        }

        #[test]
        fn test_main_file_limit_is_one_megabyte() {
            let mut slot = FileSlot::new(FileKind::MainFile);
            assert!(slot.accept(selected("flow.json", 2 * 1024 * 1024)).is_err());
            assert!(!slot.is_present());
        }

        #[test]
        fn test_preview_video_allows_fifty_megabytes() {
            let mut slot = FileSlot::new(FileKind::PreviewVideo);
            assert!(slot.accept(selected("demo.mp4", 50 * 1024 * 1024)).is_ok());

            let mut slot = FileSlot::new(FileKind::PreviewVideo);
            assert!(slot
                .accept(selected("demo.mp4", 50 * 1024 * 1024 + 1))
                .is_err());
        }

        #[test]
        fn test_wrong_extension_rejected() {
            let mut slot = FileSlot::new(FileKind::CoverImage);
            let result = slot.accept(selected("cover.mp4", 10));
            assert!(matches!(result, Err(FileRejection::UnsupportedType { .. })));
        }

        #[test]
        fn test_extension_is_case_insensitive() {
            let mut slot = FileSlot::new(FileKind::CoverImage);
            assert!(slot.accept(selected("COVER.PNG", 10)).is_ok());
        }

        #[test]
        fn test_accept_resets_progress() {
            let mut slot = FileSlot::new(FileKind::CoverImage);
            slot.progress = UploadProgress::Failed {
                error: "boom".to_string(),
            };
            slot.accept(selected("cover.png", 10)).unwrap();
            assert_eq!(slot.progress, UploadProgress::Idle);
        }

        #[test]
        fn test_clear() {
            let mut slot = FileSlot::new(FileKind::CoverImage);
            slot.accept(selected("cover.png", 10)).unwrap();
            slot.clear();
            assert!(!slot.is_present());
        }
    }

    mod inspect {
        use super::*;

        #[test]
        fn test_empty_path() {
            assert_eq!(inspect_file("  "), Err(FileRejection::EmptyPath));
        }

        #[test]
        fn test_missing_file() {
            let result = inspect_file("/definitely/not/here.png");
            assert!(matches!(result, Err(FileRejection::NotFound(_))));
        }

        #[test]
        fn test_directory_is_not_a_file() {
            let dir = tempfile::tempdir().unwrap();
            let result = inspect_file(dir.path().to_str().unwrap());
            assert!(matches!(result, Err(FileRejection::NotAFile(_))));
        }

        #[test]
        fn test_reads_name_and_size() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("cover.png");
            let mut file = fs::File::create(&path).unwrap();
            file.write_all(&[0u8; 2048]).unwrap();

            let selected = inspect_file(path.to_str().unwrap()).unwrap();
            assert_eq!(selected.file_name, "cover.png");
            assert_eq!(selected.size, 2048);
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
