//! The upload wizard's form data

use super::field::FormField;
use super::file_slot::{FileSlot, UploadProgress};
use crate::state::{Category, ContentType, Country, FileKind, PriceType, Tag};

/// A choice from a remote list, or a free-text "Other" entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick<T> {
    Unset,
    Existing(T),
    Custom,
}

impl<T> Pick<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Pick::Unset)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Pick::Custom)
    }

    pub fn existing(&self) -> Option<&T> {
        match self {
            Pick::Existing(value) => Some(value),
            _ => None,
        }
    }
}

/// Everything the creator enters across the wizard
#[derive(Debug, Clone)]
pub struct UploadForm {
    pub content_type: ContentType,

    // Basic info
    pub title: FormField,
    pub description: FormField,
    pub country: Pick<Country>,
    pub custom_country: FormField,

    // Category & tags
    pub category: Pick<Category>,
    pub custom_category: FormField,
    pub selected_tags: Vec<Tag>,
    pub custom_tags: Vec<String>,
    pub custom_tag_input: FormField,

    // Pricing
    pub price_type: PriceType,
    pub price: FormField,

    // Files
    pub cover_image: FileSlot,
    pub preview_video: FileSlot,
    pub main_file: FileSlot,

    // AI app settings
    pub api_code: FormField,
    pub opening_message: FormField,
    pub preset_questions: Vec<String>,
    pub preset_question_input: FormField,
    pub runtime_duration: FormField,
}

impl UploadForm {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            title: FormField::text("Title", false),
            description: FormField::text("Description", true),
            country: Pick::Unset,
            custom_country: FormField::text("Custom country", false),
            category: Pick::Unset,
            custom_category: FormField::text("Custom category", false),
            selected_tags: Vec::new(),
            custom_tags: Vec::new(),
            custom_tag_input: FormField::text("Custom tags (Enter to add)", false),
            price_type: PriceType::Free,
            price: FormField::decimal("Price"),
            cover_image: FileSlot::new(FileKind::CoverImage),
            preview_video: FileSlot::new(FileKind::PreviewVideo),
            main_file: FileSlot::new(FileKind::MainFile),
            api_code: FormField::text("API code", true),
            opening_message: FormField::text("Opening message", true),
            preset_questions: Vec::new(),
            preset_question_input: FormField::text("Preset questions (Enter to add)", false),
            runtime_duration: FormField::integer("Estimated runtime (seconds)"),
        }
    }

    pub fn slot(&self, kind: FileKind) -> &FileSlot {
        match kind {
            FileKind::CoverImage => &self.cover_image,
            FileKind::PreviewVideo => &self.preview_video,
            FileKind::MainFile => &self.main_file,
        }
    }

    pub fn slot_mut(&mut self, kind: FileKind) -> &mut FileSlot {
        match kind {
            FileKind::CoverImage => &mut self.cover_image,
            FileKind::PreviewVideo => &mut self.preview_video,
            FileKind::MainFile => &mut self.main_file,
        }
    }

    /// Slots uploaded for this content type, in upload order
    pub fn upload_order(&self) -> Vec<FileKind> {
        let mut kinds = vec![FileKind::CoverImage];
        if self.preview_video.is_present() {
            kinds.push(FileKind::PreviewVideo);
        }
        if self.content_type == ContentType::Workflow {
            kinds.push(FileKind::MainFile);
        }
        kinds
    }

    /// Change the category. Tags belong to a category, so switching clears them.
    /// Returns true when the category actually changed.
    pub fn set_category(&mut self, category: Pick<Category>) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.selected_tags.clear();
        true
    }

    pub fn set_country(&mut self, country: Pick<Country>) {
        self.country = country;
    }

    pub fn is_tag_selected(&self, tag: &Tag) -> bool {
        self.selected_tags.iter().any(|t| t.id == tag.id)
    }

    /// Add or remove a remote tag
    pub fn toggle_tag(&mut self, tag: &Tag) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t.id == tag.id) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.clone());
        }
    }

    /// Move the custom tag input into the custom tag list
    pub fn commit_custom_tag(&mut self) -> bool {
        let tag = self.custom_tag_input.trimmed().to_string();
        self.custom_tag_input.clear();
        if tag.is_empty() || self.custom_tags.iter().any(|t| t == &tag) {
            return false;
        }
        self.custom_tags.push(tag);
        true
    }

    pub fn remove_last_custom_tag(&mut self) -> Option<String> {
        self.custom_tags.pop()
    }

    /// Move the preset question input into the question list
    pub fn commit_preset_question(&mut self) -> bool {
        let question = self.preset_question_input.trimmed().to_string();
        self.preset_question_input.clear();
        if question.is_empty() {
            return false;
        }
        self.preset_questions.push(question);
        true
    }

    pub fn remove_last_preset_question(&mut self) -> Option<String> {
        self.preset_questions.pop()
    }

    /// Selected remote tag names followed by custom tags, without duplicates
    pub fn merged_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        let names = self
            .selected_tags
            .iter()
            .map(|t| t.name.trim())
            .chain(self.custom_tags.iter().map(|t| t.trim()));
        for name in names {
            if !name.is_empty() && !tags.iter().any(|t| t == name) {
                tags.push(name.to_string());
            }
        }
        tags
    }

    /// Id of the chosen remote category, if any
    pub fn category_id(&self) -> Option<i64> {
        self.category.existing().map(|c| c.id)
    }

    /// Category name as submitted: the remote name or the custom entry
    pub fn category_name(&self) -> Option<String> {
        match &self.category {
            Pick::Unset => None,
            Pick::Existing(category) => Some(category.name.clone()),
            Pick::Custom => Some(self.custom_category.trimmed().to_string())
                .filter(|name| !name.is_empty()),
        }
    }

    /// Country name as submitted: the remote name or the custom entry
    pub fn country_name(&self) -> Option<String> {
        match &self.country {
            Pick::Unset => None,
            Pick::Existing(country) => Some(country.name.clone()),
            Pick::Custom => {
                Some(self.custom_country.trimmed().to_string()).filter(|name| !name.is_empty())
            }
        }
    }

    /// Price sent with the submission: the entered price when paid, otherwise 0
    pub fn effective_price(&self) -> f64 {
        match self.price_type {
            PriceType::Paid => self.price.as_decimal().unwrap_or(0.0),
            PriceType::Free | PriceType::MemberFree => 0.0,
        }
    }

    /// Reset the upload state of every slot (files stay selected)
    pub fn reset_upload_progress(&mut self) {
        for kind in [FileKind::CoverImage, FileKind::PreviewVideo, FileKind::MainFile] {
            self.slot_mut(kind).progress = Default::default();
        }
    }

    /// After a failed submission only the failing slot keeps its state;
    /// finished uploads go back to idle and are sent again next time.
    pub fn discard_partial_uploads(&mut self) {
        for kind in [FileKind::CoverImage, FileKind::PreviewVideo, FileKind::MainFile] {
            let slot = self.slot_mut(kind);
            if !matches!(slot.progress, UploadProgress::Failed { .. }) {
                slot.progress = UploadProgress::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::file_slot::SelectedFile;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn tag(id: i64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
        }
    }

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    fn file(name: &str) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(name),
            file_name: name.to_string(),
            size: 10,
        }
    }

    mod tags {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_tag_adds_and_removes() {
            let mut form = UploadForm::new(ContentType::Workflow);
            let t = tag(1, "automation");
            form.toggle_tag(&t);
            assert!(form.is_tag_selected(&t));
            form.toggle_tag(&t);
            assert!(!form.is_tag_selected(&t));
        }

        #[test]
        fn test_commit_custom_tag_trims_and_dedups() {
            let mut form = UploadForm::new(ContentType::Workflow);
            form.custom_tag_input.set_text("  seo ");
            assert!(form.commit_custom_tag());
            form.custom_tag_input.set_text("seo");
            assert!(!form.commit_custom_tag());
            form.custom_tag_input.set_text("   ");
            assert!(!form.commit_custom_tag());
            assert_eq!(form.custom_tags, vec!["seo".to_string()]);
            assert!(form.custom_tag_input.is_blank());
        }

        #[test]
        fn test_merged_tags_preserve_order_without_duplicates() {
            let mut form = UploadForm::new(ContentType::Workflow);
            form.toggle_tag(&tag(1, "automation"));
            form.toggle_tag(&tag(2, "email"));
            form.custom_tags = vec!["email".to_string(), "crm".to_string()];
            assert_eq!(
                form.merged_tags(),
                vec![
                    "automation".to_string(),
                    "email".to_string(),
                    "crm".to_string()
                ]
            );
        }

        #[test]
        fn test_changing_category_clears_tags() {
            let mut form = UploadForm::new(ContentType::Workflow);
            form.set_category(Pick::Existing(category(1, "Marketing")));
            form.toggle_tag(&tag(1, "seo"));
            assert!(form.set_category(Pick::Existing(category(2, "Sales"))));
            assert!(form.selected_tags.is_empty());
        }

        #[test]
        fn test_reselecting_same_category_keeps_tags() {
            let mut form = UploadForm::new(ContentType::Workflow);
            form.set_category(Pick::Existing(category(1, "Marketing")));
            form.toggle_tag(&tag(1, "seo"));
            assert!(!form.set_category(Pick::Existing(category(1, "Marketing"))));
            assert_eq!(form.selected_tags.len(), 1);
        }
    }

    mod names {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_category_name_existing_and_custom() {
            let mut form = UploadForm::new(ContentType::Workflow);
            assert_eq!(form.category_name(), None);

            form.set_category(Pick::Existing(category(3, "Design")));
            assert_eq!(form.category_name(), Some("Design".to_string()));
            assert_eq!(form.category_id(), Some(3));

            form.set_category(Pick::Custom);
            assert_eq!(form.category_name(), None);
            form.custom_category.set_text(" Robotics ");
            assert_eq!(form.category_name(), Some("Robotics".to_string()));
            assert_eq!(form.category_id(), None);
        }

        #[test]
        fn test_country_name_custom() {
            let mut form = UploadForm::new(ContentType::Workflow);
            form.set_country(Pick::Custom);
            form.custom_country.set_text("Atlantis");
            assert_eq!(form.country_name(), Some("Atlantis".to_string()));
        }
    }

    mod price {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_price_is_zero_unless_paid() {
            let mut form = UploadForm::new(ContentType::Workflow);
            form.price.set_text("19.5");
            form.price_type = PriceType::Free;
            assert_eq!(form.effective_price(), 0.0);
            form.price_type = PriceType::MemberFree;
            assert_eq!(form.effective_price(), 0.0);
            form.price_type = PriceType::Paid;
            assert_eq!(form.effective_price(), 19.5);
        }
    }

    mod uploads {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_upload_order_workflow_with_video() {
            let mut form = UploadForm::new(ContentType::Workflow);
            form.preview_video.file = Some(file("demo.mp4"));
            assert_eq!(
                form.upload_order(),
                vec![
                    FileKind::CoverImage,
                    FileKind::PreviewVideo,
                    FileKind::MainFile
                ]
            );
        }

        #[test]
        fn test_upload_order_ai_app_skips_main_file() {
            let form = UploadForm::new(ContentType::AiApp);
            assert_eq!(form.upload_order(), vec![FileKind::CoverImage]);
        }

        #[test]
        fn test_discard_partial_uploads_keeps_failure() {
            let mut form = UploadForm::new(ContentType::Workflow);
            form.cover_image.progress = UploadProgress::Uploaded {
                url: "https://cdn/cover.png".to_string(),
            };
            form.preview_video.progress = UploadProgress::Uploading;
            form.main_file.progress = UploadProgress::Failed {
                error: "HTTP 500".to_string(),
            };

            form.discard_partial_uploads();

            assert_eq!(form.cover_image.progress, UploadProgress::Idle);
            assert_eq!(form.preview_video.progress, UploadProgress::Idle);
            assert_eq!(
                form.main_file.progress,
                UploadProgress::Failed {
                    error: "HTTP 500".to_string()
                }
            );
        }
    }

    #[test]
    fn test_preset_questions() {
        let mut form = UploadForm::new(ContentType::AiApp);
        form.preset_question_input.set_text("What can you do?");
        assert!(form.commit_preset_question());
        assert!(!form.commit_preset_question());
        assert_eq!(form.preset_questions.len(), 1);
        assert_eq!(
            form.remove_last_preset_question(),
            Some("What can you do?".to_string())
        );
    }
}
