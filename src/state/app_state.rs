//! Application state definitions

use super::wizard::{fields_for_step, FieldId, StepNavigator};
use crate::state::{
    inspect_file, AlertState, ContentType, FileKind, FileRejection, FormField, Pick, PriceType,
    UploadForm,
};
use serde::{Deserialize, Serialize};

/// Country lookup entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
}

/// Category lookup entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Tag lookup entry, scoped to a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Label of the trailing free-text entry in country/category lists
pub const OTHER_OPTION: &str = "Other (custom)";

/// Buttons on the actions row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardButton {
    Back,
    #[default]
    Forward,
}

/// Side effect the app must carry out after a list selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEffect {
    None,
    /// The category changed; reload tags for the given remote category
    CategoryChanged(Option<i64>),
}

/// Cursor positions inside the pick lists
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCursors {
    pub country: usize,
    pub category: usize,
    pub tags: usize,
    pub price_type: usize,
}

/// Paths typed into the file slots before they are attached
#[derive(Debug, Clone)]
pub struct PathInputs {
    cover_image: FormField,
    preview_video: FormField,
    main_file: FormField,
}

impl PathInputs {
    fn new() -> Self {
        Self {
            cover_image: FormField::text("Path", false),
            preview_video: FormField::text("Path", false),
            main_file: FormField::text("Path", false),
        }
    }

    pub fn get(&self, kind: FileKind) -> &FormField {
        match kind {
            FileKind::CoverImage => &self.cover_image,
            FileKind::PreviewVideo => &self.preview_video,
            FileKind::MainFile => &self.main_file,
        }
    }

    pub fn get_mut(&mut self, kind: FileKind) -> &mut FormField {
        match kind {
            FileKind::CoverImage => &mut self.cover_image,
            FileKind::PreviewVideo => &mut self.preview_video,
            FileKind::MainFile => &mut self.main_file,
        }
    }
}

pub struct AppState {
    pub form: UploadForm,
    pub path_inputs: PathInputs,
    pub navigator: StepNavigator,
    pub active_field_index: usize,
    pub selected_button: WizardButton,
    pub cursors: ListCursors,

    // Lookups
    pub countries: Vec<Country>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub tags_loading: bool,

    // UI state
    pub alert: AlertState,
    pub is_submitting: bool,
    pub status_message: Option<String>,
    /// Route to leave for, set when the user confirms a successful submission
    pub navigate_to: Option<String>,
}

impl AppState {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            form: UploadForm::new(content_type),
            path_inputs: PathInputs::new(),
            navigator: StepNavigator::new(content_type),
            active_field_index: 0,
            selected_button: WizardButton::Forward,
            cursors: ListCursors::default(),
            countries: Vec::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            tags_loading: false,
            alert: AlertState::default(),
            is_submitting: false,
            status_message: None,
            navigate_to: None,
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.form.content_type
    }

    /// Fields shown on the current step
    pub fn visible_fields(&self) -> Vec<FieldId> {
        fields_for_step(self.navigator.step(), &self.form)
    }

    pub fn active_field(&self) -> FieldId {
        let fields = self.visible_fields();
        fields
            .get(self.active_field_index)
            .or(fields.last())
            .copied()
            .unwrap_or(FieldId::Actions)
    }

    pub fn is_active(&self, field: FieldId) -> bool {
        self.active_field() == field
    }

    pub fn next_field(&mut self) {
        let count = self.visible_fields().len();
        self.active_field_index = (self.active_field_index + 1) % count;
    }

    pub fn prev_field(&mut self) {
        let count = self.visible_fields().len();
        if self.active_field_index == 0 {
            self.active_field_index = count - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Keep focus on the same field after the visible field list changed
    fn refocus(&mut self, field: FieldId) {
        let fields = self.visible_fields();
        self.active_field_index = fields
            .iter()
            .position(|f| *f == field)
            .unwrap_or_else(|| self.active_field_index.min(fields.len() - 1));
    }

    // Step navigation

    /// Try to advance; on validation errors the step is unchanged
    pub fn next_step(&mut self) -> Result<(), Vec<String>> {
        let before = self.navigator.current();
        self.navigator.next(&self.form)?;
        if self.navigator.current() != before {
            self.active_field_index = 0;
            self.selected_button = WizardButton::Forward;
        }
        Ok(())
    }

    pub fn prev_step(&mut self) {
        let before = self.navigator.current();
        self.navigator.prev();
        if self.navigator.current() != before {
            self.active_field_index = 0;
            self.selected_button = WizardButton::Forward;
        }
    }

    pub fn toggle_button(&mut self) {
        self.selected_button = match self.selected_button {
            WizardButton::Back => WizardButton::Forward,
            WizardButton::Forward => WizardButton::Back,
        };
    }

    // Pick lists

    /// Number of entries in a list field, including the "Other" entry
    pub fn list_len(&self, field: FieldId) -> usize {
        match field {
            FieldId::Country => self.countries.len() + 1,
            FieldId::Category => self.categories.len() + 1,
            FieldId::Tags => self.tags.len(),
            FieldId::PriceType => PriceType::ALL.len(),
            _ => 0,
        }
    }

    pub fn cursor(&self, field: FieldId) -> usize {
        match field {
            FieldId::Country => self.cursors.country,
            FieldId::Category => self.cursors.category,
            FieldId::Tags => self.cursors.tags,
            FieldId::PriceType => self.cursors.price_type,
            _ => 0,
        }
    }

    fn cursor_mut(&mut self, field: FieldId) -> Option<&mut usize> {
        match field {
            FieldId::Country => Some(&mut self.cursors.country),
            FieldId::Category => Some(&mut self.cursors.category),
            FieldId::Tags => Some(&mut self.cursors.tags),
            FieldId::PriceType => Some(&mut self.cursors.price_type),
            _ => None,
        }
    }

    pub fn cursor_down(&mut self) {
        let field = self.active_field();
        let len = self.list_len(field);
        if let Some(cursor) = self.cursor_mut(field) {
            if len > 0 && *cursor < len - 1 {
                *cursor += 1;
            }
        }
    }

    pub fn cursor_up(&mut self) {
        let field = self.active_field();
        if let Some(cursor) = self.cursor_mut(field) {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Apply the entry under the cursor of the active list field
    pub fn select_at_cursor(&mut self) -> SelectionEffect {
        let field = self.active_field();
        let cursor = self.cursor(field);
        let effect = match field {
            FieldId::Country => {
                let pick = match self.countries.get(cursor) {
                    Some(country) => Pick::Existing(country.clone()),
                    None => Pick::Custom,
                };
                self.form.set_country(pick);
                SelectionEffect::None
            }
            FieldId::Category => {
                let pick = match self.categories.get(cursor) {
                    Some(category) => Pick::Existing(category.clone()),
                    None => Pick::Custom,
                };
                if self.form.set_category(pick) {
                    self.tags.clear();
                    self.cursors.tags = 0;
                    SelectionEffect::CategoryChanged(self.form.category_id())
                } else {
                    SelectionEffect::None
                }
            }
            FieldId::Tags => {
                if let Some(tag) = self.tags.get(cursor).cloned() {
                    self.form.toggle_tag(&tag);
                }
                SelectionEffect::None
            }
            FieldId::PriceType => {
                if let Some(price_type) = PriceType::ALL.get(cursor) {
                    self.form.price_type = *price_type;
                }
                SelectionEffect::None
            }
            _ => SelectionEffect::None,
        };
        self.refocus(field);
        effect
    }

    /// Replace the tag list once a lookup for the current category completes
    pub fn set_tags(&mut self, category_id: i64, tags: Vec<Tag>) {
        if self.form.category_id() == Some(category_id) {
            self.tags = tags;
            self.cursors.tags = 0;
        }
        self.tags_loading = false;
    }

    // Text input

    /// The text field behind the active field, if it is a text input
    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field() {
            FieldId::Title => Some(&mut self.form.title),
            FieldId::Description => Some(&mut self.form.description),
            FieldId::CustomCountry => Some(&mut self.form.custom_country),
            FieldId::CustomCategory => Some(&mut self.form.custom_category),
            FieldId::CustomTags => Some(&mut self.form.custom_tag_input),
            FieldId::Price => Some(&mut self.form.price),
            FieldId::ApiCode => Some(&mut self.form.api_code),
            FieldId::OpeningMessage => Some(&mut self.form.opening_message),
            FieldId::PresetQuestions => Some(&mut self.form.preset_question_input),
            FieldId::RuntimeDuration => Some(&mut self.form.runtime_duration),
            FieldId::File(kind) => Some(self.path_inputs.get_mut(kind)),
            _ => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field_mut() {
            field.push_char(c);
        }
    }

    /// Backspace: delete a character, or the last list entry when the input
    /// is already empty
    pub fn backspace(&mut self) {
        match self.active_field() {
            FieldId::CustomTags if self.form.custom_tag_input.as_text().is_empty() => {
                self.form.remove_last_custom_tag();
            }
            FieldId::PresetQuestions if self.form.preset_question_input.as_text().is_empty() => {
                self.form.remove_last_preset_question();
            }
            _ => {
                if let Some(field) = self.active_text_field_mut() {
                    field.pop_char();
                }
            }
        }
    }

    // File slots

    /// Attach the file whose path was typed into the slot's input. On
    /// rejection the slot keeps its previous file.
    pub fn attach_file(&mut self, kind: FileKind) -> Result<(), FileRejection> {
        let file = inspect_file(self.path_inputs.get(kind).trimmed())?;
        self.form.slot_mut(kind).accept(file)?;
        self.path_inputs.get_mut(kind).clear();
        Ok(())
    }

    pub fn detach_file(&mut self, kind: FileKind) {
        self.form.slot_mut(kind).clear();
    }

    /// Enter on a text field: newline in multiline fields, commit in list inputs
    pub fn enter_text(&mut self) {
        match self.active_field() {
            FieldId::CustomTags => {
                self.form.commit_custom_tag();
            }
            FieldId::PresetQuestions => {
                self.form.commit_preset_question();
            }
            _ => {
                if let Some(field) = self.active_text_field_mut() {
                    field.push_newline();
                }
            }
        }
    }
}
