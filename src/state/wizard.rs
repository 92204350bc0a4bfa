//! Wizard steps, the fields on each step and the step navigator

use super::validation::validate;
use crate::state::{ContentType, FileKind, PriceType, UploadForm};

/// One page of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BasicInfo,
    CategoryTags,
    Pricing,
    FilesAndApi,
    AiSettings,
}

impl Step {
    /// Map a 1-based step number to a step
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::BasicInfo),
            2 => Some(Self::CategoryTags),
            3 => Some(Self::Pricing),
            4 => Some(Self::FilesAndApi),
            5 => Some(Self::AiSettings),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::CategoryTags => 2,
            Self::Pricing => 3,
            Self::FilesAndApi => 4,
            Self::AiSettings => 5,
        }
    }

    pub fn title(self, content_type: ContentType) -> &'static str {
        match (self, content_type) {
            (Self::BasicInfo, _) => "Basic info",
            (Self::CategoryTags, _) => "Category & tags",
            (Self::Pricing, _) => "Pricing",
            (Self::FilesAndApi, ContentType::Workflow) => "Files",
            (Self::FilesAndApi, ContentType::AiApp) => "Files & API",
            (Self::AiSettings, _) => "AI settings",
        }
    }
}

/// Focusable elements of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Title,
    Description,
    Country,
    CustomCountry,
    Category,
    CustomCategory,
    Tags,
    CustomTags,
    PriceType,
    Price,
    File(FileKind),
    ApiCode,
    OpeningMessage,
    PresetQuestions,
    RuntimeDuration,
    /// The Back / Next / Submit button row
    Actions,
}

impl FieldId {
    /// Fields rendered as a pick list rather than a text input
    pub fn is_list(self) -> bool {
        matches!(
            self,
            Self::Country | Self::Category | Self::Tags | Self::PriceType
        )
    }
}

/// Fields visible on a step given the current form contents.
///
/// Custom-entry fields only appear when "Other" is chosen, the price only for
/// paid content, and the main file / API code depend on the content type.
pub fn fields_for_step(step: Step, form: &UploadForm) -> Vec<FieldId> {
    let mut fields = match step {
        Step::BasicInfo => {
            let mut f = vec![FieldId::Title, FieldId::Description, FieldId::Country];
            if form.country.is_custom() {
                f.push(FieldId::CustomCountry);
            }
            f
        }
        Step::CategoryTags => {
            let mut f = vec![FieldId::Category];
            if form.category.is_custom() {
                f.push(FieldId::CustomCategory);
            } else {
                f.push(FieldId::Tags);
            }
            f.push(FieldId::CustomTags);
            f
        }
        Step::Pricing => {
            let mut f = vec![FieldId::PriceType];
            if form.price_type == PriceType::Paid {
                f.push(FieldId::Price);
            }
            f
        }
        Step::FilesAndApi => {
            let mut f = vec![
                FieldId::File(FileKind::CoverImage),
                FieldId::File(FileKind::PreviewVideo),
            ];
            match form.content_type {
                ContentType::Workflow => f.push(FieldId::File(FileKind::MainFile)),
                ContentType::AiApp => f.push(FieldId::ApiCode),
            }
            f
        }
        Step::AiSettings => vec![
            FieldId::OpeningMessage,
            FieldId::PresetQuestions,
            FieldId::RuntimeDuration,
        ],
    };
    fields.push(FieldId::Actions);
    fields
}

/// Bounded step counter gated by the validator on forward moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNavigator {
    content_type: ContentType,
    current: u8,
}

impl StepNavigator {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            current: 1,
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn step(&self) -> Step {
        Step::from_number(self.current).unwrap_or(Step::BasicInfo)
    }

    pub fn total(&self) -> u8 {
        self.content_type.total_steps()
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total()
    }

    /// Advance one step if the current step validates.
    ///
    /// Returns the validation errors when blocked. On the last step this is a
    /// no-op; submission is a separate action.
    pub fn next(&mut self, form: &UploadForm) -> Result<(), Vec<String>> {
        let errors = validate(self.current, form);
        if !errors.is_empty() {
            return Err(errors);
        }
        if !self.is_last() {
            self.current += 1;
        }
        Ok(())
    }

    /// Go back one step. Never blocked.
    pub fn prev(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Jump straight to a step, skipping validation
    #[cfg(test)]
    pub(crate) fn jump_to(&mut self, step: Step) {
        self.current = step.number().min(self.total());
    }
}
