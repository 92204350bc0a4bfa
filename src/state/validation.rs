//! Per-step validation of the upload form

use crate::state::{ContentType, Pick, PriceType, UploadForm};

pub const MSG_TITLE: &str = "Please enter a title";
pub const MSG_DESCRIPTION: &str = "Please enter a description";
pub const MSG_CATEGORY: &str = "Please select a category";
pub const MSG_CUSTOM_CATEGORY: &str = "Please enter a name for the custom category";
pub const MSG_PRICE: &str = "Please enter a price greater than 0";
pub const MSG_COVER_IMAGE: &str = "Please upload a cover image";
pub const MSG_MAIN_FILE: &str = "Please upload the workflow file";
pub const MSG_API_CODE: &str = "Please enter the API code of the AI app";
pub const MSG_RUNTIME: &str = "Please enter the estimated runtime of the AI app";
pub const MSG_RUNTIME_POSITIVE: &str = "The estimated runtime must be greater than 0";
pub const MSG_RUNTIME_TOO_LARGE: &str = "The estimated runtime is too large";

/// Validate one wizard step. An empty list means the step is complete.
///
/// Steps outside `1..=total_steps` for the form's content type have no rules.
pub fn validate(step: u8, form: &UploadForm) -> Vec<String> {
    let mut errors = Vec::new();
    if step == 0 || step > form.content_type.total_steps() {
        return errors;
    }

    match step {
        1 => {
            if form.title.is_blank() {
                errors.push(MSG_TITLE.to_string());
            }
            if form.description.is_blank() {
                errors.push(MSG_DESCRIPTION.to_string());
            }
        }
        2 => match &form.category {
            Pick::Unset => errors.push(MSG_CATEGORY.to_string()),
            Pick::Custom if form.custom_category.is_blank() => {
                errors.push(MSG_CUSTOM_CATEGORY.to_string())
            }
            _ => {}
        },
        3 => {
            if form.price_type == PriceType::Paid
                && !form.price.as_decimal().is_some_and(|p| p > 0.0)
            {
                errors.push(MSG_PRICE.to_string());
            }
        }
        4 => {
            if !form.cover_image.is_present() {
                errors.push(MSG_COVER_IMAGE.to_string());
            }
            match form.content_type {
                ContentType::Workflow => {
                    if !form.main_file.is_present() {
                        errors.push(MSG_MAIN_FILE.to_string());
                    }
                }
                ContentType::AiApp => {
                    if form.api_code.is_blank() {
                        errors.push(MSG_API_CODE.to_string());
                    }
                }
            }
        }
        5 => {
            let runtime = &form.runtime_duration;
            match runtime.as_integer() {
                Some(0) => errors.push(MSG_RUNTIME_POSITIVE.to_string()),
                Some(_) => {}
                None if runtime.has_only_digits() => {
                    errors.push(MSG_RUNTIME_TOO_LARGE.to_string())
                }
                None => errors.push(MSG_RUNTIME.to_string()),
            }
        }
        _ => {}
    }

    errors
}

/// Validate every step that applies to the form's content type, in order
pub fn validate_all(form: &UploadForm) -> Vec<String> {
    (1..=form.content_type.total_steps())
        .flat_map(|step| validate(step, form))
        .collect()
}
