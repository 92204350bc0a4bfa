//! Per-field drawing for the wizard steps

use super::field_renderer::{draw_entry_list, draw_field, draw_file_slot, draw_pick_list, PickEntry};
use crate::state::{AppState, ContentType, FieldId, FileKind, Pick, PriceType, OTHER_OPTION};
use ratatui::{layout::Rect, Frame};

/// Entries of a remote lookup followed by the custom entry
fn pick_entries<'a, T: 'a + PartialEq>(
    items: impl Iterator<Item = (&'a T, &'a str)>,
    pick: &Pick<T>,
) -> Vec<PickEntry> {
    let mut entries: Vec<PickEntry> = items
        .map(|(item, name)| PickEntry {
            label: name.to_string(),
            selected: pick.existing() == Some(item),
        })
        .collect();
    entries.push(PickEntry {
        label: OTHER_OPTION.to_string(),
        selected: pick.is_custom(),
    });
    entries
}

pub fn draw_wizard_field(frame: &mut Frame, area: Rect, state: &AppState, field: FieldId) {
    let form = &state.form;
    let active = state.is_active(field);

    match field {
        FieldId::Title => draw_field(frame, area, &form.title, active),
        FieldId::Description => draw_field(frame, area, &form.description, active),
        FieldId::Country => {
            let entries = pick_entries(
                state.countries.iter().map(|c| (c, c.name.as_str())),
                &form.country,
            );
            draw_pick_list(
                frame,
                area,
                "Country (optional)",
                &entries,
                state.cursor(field),
                active,
                "",
            );
        }
        FieldId::CustomCountry => draw_field(frame, area, &form.custom_country, active),
        FieldId::Category => {
            let entries = pick_entries(
                state.categories.iter().map(|c| (c, c.name.as_str())),
                &form.category,
            );
            draw_pick_list(
                frame,
                area,
                "Category",
                &entries,
                state.cursor(field),
                active,
                "",
            );
        }
        FieldId::CustomCategory => draw_field(frame, area, &form.custom_category, active),
        FieldId::Tags => {
            let entries: Vec<PickEntry> = state
                .tags
                .iter()
                .map(|tag| PickEntry {
                    label: tag.name.clone(),
                    selected: form.is_tag_selected(tag),
                })
                .collect();
            let empty = if state.tags_loading {
                "Loading tags…"
            } else if form.category.is_unset() {
                "Select a category first"
            } else {
                "No tags for this category"
            };
            draw_pick_list(
                frame,
                area,
                "Tags",
                &entries,
                state.cursor(field),
                active,
                empty,
            );
        }
        FieldId::CustomTags => draw_entry_list(
            frame,
            area,
            "Custom tags",
            &form.custom_tags,
            &form.custom_tag_input,
            active,
        ),
        FieldId::PriceType => {
            let entries: Vec<PickEntry> = PriceType::ALL
                .iter()
                .map(|price_type| PickEntry {
                    label: price_type.label().to_string(),
                    selected: form.price_type == *price_type,
                })
                .collect();
            draw_pick_list(
                frame,
                area,
                "Price type",
                &entries,
                state.cursor(field),
                active,
                "",
            );
        }
        FieldId::Price => draw_field(frame, area, &form.price, active),
        FieldId::File(kind) => {
            let required = match kind {
                FileKind::CoverImage => true,
                FileKind::PreviewVideo => false,
                FileKind::MainFile => form.content_type == ContentType::Workflow,
            };
            draw_file_slot(
                frame,
                area,
                form.slot(kind),
                state.path_inputs.get(kind),
                required,
                active,
            );
        }
        FieldId::ApiCode => draw_field(frame, area, &form.api_code, active),
        FieldId::OpeningMessage => draw_field(frame, area, &form.opening_message, active),
        FieldId::PresetQuestions => draw_entry_list(
            frame,
            area,
            "Preset questions",
            &form.preset_questions,
            &form.preset_question_input,
            active,
        ),
        FieldId::RuntimeDuration => draw_field(frame, area, &form.runtime_duration, active),
        FieldId::Actions => {}
    }
}
