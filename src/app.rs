//! Application state and core logic

use crate::api::CreatorApi;
use crate::platform::is_shortcut;
use crate::state::{
    validate_all, AlertAction, AlertResponse, AlertSeverity, AppState, ContentType, FieldId,
    SelectionEffect, UploadProgress, WizardButton,
};
use crate::submission::{spawn_submission, SubmissionError, SubmissionEvent, CREATOR_ROUTE};
use crate::ui::{alert_button_areas, alert_dialog_area};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};

/// Shown for any upload or submit failure; details go to the log
pub const SUBMIT_FAILED_MESSAGE: &str = "Upload failed, please try again later.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Creator platform client
    api: Arc<dyn CreatorApi>,
    /// API base URL, shown in the header
    pub base_url: String,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Events from the running submission, if any
    submission_rx: Option<UnboundedReceiver<SubmissionEvent>>,
}

impl App {
    /// Create a new App instance. Lookups are loaded separately with
    /// [`App::load_lookups`].
    pub fn new(api: Arc<dyn CreatorApi>, content_type: ContentType, base_url: &str) -> Self {
        Self {
            state: AppState::new(content_type),
            api,
            base_url: base_url.to_string(),
            quit: false,
            terminal_size: None,
            submission_rx: None,
        }
    }

    /// Load countries and categories. Failures leave the lists empty so the
    /// custom entries remain usable.
    pub async fn load_lookups(&mut self) {
        match self.api.list_countries().await {
            Ok(countries) => self.state.countries = countries,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load countries");
                self.state.status_message = Some("Could not load countries".to_string());
            }
        }
        match self.api.list_categories().await {
            Ok(categories) => self.state.categories = categories,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load categories");
                self.state.status_message = Some("Could not load categories".to_string());
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit || self.state.navigate_to.is_some()
    }

    /// Route chosen by the user on leaving, if any
    pub fn navigate_to(&self) -> Option<&str> {
        self.state.navigate_to.as_deref()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alert is modal
        if self.state.alert.open {
            self.handle_alert_key(key);
            return Ok(());
        }

        self.state.status_message = None;

        if is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.start_submission(),
                KeyCode::Char('n') => self.advance_step(),
                KeyCode::Char('p') => self.state.prev_step(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc if self.state.is_submitting => {
                self.state.alert.warning(
                    "Upload in progress",
                    "Wait for the submission to finish before leaving. Ctrl+C quits anyway.",
                );
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.next_field(),
            KeyCode::BackTab => self.state.prev_field(),
            KeyCode::PageDown => self.advance_step(),
            KeyCode::PageUp => self.state.prev_step(),
            _ => self.handle_field_key(key).await?,
        }
        Ok(())
    }

    fn handle_alert_key(&mut self, key: KeyEvent) {
        let response = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.state.alert.activate(),
            KeyCode::Esc => self.state.alert.dismiss(),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.state.alert.toggle_focus();
                return;
            }
            _ => return,
        };
        self.apply_alert_response(response);
    }

    fn apply_alert_response(&mut self, response: AlertResponse) {
        if let AlertResponse::Confirmed(Some(AlertAction::NavigateTo(route))) = response {
            tracing::info!(%route, "leaving wizard");
            self.state.navigate_to = Some(route);
        }
    }

    /// Keys that go to the focused field
    async fn handle_field_key(&mut self, key: KeyEvent) -> Result<()> {
        let field = self.state.active_field();

        if field.is_list() {
            match key.code {
                KeyCode::Up => self.state.cursor_up(),
                KeyCode::Down => self.state.cursor_down(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let SelectionEffect::CategoryChanged(Some(category_id)) =
                        self.state.select_at_cursor()
                    {
                        self.load_tags(category_id).await;
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        match field {
            FieldId::Actions => match key.code {
                KeyCode::Left | KeyCode::Right => self.state.toggle_button(),
                KeyCode::Enter | KeyCode::Char(' ') => self.press_button(),
                _ => {}
            },
            FieldId::File(kind) => match key.code {
                KeyCode::Enter => {
                    if let Err(rejection) = self.state.attach_file(kind) {
                        tracing::info!(kind = kind.as_key(), %rejection, "file rejected");
                        self.state.alert.error("Invalid file", rejection.to_string());
                    }
                }
                KeyCode::Delete => self.state.detach_file(kind),
                KeyCode::Backspace => self.state.backspace(),
                KeyCode::Char(c) => self.state.input_char(c),
                _ => {}
            },
            _ => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                    self.state.input_char(c)
                }
                KeyCode::Backspace => self.state.backspace(),
                KeyCode::Enter => {
                    let multiline = self
                        .state
                        .active_text_field_mut()
                        .is_some_and(|f| f.is_multiline);
                    let is_entry_list =
                        matches!(field, FieldId::CustomTags | FieldId::PresetQuestions);
                    if multiline || is_entry_list {
                        self.state.enter_text();
                    } else {
                        self.state.next_field();
                    }
                }
                KeyCode::Up => self.state.prev_field(),
                KeyCode::Down => self.state.next_field(),
                _ => {}
            },
        }
        Ok(())
    }

    fn press_button(&mut self) {
        match self.state.selected_button {
            WizardButton::Back => self.state.prev_step(),
            WizardButton::Forward if self.state.navigator.is_last() => self.start_submission(),
            WizardButton::Forward => self.advance_step(),
        }
    }

    /// Move to the next step, or show why not
    fn advance_step(&mut self) {
        if let Err(errors) = self.state.next_step() {
            self.state
                .alert
                .error("Please complete this step", errors.join("\n"));
        }
    }

    async fn load_tags(&mut self, category_id: i64) {
        self.state.tags_loading = true;
        match self.api.list_tags(category_id).await {
            Ok(tags) => self.state.set_tags(category_id, tags),
            Err(err) => {
                tracing::warn!(category_id, error = %err, "failed to load tags");
                self.state.tags_loading = false;
                self.state.status_message = Some("Could not load tags".to_string());
            }
        }
    }

    /// Validate everything and hand the form to a background submission
    pub fn start_submission(&mut self) {
        if self.state.is_submitting {
            return;
        }

        let errors = validate_all(&self.state.form);
        if !errors.is_empty() {
            self.state
                .alert
                .error("Cannot submit yet", errors.join("\n"));
            return;
        }

        tracing::info!(content_type = %self.state.content_type(), "starting submission");
        self.state.is_submitting = true;
        self.state.form.reset_upload_progress();
        self.submission_rx = Some(spawn_submission(
            Arc::clone(&self.api),
            self.state.form.clone(),
        ));
    }

    /// Drain submission events. Called once per tick by the event loop.
    pub fn poll_submission(&mut self) {
        loop {
            let Some(rx) = self.submission_rx.as_mut() else {
                return;
            };
            match rx.try_recv() {
                Ok(event) => self.apply_submission_event(event),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    // Task ended without reporting; treat as a failure
                    tracing::error!("submission task ended unexpectedly");
                    self.finish_submission();
                    self.state.form.discard_partial_uploads();
                    self.state.alert.error("Submission failed", SUBMIT_FAILED_MESSAGE);
                    return;
                }
            }
        }
    }

    fn apply_submission_event(&mut self, event: SubmissionEvent) {
        match event {
            SubmissionEvent::UploadStarted(kind) => {
                self.state.form.slot_mut(kind).progress = UploadProgress::Uploading;
                self.state.status_message = Some(format!("Uploading {}…", kind.label()));
            }
            SubmissionEvent::Uploaded { kind, url } => {
                self.state.form.slot_mut(kind).progress = UploadProgress::Uploaded { url };
            }
            SubmissionEvent::UploadFailed { kind, error } => {
                self.state.form.slot_mut(kind).progress = UploadProgress::Failed { error };
            }
            SubmissionEvent::Finished(result) => {
                self.finish_submission();
                match result {
                    Ok(receipt) => {
                        tracing::info!(
                            submitted_at = %receipt.submitted_at.to_rfc3339(),
                            id = receipt.id.as_deref().unwrap_or("-"),
                            "submission confirmed"
                        );
                        let message = receipt.message.unwrap_or_else(|| {
                            match receipt.content_type {
                                ContentType::Workflow => "Your workflow was submitted for review.",
                                ContentType::AiApp => "Your AI app was submitted for review.",
                            }
                            .to_string()
                        });
                        self.state
                            .alert
                            .show(AlertSeverity::Success, "Submitted", message)
                            .with_action(AlertAction::NavigateTo(CREATOR_ROUTE.to_string()))
                            .with_confirm_label("Go to creator center")
                            .with_cancel_label("Stay");
                    }
                    Err(SubmissionError::Invalid(errors)) => {
                        self.state.form.discard_partial_uploads();
                        self.state
                            .alert
                            .error("Cannot submit yet", errors.join("\n"));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "submission failed");
                        self.state.form.discard_partial_uploads();
                        self.state
                            .alert
                            .error("Submission failed", SUBMIT_FAILED_MESSAGE);
                    }
                }
            }
        }
    }

    fn finish_submission(&mut self) {
        self.state.is_submitting = false;
        self.state.status_message = None;
        self.submission_rx = None;
    }

    fn screen(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Handle mouse events. Only the alert reacts to the mouse: its buttons
    /// can be clicked and a click on the backdrop closes it.
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }
        if !self.state.alert.open {
            return Ok(());
        }

        let position = Position::new(mouse.column, mouse.row);
        let dialog = alert_dialog_area(self.screen(), &self.state.alert);

        if !dialog.contains(position) {
            let response = self.state.alert.dismiss();
            self.apply_alert_response(response);
            return Ok(());
        }

        let clicked = alert_button_areas(dialog, &self.state.alert)
            .into_iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(button, _)| button);
        if let Some(button) = clicked {
            self.state.alert.focused = button;
            let response = self.state.alert.activate();
            self.apply_alert_response(response);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockCreatorApi;
    use crate::state::{AlertButton, Category, Country, FileKind, Pick, Step, Tag};
    use std::io::Write;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with(api: MockCreatorApi, content_type: ContentType) -> App {
        let mut app = App::new(Arc::new(api), content_type, "http://127.0.0.1:8000");
        app.terminal_size = Some((40, 120));
        app
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    fn temp_file(suffix: &str, len: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(&vec![0u8; len]).unwrap();
        file
    }

    /// Fill every required workflow field directly on the form
    fn fill_workflow(app: &mut App, cover: &tempfile::NamedTempFile, main: &tempfile::NamedTempFile) {
        let form = &mut app.state.form;
        form.title.set_text("Daily digest");
        form.description.set_text("Summarises your inbox");
        form.set_category(Pick::Existing(Category {
            id: 3,
            name: "Productivity".to_string(),
        }));
        for (kind, file) in [(FileKind::CoverImage, cover), (FileKind::MainFile, main)] {
            app.state
                .path_inputs
                .get_mut(kind)
                .set_text(file.path().display().to_string());
            app.state.attach_file(kind).unwrap();
        }
    }

    /// Wait for the background submission to report back
    async fn drain_submission(app: &mut App) {
        for _ in 0..200 {
            app.poll_submission();
            if !app.state.is_submitting {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission did not finish");
    }

    mod lookups {
        use super::*;

        #[tokio::test]
        async fn test_load_lookups_fills_lists() {
            let mut api = MockCreatorApi::new();
            api.expect_list_countries().returning(|| {
                Ok(vec![Country {
                    id: 1,
                    name: "Japan".to_string(),
                }])
            });
            api.expect_list_categories().returning(|| {
                Ok(vec![Category {
                    id: 3,
                    name: "Productivity".to_string(),
                }])
            });

            let mut app = app_with(api, ContentType::Workflow);
            app.load_lookups().await;
            assert_eq!(app.state.countries.len(), 1);
            assert_eq!(app.state.categories.len(), 1);
            assert!(app.state.status_message.is_none());
        }

        #[tokio::test]
        async fn test_lookup_failure_sets_status() {
            let mut api = MockCreatorApi::new();
            api.expect_list_countries()
                .returning(|| Err(anyhow::anyhow!("offline")));
            api.expect_list_categories().returning(|| Ok(vec![]));

            let mut app = app_with(api, ContentType::Workflow);
            app.load_lookups().await;
            assert!(app.state.countries.is_empty());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Could not load countries")
            );
        }

        #[tokio::test]
        async fn test_choosing_category_loads_tags() {
            let mut api = MockCreatorApi::new();
            api.expect_list_tags()
                .with(mockall::predicate::eq(3))
                .times(1)
                .returning(|_| {
                    Ok(vec![Tag {
                        id: 7,
                        name: "email".to_string(),
                    }])
                });

            let mut app = app_with(api, ContentType::Workflow);
            app.state.categories = vec![Category {
                id: 3,
                name: "Productivity".to_string(),
            }];
            app.state.navigator.jump_to(Step::CategoryTags);
            assert_eq!(app.state.active_field(), FieldId::Category);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.form.category_id(), Some(3));
            assert_eq!(app.state.tags.len(), 1);
            assert!(!app.state.tags_loading);
        }
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_blocked_step_raises_alert() {
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            app.handle_key(ctrl('n')).await.unwrap();

            assert_eq!(app.state.navigator.current(), 1);
            assert!(app.state.alert.open);
            assert_eq!(app.state.alert.severity, AlertSeverity::Error);
        }

        #[tokio::test]
        async fn test_typing_then_next_step() {
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            type_text(&mut app, "My flow").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "Does things").await;
            app.handle_key(key(KeyCode::PageDown)).await.unwrap();

            assert!(!app.state.alert.open);
            assert_eq!(app.state.navigator.current(), 2);
            app.handle_key(key(KeyCode::PageUp)).await.unwrap();
            assert_eq!(app.state.navigator.current(), 1);
            assert_eq!(app.state.form.title.as_text(), "My flow");
        }

        #[tokio::test]
        async fn test_alert_swallows_keys_until_closed() {
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            app.state.alert.error("Error", "bad");
            type_text(&mut app, "x").await;
            assert!(app.state.form.title.as_text().is_empty());

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.alert.open);
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_esc_while_submitting_warns() {
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            app.state.is_submitting = true;

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.should_quit());
            assert!(app.state.alert.open);
            assert_eq!(app.state.alert.severity, AlertSeverity::Warning);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.alert.open);
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_esc_without_alert_quits() {
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.should_quit());
            assert!(app.navigate_to().is_none());
        }
    }

    mod files {
        use super::*;

        #[tokio::test]
        async fn test_oversized_cover_rejected_with_alert() {
            let big = temp_file(".png", 2 * 1024 * 1024);
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            app.state.navigator.jump_to(Step::FilesAndApi);
            assert_eq!(app.state.active_field(), FieldId::File(FileKind::CoverImage));

            type_text(&mut app, &big.path().display().to_string()).await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(!app.state.form.cover_image.is_present());
            assert!(app.state.alert.open);
            assert_eq!(app.state.alert.title, "Invalid file");
        }

        #[tokio::test]
        async fn test_delete_clears_slot() {
            let cover = temp_file(".png", 64);
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            app.state.navigator.jump_to(Step::FilesAndApi);
            type_text(&mut app, &cover.path().display().to_string()).await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.form.cover_image.is_present());

            app.handle_key(key(KeyCode::Delete)).await.unwrap();
            assert!(!app.state.form.cover_image.is_present());
        }
    }

    mod submission {
        use super::*;
        use crate::api::SubmitResponse;

        #[tokio::test]
        async fn test_ai_app_without_runtime_is_blocked() {
            let mut app = app_with(MockCreatorApi::new(), ContentType::AiApp);
            app.handle_key(ctrl('s')).await.unwrap();

            assert!(!app.state.is_submitting);
            assert!(app.state.alert.open);
            assert!(app
                .state
                .alert
                .message
                .contains("Please enter the estimated runtime of the AI app"));
        }

        #[tokio::test]
        async fn test_workflow_submit_then_confirm_navigates() {
            let cover = temp_file(".png", 64);
            let main = temp_file(".json", 64);

            let mut api = MockCreatorApi::new();
            api.expect_upload_file()
                .times(2)
                .returning(|kind, _| Ok(format!("https://cdn/{}", kind.as_key())));
            api.expect_submit_workflow()
                .times(1)
                .returning(|_| Ok(SubmitResponse::default()));

            let mut app = app_with(api, ContentType::Workflow);
            fill_workflow(&mut app, &cover, &main);

            app.handle_key(ctrl('s')).await.unwrap();
            assert!(app.state.is_submitting);
            // Second request while in flight is ignored
            app.start_submission();

            drain_submission(&mut app).await;
            assert!(app.state.alert.open);
            assert_eq!(app.state.alert.severity, AlertSeverity::Success);
            assert!(matches!(
                app.state.form.main_file.progress,
                UploadProgress::Uploaded { .. }
            ));

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.navigate_to(), Some(CREATOR_ROUTE));
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_failed_upload_releases_guard() {
            let cover = temp_file(".png", 64);
            let main = temp_file(".json", 64);

            let mut api = MockCreatorApi::new();
            api.expect_upload_file()
                .times(1)
                .returning(|_, _| Err(anyhow::anyhow!("HTTP 500")));
            api.expect_submit_workflow().never();

            let mut app = app_with(api, ContentType::Workflow);
            fill_workflow(&mut app, &cover, &main);
            app.start_submission();
            drain_submission(&mut app).await;

            assert!(!app.state.is_submitting);
            assert_eq!(app.state.alert.message, SUBMIT_FAILED_MESSAGE);
            assert!(matches!(
                app.state.form.cover_image.progress,
                UploadProgress::Failed { .. }
            ));
        }

        #[tokio::test]
        async fn test_later_failure_discards_earlier_uploads() {
            let cover = temp_file(".png", 64);
            let main = temp_file(".json", 64);

            let mut api = MockCreatorApi::new();
            api.expect_upload_file()
                .times(2)
                .returning(|kind, _| match kind {
                    FileKind::CoverImage => Ok("https://cdn/cover.png".to_string()),
                    _ => Err(anyhow::anyhow!("HTTP 500")),
                });
            api.expect_submit_workflow().never();

            let mut app = app_with(api, ContentType::Workflow);
            fill_workflow(&mut app, &cover, &main);
            app.start_submission();
            drain_submission(&mut app).await;

            assert!(!app.state.is_submitting);
            assert_eq!(app.state.alert.message, SUBMIT_FAILED_MESSAGE);
            assert_eq!(app.state.form.cover_image.progress, UploadProgress::Idle);
            assert!(matches!(
                app.state.form.main_file.progress,
                UploadProgress::Failed { .. }
            ));
        }

        #[tokio::test]
        async fn test_rejected_submit_discards_uploads() {
            let cover = temp_file(".png", 64);
            let main = temp_file(".json", 64);

            let mut api = MockCreatorApi::new();
            api.expect_upload_file()
                .times(2)
                .returning(|kind, _| Ok(format!("https://cdn/{}", kind.as_key())));
            api.expect_submit_workflow()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("submission rejected: duplicate")));

            let mut app = app_with(api, ContentType::Workflow);
            fill_workflow(&mut app, &cover, &main);
            app.start_submission();
            drain_submission(&mut app).await;

            assert_eq!(app.state.alert.message, SUBMIT_FAILED_MESSAGE);
            assert_eq!(app.state.form.cover_image.progress, UploadProgress::Idle);
            assert_eq!(app.state.form.main_file.progress, UploadProgress::Idle);
        }
    }

    mod mouse {
        use super::*;

        fn success_alert(app: &mut App) {
            app.state
                .alert
                .show(AlertSeverity::Success, "Submitted", "done")
                .with_action(AlertAction::NavigateTo(CREATOR_ROUTE.to_string()))
                .with_cancel_label("Stay");
        }

        #[tokio::test]
        async fn test_backdrop_click_dismisses_without_action() {
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            success_alert(&mut app);
            app.handle_mouse(click(0, 0)).await.unwrap();

            assert!(!app.state.alert.open);
            assert!(app.navigate_to().is_none());
        }

        #[tokio::test]
        async fn test_click_inside_dialog_keeps_it_open() {
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            success_alert(&mut app);
            let dialog = alert_dialog_area(app.screen(), &app.state.alert);
            app.handle_mouse(click(dialog.x + 1, dialog.y + 1))
                .await
                .unwrap();
            assert!(app.state.alert.open);
        }

        #[tokio::test]
        async fn test_clicking_confirm_button_navigates() {
            let mut app = app_with(MockCreatorApi::new(), ContentType::Workflow);
            success_alert(&mut app);
            let dialog = alert_dialog_area(app.screen(), &app.state.alert);
            let (_, confirm) = alert_button_areas(dialog, &app.state.alert)
                .into_iter()
                .find(|(button, _)| *button == AlertButton::Confirm)
                .unwrap();

            app.handle_mouse(click(confirm.x, confirm.y)).await.unwrap();
            assert_eq!(app.navigate_to(), Some(CREATOR_ROUTE));
        }
    }
}
