//! Modal alert state

/// Severity of an alert, drives title color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertSeverity {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✔",
            Self::Warning => "⚠",
            Self::Error => "✖",
        }
    }
}

/// What happens when the user confirms an alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertAction {
    /// Leave the wizard for the given route
    NavigateTo(String),
}

/// Which alert button has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertButton {
    #[default]
    Confirm,
    Cancel,
}

/// Outcome of a key or click on an open alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertResponse {
    /// Confirmed; carries the confirm action if one was set
    Confirmed(Option<AlertAction>),
    /// Closed via cancel, Esc or backdrop click
    Dismissed,
}

#[derive(Debug, Clone, Default)]
pub struct AlertState {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub confirm_label: String,
    /// Cancel button label; no cancel button when `None`
    pub cancel_label: Option<String>,
    pub on_confirm: Option<AlertAction>,
    pub focused: AlertButton,
}

impl AlertState {
    /// Open an alert with a single OK button
    pub fn show(
        &mut self,
        severity: AlertSeverity,
        title: &str,
        message: impl Into<String>,
    ) -> &mut Self {
        *self = Self {
            open: true,
            title: title.to_string(),
            message: message.into(),
            severity,
            confirm_label: "OK".to_string(),
            cancel_label: None,
            on_confirm: None,
            focused: AlertButton::Confirm,
        };
        self
    }

    pub fn error(&mut self, title: &str, message: impl Into<String>) -> &mut Self {
        self.show(AlertSeverity::Error, title, message)
    }

    pub fn warning(&mut self, title: &str, message: impl Into<String>) -> &mut Self {
        self.show(AlertSeverity::Warning, title, message)
    }

    /// Attach a confirm action
    pub fn with_action(&mut self, action: AlertAction) -> &mut Self {
        self.on_confirm = Some(action);
        self
    }

    pub fn with_confirm_label(&mut self, label: &str) -> &mut Self {
        self.confirm_label = label.to_string();
        self
    }

    pub fn with_cancel_label(&mut self, label: &str) -> &mut Self {
        self.cancel_label = Some(label.to_string());
        self
    }

    pub fn has_cancel(&self) -> bool {
        self.cancel_label.is_some()
    }

    /// Move focus between confirm and cancel
    pub fn toggle_focus(&mut self) {
        if self.has_cancel() {
            self.focused = match self.focused {
                AlertButton::Confirm => AlertButton::Cancel,
                AlertButton::Cancel => AlertButton::Confirm,
            };
        }
    }

    /// Activate the focused button and close the alert
    pub fn activate(&mut self) -> AlertResponse {
        match self.focused {
            AlertButton::Confirm => self.confirm(),
            AlertButton::Cancel => self.dismiss(),
        }
    }

    pub fn confirm(&mut self) -> AlertResponse {
        self.open = false;
        AlertResponse::Confirmed(self.on_confirm.take())
    }

    /// Close without running the confirm action. The backdrop click and the
    /// close control both end up here.
    pub fn dismiss(&mut self) -> AlertResponse {
        self.open = false;
        self.on_confirm = None;
        AlertResponse::Dismissed
    }
}
