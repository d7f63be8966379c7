//! State for the toast slot.

use std::fmt;

use crate::ui::mvi::UiState;

/// How a toast should be styled by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(name)
    }
}

/// Contents of the notification slot.
///
/// `message` and `severity` are kept when the toast is hidden so a renderer
/// finishing its dismiss animation can still read the last text. They are
/// only meaningful while `visible` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
    /// Number of `Show` intents applied so far. Identifies the message in
    /// the slot, so a timer can tell whether its toast was replaced.
    pub shown: u64,
}

impl UiState for ToastState {}

impl ToastState {
    /// Message and severity if the toast is currently showing.
    pub fn active(&self) -> Option<(&str, Severity)> {
        self.visible.then_some((self.message.as_str(), self.severity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hidden_empty_info() {
        let state = ToastState::default();
        assert!(!state.visible);
        assert_eq!(state.message, "");
        assert_eq!(state.severity, Severity::Info);
        assert_eq!(state.shown, 0);
    }

    #[test]
    fn active_only_when_visible() {
        let mut state = ToastState {
            visible: true,
            message: "Saved".into(),
            severity: Severity::Success,
            shown: 1,
        };
        assert_eq!(state.active(), Some(("Saved", Severity::Success)));

        state.visible = false;
        assert_eq!(state.active(), None);
    }

    #[test]
    fn severity_display_is_lowercase() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::default().to_string(), "info");
    }
}
