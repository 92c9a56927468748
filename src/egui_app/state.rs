//! UI model consumed by the egui renderer.

use egui::Color32;

use crate::chat::ChatLog;
use crate::egui_app::ui::style::{self, StatusTone};

/// Top-level UI model.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Multi-line input field contents.
    pub entry: String,
    pub log: ChatLog,
    /// Non-blocking warning prompt, if open.
    pub warning: Option<WarningPrompt>,
    /// Shows the typing indicator while a bot reply is pending.
    pub bot_typing: bool,
    pub status: StatusBarState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            entry: String::new(),
            log: ChatLog::default(),
            warning: None,
            bot_typing: false,
            status: StatusBarState::idle(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarningPrompt {
    pub title: String,
    pub message: String,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        let (label, color) = style::status_badge(StatusTone::Idle);
        Self {
            text: "Type a sentence and press Send".into(),
            badge_label: label.into(),
            badge_color: color,
        }
    }
}
