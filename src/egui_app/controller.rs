//! Chat controller bridging the classifier and quote table to the egui UI.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::chat::{ChatMessage, is_sentence};
use crate::egui_app::state::{UiState, WarningPrompt};
use crate::egui_app::ui::style::{StatusTone, status_badge};
use crate::ml::EmotionClassifier;
use crate::quotes;


/// Text shown while a bot reply is pending.
pub const TYPING_INDICATOR: &str = "Bot is typing...";
const INVALID_SENTENCE: &str = "Please enter a valid sentence.";
const TOP_SCORES_LOGGED: usize = 3;

/// Rejected submissions. The log and entry are left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please enter a valid sentence.")]
    NotASentence,
}

/// Bot messages waiting for the typing delay to elapse.
#[derive(Debug, Clone)]
struct PendingReply {
    due: Instant,
    label: String,
    quote: &'static str,
}

/// Owns the fitted classifier and the UI model for one chat session.
pub struct ChatController {
    pub ui: UiState,
    classifier: EmotionClassifier,
    typing_delay: Duration,
    pending_reply: Option<PendingReply>,
}

impl ChatController {
    pub fn new(classifier: EmotionClassifier, typing_delay: Duration) -> Self {
        Self {
            ui: UiState::default(),
            classifier,
            typing_delay,
            pending_reply: None,
        }
    }

    /// Report the trained model in the status bar.
    pub fn announce_model(&mut self, trained_on: usize) {
        self.set_status(
            format!(
                "Model ready: {trained_on} examples, {} terms, {} emotions",
                self.classifier.vocabulary_len(),
                self.classifier.classes().len()
            ),
            StatusTone::Idle,
        );
    }

    /// Show that the settings file was skipped in favor of the defaults.
    pub fn report_settings_fallback(&mut self, reason: &str) {
        self.set_status(
            format!("Settings unavailable, using defaults: {reason}"),
            StatusTone::Warning,
        );
    }

    /// Handle the Send action for the current entry text.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        self.submit_at(Instant::now())
    }

    pub(crate) fn submit_at(&mut self, now: Instant) -> Result<(), SubmitError> {
        let text = self.ui.entry.trim().to_string();
        if !is_sentence(&text) {
            tracing::debug!("Rejected submission with fewer than two words");
            self.ui.warning = Some(WarningPrompt {
                title: "Warning".into(),
                message: INVALID_SENTENCE.into(),
            });
            return Err(SubmitError::NotASentence);
        }

        self.flush_pending_reply();
        let label = self.classifier.predict(&text).to_string();
        if tracing::enabled!(tracing::Level::DEBUG) {
            let ranked = self.classifier.predict_proba(&text);
            tracing::debug!("Top scores: {}", format_top_scores(&ranked, TOP_SCORES_LOGGED));
        }
        let quote = quotes::quote_for(&label);
        tracing::info!("Classified input as '{label}'");

        self.ui.log.push(ChatMessage::user(text));
        self.ui.entry.clear();
        self.set_status(format!("Last prediction: {label}"), StatusTone::Info);
        let reply = PendingReply {
            due: now + self.typing_delay,
            label,
            quote,
        };
        if self.typing_delay.is_zero() {
            self.push_reply(reply);
        } else {
            self.ui.bot_typing = true;
            self.set_status(TYPING_INDICATOR, StatusTone::Busy);
            self.pending_reply = Some(reply);
        }
        Ok(())
    }

    /// Append the pending reply once its delay elapsed. Returns `true` when flushed.
    pub fn poll_pending_reply(&mut self, now: Instant) -> bool {
        match &self.pending_reply {
            Some(reply) if reply.due <= now => {
                self.flush_pending_reply();
                true
            }
            _ => false,
        }
    }

    /// When the UI should wake up to deliver the pending reply.
    pub fn next_reply_due(&self) -> Option<Instant> {
        self.pending_reply.as_ref().map(|reply| reply.due)
    }

    /// Empty the conversation, dropping any undelivered reply.
    pub fn clear_chat(&mut self) {
        self.pending_reply = None;
        self.ui.bot_typing = false;
        self.ui.log.clear();
        self.set_status("Chat cleared", StatusTone::Idle);
    }

    pub fn dismiss_warning(&mut self) {
        self.ui.warning = None;
    }

    fn flush_pending_reply(&mut self) {
        if let Some(reply) = self.pending_reply.take() {
            self.push_reply(reply);
        }
    }

    fn push_reply(&mut self, reply: PendingReply) {
        self.ui.bot_typing = false;
        self.set_status(format!("Last prediction: {}", reply.label), StatusTone::Info);
        self.ui.log.push(ChatMessage::bot(reply.label));
        self.ui.log.push(ChatMessage::bot(reply.quote));
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label.into();
        self.ui.status.badge_color = color;
    }
}

fn format_top_scores(ranked: &[(&str, f64)], limit: usize) -> String {
    ranked
        .iter()
        .take(limit)
        .map(|(label, p)| format!("{label}={p:.3}"))
        .collect::<Vec<_>>()
        .join(", ")
}
