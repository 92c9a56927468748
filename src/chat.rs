//! Conversation log shown in the chat window.

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Prefix rendered before the message text.
    pub fn prefix(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    /// `You: ...` / `Bot: ...` display form.
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.sender.prefix(), self.text)
    }
}

/// Append-only message history; only [`ChatLog::clear`] removes entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whole log as the text shown in the scrollback, one blank line between messages.
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(ChatMessage::display_line)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Accept input with more than one whitespace-separated token.
pub fn is_sentence(text: &str) -> bool {
    text.split_whitespace().nth(1).is_some()
}
