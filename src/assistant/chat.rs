// src/assistant/chat.rs

use crate::assistant::CompletionProvider;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

/// Shown in the transcript whenever the completion provider fails.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't get an answer right now. Please try again.";

const SYSTEM_INSTRUCTIONS: &str = "You are a real-estate assistant helping a user compare two \
properties. Answer only from the property details provided below. If the answer is not in \
those details, say you don't know. If no properties are selected yet, ask the user to pick \
two properties and run a comparison first. Keep answers short.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}

/// The conversation panel: a transcript plus a completion provider.
pub struct Assistant {
    provider: Arc<dyn CompletionProvider>,
    transcript: Mutex<Vec<ChatMessage>>,
}

impl Assistant {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            transcript: Mutex::new(Vec::new()),
        }
    }

    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.lock().clone()
    }

    /// Ask `question` against `context` and record both sides in the
    /// transcript. Provider failures are replaced by [`FALLBACK_REPLY`].
    /// Blank questions are ignored and return `None`.
    pub async fn ask(&self, question: &str, context: &str) -> Option<ChatMessage> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        self.lock().push(ChatMessage::new(Role::User, question));

        let prompt = build_prompt(question, context);
        let answer = match self.provider.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Assistant completion failed, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        let reply = ChatMessage::new(Role::Assistant, answer);
        self.lock().push(reply.clone());
        Some(reply)
    }

    // A poisoned transcript is still a usable transcript.
    fn lock(&self) -> MutexGuard<'_, Vec<ChatMessage>> {
        self.transcript
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn build_prompt(question: &str, context: &str) -> String {
    format!("{SYSTEM_INSTRUCTIONS}\n\nProperty details:\n{context}\n\nUser question: {question}")
}
