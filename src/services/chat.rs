use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{error::AppError, services::providers::ChatProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry; append-only within a session, not persisted
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

/// A single conversation with the chat assistant.
///
/// The user entry is appended optimistically before the backend call, and
/// failures become synthetic assistant entries instead of errors, so the
/// transcript is the single source of truth for the UI.
pub struct ChatSession {
    provider: Arc<dyn ChatProvider>,
    transcript: Vec<ChatEntry>,
    in_flight: Arc<AtomicBool>,
}

/// Clears the in-flight flag even when the send future is dropped mid-call
struct InFlightReset(Arc<AtomicBool>);

impl Drop for InFlightReset {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ChatSession {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            provider,
            transcript: Vec::new(),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    /// Whether a request is outstanding; the UI disables input on true
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Sends a user message and appends the assistant's reply.
    ///
    /// Whitespace-only input is a no-op, and a send while another request is
    /// outstanding is ignored rather than interleaving the transcript.
    pub async fn send(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!("Ignoring send while a chat request is outstanding");
            return;
        }
        let _reset = InFlightReset(Arc::clone(&self.in_flight));

        // History excludes the message being sent
        let history = self.transcript.clone();
        self.transcript.push(ChatEntry::user(trimmed));

        let reply = match self.provider.send(&history, trimmed).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Chat request failed");
                Self::failure_message(&e)
            }
        };

        self.transcript.push(ChatEntry::assistant(reply));
    }

    fn failure_message(error: &AppError) -> String {
        match error {
            AppError::ChatUnreachable => {
                "Can't reach Ollama - make sure it's running locally and try again.".to_string()
            }
            AppError::ChatModelMissing(model) => format!(
                "The model '{}' wasn't found. Run 'ollama pull {}' first.",
                model, model
            ),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}
