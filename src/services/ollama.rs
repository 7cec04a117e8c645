/// Ollama chat provider
///
/// Talks to a locally-running Ollama instance over its /api/chat endpoint,
/// non-streaming. Ollama is slower than the catalog service, so requests get
/// a generous 60-second timeout.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::{
        chat::{ChatEntry, ChatRole},
        providers::ChatProvider,
    },
};

const CHAT_TIMEOUT: Duration = Duration::from_secs(60);

/// Only the most recent turns are forwarded upstream to bound the context
const HISTORY_LIMIT: usize = 10;

const SYSTEM_PROMPT: &str = "You are CineBot, a friendly and knowledgeable movie recommendation \
    assistant inside the CineFlow app. Your personality is warm, enthusiastic about cinema, and \
    concise. Keep responses SHORT (2-4 sentences max) unless the user asks for detail. When \
    recommending movies, always include the year in parentheses. You can discuss any \
    movie-related topic: recommendations, trivia, comparisons, plot explanations, etc. If someone \
    asks something unrelated to movies, gently steer them back to films. Never use markdown \
    formatting - respond in plain text only. When listing movies, use simple numbered lists.";

#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f64,
    num_predict: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct OllamaMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct OllamaProvider {
    http_client: HttpClient,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ollama_url.clone(), config.ollama_model.clone())
    }

    fn build_messages(history: &[ChatEntry], message: &str) -> Vec<OllamaMessage> {
        let mut messages = vec![OllamaMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        }];

        let start = history.len().saturating_sub(HISTORY_LIMIT);
        for entry in &history[start..] {
            let role = match entry.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "assistant",
            };
            messages.push(OllamaMessage {
                role: role.to_string(),
                content: entry.text.clone(),
            });
        }

        messages.push(OllamaMessage {
            role: "user".to_string(),
            content: message.to_string(),
        });

        messages
    }
}

#[async_trait::async_trait]
impl ChatProvider for OllamaProvider {
    async fn send(&self, history: &[ChatEntry], message: &str) -> AppResult<String> {
        let url = format!("{}/api/chat", self.base_url);

        let body = OllamaChatRequest {
            model: self.model.clone(),
            messages: Self::build_messages(history, message),
            stream: false,
            options: OllamaOptions {
                temperature: 0.8,
                num_predict: 500,
            },
        };

        let response = self
            .http_client
            .post(&url)
            .timeout(CHAT_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Ollama unreachable");
                AppError::ChatUnreachable
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(parsed) = serde_json::from_str::<OllamaErrorBody>(&body) {
                if parsed.error.contains("not found") {
                    return Err(AppError::ChatModelMissing(self.model.clone()));
                }
            }
            tracing::error!(status = status.as_u16(), body = %body, "Ollama request failed");
            return Err(AppError::ChatStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: OllamaChatResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Ollama response");
            AppError::InvalidResponse(e.to_string())
        })?;

        Ok(parsed.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_messages_prepends_system_prompt() {
        let messages = OllamaProvider::build_messages(&[], "hello");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "hello");
    }

    #[test]
    fn test_build_messages_limits_history() {
        let mut history = Vec::new();
        for i in 0..15 {
            history.push(ChatEntry::user(format!("question {i}")));
            history.push(ChatEntry::assistant(format!("answer {i}")));
        }

        let messages = OllamaProvider::build_messages(&history, "latest");

        // system + 10 most recent history turns + current message
        assert_eq!(messages.len(), 12);
        assert_eq!(messages[1].content, "question 10");
        assert_eq!(messages[10].content, "answer 14");
        assert_eq!(messages[11].content, "latest");
    }

    #[test]
    fn test_build_messages_maps_roles() {
        let history = vec![ChatEntry::user("q"), ChatEntry::assistant("a")];
        let messages = OllamaProvider::build_messages(&history, "next");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].role, "assistant");
    }

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{
            "model": "llama3.2",
            "message": {"role": "assistant", "content": "  Try Alien (1979).  "},
            "done": true
        }"#;

        let parsed: OllamaChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.message.content.trim(), "Try Alien (1979).");
    }

    #[test]
    fn test_error_body_deserialization() {
        let json = r#"{"error": "model 'llama3.2' not found"}"#;
        let parsed: OllamaErrorBody = serde_json::from_str(json).unwrap();
        assert!(parsed.error.contains("not found"));
    }
}
