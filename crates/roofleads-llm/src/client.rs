//! HTTP client for an OpenAI-compatible `chat/completions` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use roofleads_core::AppConfig;

use crate::error::LlmError;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

pub const DEFAULT_BASE_URL: &str = roofleads_core::config::DEFAULT_OPENAI_BASE_URL;
pub const DEFAULT_MODEL: &str = roofleads_core::config::DEFAULT_OPENAI_MODEL;

/// System message sent ahead of every prompt.
pub const EXTRACT_LOCATION_INSTRUCTION: &str =
    "Extract the city or neighborhood from the prompt and return it plainly.";

/// Longest slice of an error body kept in [`LlmError::UnexpectedStatus`].
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Chat-completion client used for location extraction.
pub struct ChatClient {
    client: Client,
    api_key: String,
    model: String,
    completions_url: Url,
}

impl ChatClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, model, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Builds a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`ChatClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, LlmError> {
        Self::with_base_url(
            &config.openai_api_key,
            &config.openai_model,
            config.request_timeout_secs,
            &config.user_agent,
            &config.openai_base_url,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`LlmError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let completions_url = Url::parse(&normalised)
            .and_then(|base| base.join("chat/completions"))
            .map_err(|e| LlmError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            completions_url,
        })
    }

    /// Asks the model for the city or neighborhood named in `prompt`.
    ///
    /// The reply is returned with surrounding whitespace trimmed. Nothing
    /// checks that it is really a place name.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Http`] on network failure or timeout.
    /// - [`LlmError::UnexpectedStatus`] on a non-2xx status.
    /// - [`LlmError::Deserialize`] if the body is not a chat completion.
    /// - [`LlmError::EmptyReply`] if there is no choice or the text is blank.
    pub async fn extract_location(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: EXTRACT_LOCATION_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        tracing::debug!(model = %self.model, "requesting location extraction");
        let response = self
            .client
            .post(self.completions_url.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Deserialize {
                context: "chat/completions".to_string(),
                source: e,
            })?;

        let reply = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyReply)?;

        let location = reply.trim();
        if location.is_empty() {
            return Err(LlmError::EmptyReply);
        }
        Ok(location.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_url_is_joined_under_base() {
        let client =
            ChatClient::with_base_url("k", DEFAULT_MODEL, 10, "ua", "https://api.openai.com/v1")
                .expect("client construction should not fail");
        assert_eq!(
            client.completions_url.as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn trailing_slash_is_normalised() {
        let client = ChatClient::new("k", DEFAULT_MODEL, 10, "ua").expect("client construction");
        assert_eq!(
            client.completions_url.as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn request_serializes_system_then_user() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: [
                ChatMessage {
                    role: "system",
                    content: EXTRACT_LOCATION_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: "homes near Richmond Hill",
                },
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], EXTRACT_LOCATION_INSTRUCTION);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "homes near Richmond Hill");
    }
}
