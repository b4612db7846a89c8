//! HTTP client for the assistant backend (`POST /answer`, `POST /suggest`).

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::profile::UserProfile;

/// Payload for `POST /answer`.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRequest<'a> {
    pub selected_question: &'a str,
    pub user_profile: Option<&'a UserProfile>,
}

/// Response body of `POST /answer`. The field may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

/// Payload for `POST /suggest`.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestRequest<'a> {
    pub user_message: &'a str,
    pub user_profile: Option<&'a UserProfile>,
}

/// Response body of `POST /suggest`. Entries may carry a leading ordinal
/// prefix ("1. ", "2. ", ...) which the caller strips.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggested_questions: Vec<String>,
}

/// The two-endpoint backend contract.
///
/// Trait seam so the orchestrator can run against programmable doubles.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    async fn answer(
        &self,
        question: &str,
        profile: Option<&UserProfile>,
    ) -> Result<AnswerResponse, ApiError>;

    async fn suggest(
        &self,
        message: &str,
        profile: Option<&UserProfile>,
    ) -> Result<SuggestResponse, ApiError>;
}

/// Reusable backend client (connection-pooled).
pub struct AssistantClient {
    http: Client,
    base_url: String,
}

impl AssistantClient {
    pub fn new(config: &ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::InvalidBody { endpoint, source })
    }
}

#[async_trait]
impl AssistantApi for AssistantClient {
    async fn answer(
        &self,
        question: &str,
        profile: Option<&UserProfile>,
    ) -> Result<AnswerResponse, ApiError> {
        self.post_json(
            "/answer",
            &AnswerRequest {
                selected_question: question,
                user_profile: profile,
            },
        )
        .await
    }

    async fn suggest(
        &self,
        message: &str,
        profile: Option<&UserProfile>,
    ) -> Result<SuggestResponse, ApiError> {
        self.post_json(
            "/suggest",
            &SuggestRequest {
                user_message: message,
                user_profile: profile,
            },
        )
        .await
    }
}

static ORDINAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("invalid ordinal prefix pattern"));

/// Strip a leading `"<integer>. "` numbering prefix and surrounding whitespace.
pub fn normalize_suggestion(raw: &str) -> String {
    ORDINAL_PREFIX.replace(raw.trim(), "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_ordinal_prefix_and_whitespace() {
        assert_eq!(normalize_suggestion("1. What is an ETF?"), "What is an ETF?");
        assert_eq!(normalize_suggestion("  2.   Savings or stocks?  "), "Savings or stocks?");
        assert_eq!(normalize_suggestion("10. Double digits too"), "Double digits too");
    }

    #[test]
    fn normalize_leaves_unprefixed_text_alone() {
        assert_eq!(normalize_suggestion("Plain question?"), "Plain question?");
        // Only a leading "<n>. " counts as an ordinal.
        assert_eq!(normalize_suggestion("3 tips for saving"), "3 tips for saving");
        assert_eq!(normalize_suggestion(""), "");
    }

    #[test]
    fn answer_request_serializes_profile_verbatim_or_null() {
        let without = AnswerRequest {
            selected_question: "hi",
            user_profile: None,
        };
        let value = serde_json::to_value(&without).unwrap();
        assert_eq!(value["selected_question"], "hi");
        assert!(value["user_profile"].is_null());

        let profile = UserProfile::sample();
        let with = AnswerRequest {
            selected_question: "hi",
            user_profile: Some(&profile),
        };
        let value = serde_json::to_value(&with).unwrap();
        assert_eq!(value["user_profile"]["region"], "seoul");
        assert_eq!(value["user_profile"]["job"][0], "employee");
    }

    #[test]
    fn suggest_request_uses_user_message_key() {
        let request = SuggestRequest {
            user_message: "what now?",
            user_profile: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["user_message"], "what now?");
    }

    #[test]
    fn response_bodies_default_missing_fields() {
        let answer: AnswerResponse = serde_json::from_str("{}").unwrap();
        assert!(answer.answer.is_none());

        let suggest: SuggestResponse = serde_json::from_str("{}").unwrap();
        assert!(suggest.suggested_questions.is_empty());

        let suggest: SuggestResponse =
            serde_json::from_str(r#"{"suggested_questions":["1. A?"]}"#).unwrap();
        assert_eq!(suggest.suggested_questions, vec!["1. A?"]);
    }
}
