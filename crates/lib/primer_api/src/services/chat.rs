//! Gemini chatbot proxy service.
//!
//! Calls the Google Generative Language REST API
//! (`models/{model}:generateContent`) with the accumulated chat
//! history and records both turns on success. History is process-wide;
//! sessions are out of scope for this API.

use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// One turn of the conversation, as sent back to Gemini on the next
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// "user" or "model".
    pub role: String,
    pub text: String,
}

/// Chat history handle shared across handlers.
pub type SharedHistory = Arc<RwLock<Vec<ChatTurn>>>;

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: String,
    #[serde(default, rename = "supportedGenerationMethods")]
    supported_generation_methods: Vec<String>,
}

/// A model visible to the configured API key.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    pub supported_methods: Vec<String>,
}

fn api_key(config: &ApiConfig) -> ApiResult<&str> {
    config
        .gemini_api_key
        .as_deref()
        .ok_or_else(|| ApiError::Upstream("GEMINI_API_KEY is not configured".into()))
}

/// Send a user message to Gemini with the running history attached.
///
/// On success the user and model turns are appended to `history`; on
/// failure the history is left untouched.
pub async fn send_message(
    client: &Client,
    config: &ApiConfig,
    history: &SharedHistory,
    message: &str,
) -> ApiResult<String> {
    let key = api_key(config)?;

    let mut contents: Vec<Content> = history
        .read()
        .await
        .iter()
        .map(|turn| Content {
            role: turn.role.clone(),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        })
        .collect();
    contents.push(Content {
        role: "user".into(),
        parts: vec![Part {
            text: message.into(),
        }],
    });

    let url = format!("{GEMINI_API_URL}/models/{}:generateContent", config.gemini_model);
    debug!(model = %config.gemini_model, turns = contents.len(), "calling Gemini generateContent");

    let resp = client
        .post(&url)
        .header("x-goog-api-key", key)
        .json(&GenerateRequest { contents })
        .send()
        .await
        .map_err(|e| ApiError::Upstream(format!("Gemini request failed: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_else(|_| "<no body>".to_string());
        return Err(ApiError::Upstream(format!(
            "Gemini generateContent failed: {status} {body}"
        )));
    }

    let data: GenerateResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Upstream(format!("Gemini response parse error: {e}")))?;

    let text = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| ApiError::Upstream("Gemini returned no candidates".into()))?;

    let mut history = history.write().await;
    history.push(ChatTurn {
        role: "user".into(),
        text: message.into(),
    });
    history.push(ChatTurn {
        role: "model".into(),
        text: text.clone(),
    });

    Ok(text)
}

/// Drop the accumulated chat history.
pub async fn clear_history(history: &SharedHistory) {
    history.write().await.clear();
}

/// List the models visible to the configured API key.
pub async fn list_models(client: &Client, config: &ApiConfig) -> ApiResult<Vec<ModelInfo>> {
    let key = api_key(config)?;

    let resp = client
        .get(format!("{GEMINI_API_URL}/models"))
        .header("x-goog-api-key", key)
        .send()
        .await
        .map_err(|e| ApiError::Upstream(format!("Gemini request failed: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_else(|_| "<no body>".to_string());
        return Err(ApiError::Upstream(format!(
            "Gemini model listing failed: {status} {body}"
        )));
    }

    let data: ModelsResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Upstream(format!("Gemini response parse error: {e}")))?;

    Ok(data
        .models
        .into_iter()
        .map(|m| ModelInfo {
            name: m.name,
            supported_methods: m.supported_generation_methods,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_key() -> ApiConfig {
        ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            gemini_api_key: None,
            gemini_model: "gemini-2.5-flash-lite".into(),
        }
    }

    #[tokio::test]
    async fn missing_api_key_is_an_upstream_failure() {
        let history: SharedHistory = Arc::new(RwLock::new(Vec::new()));
        let client = Client::new();

        let err = send_message(&client, &config_without_key(), &history, "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Upstream(_)));

        // A failed send records nothing.
        assert!(history.read().await.is_empty());
    }

    #[tokio::test]
    async fn clear_history_empties_the_log() {
        let history: SharedHistory = Arc::new(RwLock::new(vec![ChatTurn {
            role: "user".into(),
            text: "hi".into(),
        }]));

        clear_history(&history).await;
        assert!(history.read().await.is_empty());
    }

    #[test]
    fn model_info_serializes_camel_case() {
        let info = ModelInfo {
            name: "models/gemini-2.5-flash-lite".into(),
            supported_methods: vec!["generateContent".into()],
        };
        let wire = serde_json::to_value(&info).unwrap();
        assert_eq!(wire["name"], "models/gemini-2.5-flash-lite");
        assert_eq!(wire["supportedMethods"][0], "generateContent");
    }
}
