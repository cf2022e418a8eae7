/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All generation requests MUST go through this module.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all article generation calls.
pub const MODEL: &str = "gemini-2.5-flash";
const MAX_OUTPUT_TOKENS: u32 = 4096;
/// Fixed request timeout. Deliberately not configurable: one blocking call
/// per submit, bounded so a hung request cannot pin a session forever.
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned no article text")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (Gemini generateContent, camelCase field names)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: SystemInstruction<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Seam between the handlers and the Gemini API, so the request flow can be
/// exercised with a stub generator in tests.
#[async_trait]
pub trait ArticleGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}

/// The single Gemini client used by the service.
/// One awaited call per generate action — no retry, no streaming.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    fn api_url(&self) -> String {
        format!(
            "{GEMINI_API_BASE}/models/{MODEL}:generateContent?key={}",
            self.api_key
        )
    }
}

#[async_trait]
impl ArticleGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![Part { text: system }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.api_url())
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the error body parses
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.text().ok_or(LlmError::EmptyContent)?;

        debug!("Gemini call succeeded: {} chars of article text", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let json = r####"{
            "candidates": [
                {"content": {"parts": [{"text": "### Hello\n"}, {"text": "**World**"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"####;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("### Hello\n**World**"));
    }

    #[test]
    fn test_response_text_none_when_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_response_text_none_when_parts_empty() {
        let json = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_error_body_message_is_extracted() {
        let body = r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#;
        let parsed: GeminiError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "API key not valid");
    }

    #[test]
    fn test_request_serializes_camel_case_wire_names() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: "hi" }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![Part { text: "sys" }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: 16,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_some());
        assert!(value.get("generationConfig").is_some());
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 16);
    }

    #[test]
    fn test_api_url_targets_generate_content_for_model() {
        let client = GeminiClient::new("test-key".to_string());
        let url = client.api_url();
        assert!(url.contains("/models/gemini-2.5-flash:generateContent"));
        assert!(url.ends_with("key=test-key"));
    }
}
