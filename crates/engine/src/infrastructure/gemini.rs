//! Google Gemini client (`generateContent` REST API)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro-latest";

/// Default request timeout in seconds.
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;

/// Client for the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create client with a request timeout.
    pub fn with_timeout(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmPort for GeminiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;
        let api_request = build_request(&request);

        tracing::debug!(
            model = %self.model,
            prompt_chars = request.prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&api_request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
            let details = serde_json::from_str(&error_text)
                .unwrap_or(serde_json::Value::String(error_text));
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(api_response)
    }
}

fn build_request(request: &LlmRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![GeminiContent {
            parts: vec![GeminiPart {
                text: Some(request.prompt.clone()),
            }],
        }],
        generation_config: GeminiGenerationConfig {
            temperature: request.params.temperature,
            top_k: request.params.top_k,
            top_p: request.params.top_p,
            max_output_tokens: request.params.max_output_tokens,
        },
        safety_settings: request
            .safety_settings
            .iter()
            .map(|s| GeminiSafetySetting {
                category: s.category.as_str().to_string(),
                threshold: s.threshold.as_str().to_string(),
            })
            .collect(),
    }
}

fn convert_response(response: GenerateContentResponse) -> Result<LlmResponse, LlmError> {
    let candidate = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No candidates in Gemini response".to_string()))?;

    let text = candidate
        .content
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| {
            LlmError::InvalidResponse("Candidate has no text part".to_string())
        })?;

    Ok(LlmResponse { content: text })
}

// =============================================================================
// Gemini API types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
    safety_settings: Vec<GeminiSafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct GeminiSafetySetting {
    category: String,
    threshold: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    const MODEL: &str = "gemini-test";
    const PATH: &str = "/v1beta/models/gemini-test:generateContent";

    fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
        GeminiClient::with_timeout(&server.url(), MODEL, Some("test-key".to_string()), 5)
    }

    #[tokio::test]
    async fn returns_first_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_body(Matcher::PartialJson(json!({
                "contents": [{"parts": [{"text": "hello"}]}],
                "generationConfig": {"topK": 1, "maxOutputTokens": 2048},
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"hi there"}]}}]}"#)
            .expect(1)
            .create_async()
            .await;

        let response = client_for(&server)
            .generate(LlmRequest::new("hello"))
            .await
            .expect("generation succeeds");

        assert_eq!(response.content, "hi there");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn sends_all_four_safety_settings() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .match_body(Matcher::PartialJson(json!({
                "safetySettings": [
                    {"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                    {"category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                    {"category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                    {"category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                ],
            })))
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
            .create_async()
            .await;

        let result = client_for(&server).generate(LlmRequest::new("x")).await;
        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_details() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(r#"{"error":{"code":429,"message":"Resource exhausted"}}"#)
            .create_async()
            .await;

        let error = client_for(&server)
            .generate(LlmRequest::new("hello"))
            .await
            .expect_err("429 must fail");

        match error {
            LlmError::Upstream { status, details } => {
                assert_eq!(status, 429);
                assert_eq!(details["error"]["message"], "Resource exhausted");
            }
            other => panic!("Expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_is_kept_as_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let error = client_for(&server)
            .generate(LlmRequest::new("hello"))
            .await
            .expect_err("503 must fail");

        assert!(matches!(
            error,
            LlmError::Upstream { status: 503, ref details } if details == "upstream unavailable"
        ));
    }

    #[tokio::test]
    async fn missing_candidates_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
            .create_async()
            .await;

        let error = client_for(&server)
            .generate(LlmRequest::new("hello"))
            .await
            .expect_err("no candidates must fail");

        assert!(matches!(error, LlmError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn missing_api_key_makes_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = GeminiClient::with_timeout(&server.url(), MODEL, Some("  ".to_string()), 5);
        assert!(!client.is_configured());

        let error = client
            .generate(LlmRequest::new("hello"))
            .await
            .expect_err("unconfigured client must fail");

        assert!(matches!(error, LlmError::NotConfigured));
        mock.assert_async().await;
    }
}
