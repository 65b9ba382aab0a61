//! Gemini client for the generative language API
//!
//! Speaks the `generateContent` endpoint with a bounded timeout, a limited
//! retry budget for transient failures, and status-code mapping into
//! user-actionable errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::config::NarrativeConfig;
use crate::error::TravelEaseError;
use crate::narrative::NarrativeGenerator;

/// Wire format of the generateContent endpoint
mod wire {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct GenerateContentRequest {
        pub contents: Vec<Content>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Content {
        #[serde(default)]
        pub role: String,
        #[serde(default)]
        pub parts: Vec<Part>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Part {
        pub text: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct GenerateContentResponse {
        #[serde(default)]
        pub candidates: Vec<Candidate>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Candidate {
        pub content: Option<Content>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorResponse {
        pub error: ErrorDetail,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorDetail {
        pub message: String,
    }
}

/// Client for Google's generative language API
pub struct GeminiClient {
    /// HTTP client
    client: Client,
    /// Narrative configuration
    config: NarrativeConfig,
    /// API key, sent as a query parameter
    api_key: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: &NarrativeConfig) -> crate::Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            TravelEaseError::config(
                "No narrative API key configured. Set GEMINI_API_KEY or narrative.api_key.",
            )
        })?;

        let timeout = Duration::from_secs(config.timeout_seconds.into());
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("TravelEase/0.1.0")
            .build()
            .map_err(|e| {
                TravelEaseError::external_service(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Endpoint URL without the key, safe to log
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn is_retryable(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    fn status_error(&self, status: StatusCode, body: &str) -> TravelEaseError {
        let detail = serde_json::from_str::<wire::ErrorResponse>(body)
            .map(|parsed| parsed.error.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });

        let message = match status.as_u16() {
            400 => format!("Narrative service rejected the request: {detail}"),
            401 | 403 => "Invalid API key. Please check your GEMINI_API_KEY.".to_string(),
            404 => format!("Model '{}' was not found", self.config.model),
            429 => "Narrative service rate limit exceeded. Please try again later.".to_string(),
            _ => format!("Narrative service returned {status}: {detail}"),
        };
        TravelEaseError::external_service(message)
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> crate::Result<String> {
        let request = wire::GenerateContentRequest {
            contents: vec![wire::Content {
                role: "user".to_string(),
                parts: vec![wire::Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let max_attempts = self.config.max_retries + 1;
        let mut attempt = 0;

        loop {
            debug!(
                "Narrative request to {} (attempt {}/{})",
                self.endpoint(),
                attempt + 1,
                max_attempts
            );

            let sent = self
                .client
                .post(self.endpoint())
                .query(&[("key", self.api_key.as_str())])
                .json(&request)
                .send()
                .await;

            match sent {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        info!("Narrative generated (attempt {})", attempt + 1);
                        let body: wire::GenerateContentResponse =
                            response.json().await.map_err(|e| {
                                TravelEaseError::external_service(format!(
                                    "Malformed narrative response: {e}"
                                ))
                            })?;
                        return extract_text(&body);
                    }

                    if Self::is_retryable(status) && attempt < max_attempts - 1 {
                        let backoff = Duration::from_millis(500 * 2_u64.pow(attempt));
                        warn!(
                            "Narrative request failed with {status}, retrying in {:.1}s",
                            backoff.as_secs_f64()
                        );
                        tokio::time::sleep(backoff).await;
                        attempt += 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(self.status_error(status, &body));
                }
                Err(e) if attempt < max_attempts - 1 => {
                    let backoff = Duration::from_millis(500 * 2_u64.pow(attempt));
                    warn!(
                        "Narrative request error: {e}, retrying in {:.1}s",
                        backoff.as_secs_f64()
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(TravelEaseError::external_service(format!(
                        "Narrative request failed: {e}"
                    )));
                }
            }
        }
    }
}

/// Join the text parts of the first candidate
fn extract_text(response: &wire::GenerateContentResponse) -> crate::Result<String> {
    let candidate = response.candidates.first().ok_or_else(|| {
        TravelEaseError::external_service("Narrative response contained no candidates")
    })?;
    let content = candidate.content.as_ref().ok_or_else(|| {
        TravelEaseError::external_service("Narrative response candidate had no content")
    })?;
    let text: String = content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect();
    if text.is_empty() {
        return Err(TravelEaseError::external_service(
            "Narrative response contained no text",
        ));
    }
    Ok(text)
}
