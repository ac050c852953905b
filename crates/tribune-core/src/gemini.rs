//! Gemini REST transport.
//!
//! Speaks the Generative Language API's `generateContent` method. The role
//! instruction travels as `systemInstruction`, the debate context as the
//! single user turn. Structured output is requested through
//! `generationConfig.responseMimeType`; models that reject that field come
//! back as [`TransportError::StructuredOutputUnsupported`] so the agent can
//! retry as plain text.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use tribune_council::{ModelTransport, TransportError};
use tribune_pool::Credential;

use crate::config::ModelConfig;
use crate::error::TribuneError;
use crate::Result;

/// Public Generative Language API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const JSON_MIME_TYPE: &str = "application/json";
const MAX_ERROR_BODY: usize = 512;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: [Content<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, or empty.
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// [`ModelTransport`] over the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiTransport {
    client: Client,
    endpoint: String,
    model: String,
}

impl GeminiTransport {
    /// Creates a transport for `model` at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`TribuneError::Http`] if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TribuneError::Http(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Creates a transport from the `[model]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`TribuneError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &ModelConfig, connect_timeout: Duration) -> Result<Self> {
        Self::new(&config.endpoint, &config.model, connect_timeout)
    }

    /// The `generateContent` URL for the configured model.
    pub fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }

    /// The model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ModelTransport for GeminiTransport {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn send(
        &self,
        credential: &Credential,
        instruction: &str,
        context: &str,
        prefer_structured: bool,
    ) -> std::result::Result<String, TransportError> {
        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: [Part { text: instruction }],
            },
            contents: [Content {
                role: Some("user"),
                parts: [Part { text: context }],
            }],
            generation_config: prefer_structured.then_some(GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
            }),
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), model = %self.model, "model request rejected");
            return Err(classify_failure(status, body, prefer_structured));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
        Ok(parsed.text())
    }
}

/// Maps a non-success response to a transport error.
fn classify_failure(status: StatusCode, body: String, prefer_structured: bool) -> TransportError {
    if status == StatusCode::BAD_REQUEST && prefer_structured && mentions_mime_type(&body) {
        return TransportError::StructuredOutputUnsupported(truncate(body));
    }
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TransportError::Authentication(truncate(body))
        }
        _ => TransportError::Status {
            status: status.as_u16(),
            body: truncate(body),
        },
    }
}

fn mentions_mime_type(body: &str) -> bool {
    let lower = body.to_lowercase();
    ["responsemimetype", "response_mime_type", "response mime type"]
        .iter()
        .any(|needle| lower.contains(needle))
}

fn truncate(body: String) -> String {
    if body.chars().count() <= MAX_ERROR_BODY {
        body
    } else {
        body.chars().take(MAX_ERROR_BODY).collect()
    }
}
