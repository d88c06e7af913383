use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone)]
pub struct GenerativeClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
    model: String,
}

impl GenerativeClient {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        model: String,
        timeout: Duration,
    ) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();

        Self {
            http_client,
            base_url,
            api_key,
            model,
        }
    }

    /// Sends a single-turn prompt and returns the first candidate's first
    /// text part. The response is deserialized against an explicit schema;
    /// anything short of one text part is a malformed-response error rather
    /// than an empty default.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerativeError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            &self.base_url, &self.model
        );
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerativeError::RequestFailed { status, body });
        }

        let completion: GenerateContentResponse = response.json().await?;

        completion
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(GenerativeError::MalformedResponse)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerativeError {
    #[error("Generative API request failed with status {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },
    #[error("Generative API response is missing text content")]
    MalformedResponse,
    #[error("Failed to reach the generative API")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
