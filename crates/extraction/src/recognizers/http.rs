//! Model sidecar client
//!
//! The recognizers and the QA model are served by a sidecar process:
//!
//! - `POST /ner/general` `{text}` → `{entities: [{text, label}]}`
//! - `POST /ner/domain` `{text}` → `{tokens: [{token, label}]}`
//! - `POST /qa` `{question, context}` → `{answer}`
//!
//! Calls are blocking; the server runs extraction on the blocking pool.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use movie_ner_config::ModelConfig;
use movie_ner_core::{
    DomainTagger, Error, GeneralRecognizer, Label, QuestionAnswerer, RecognizedSpan, Result,
    TaggedToken,
};

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct QaRequest<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeneralResponse {
    #[serde(default)]
    entities: Vec<RecognizedSpan>,
}

#[derive(Debug, Deserialize)]
struct DomainToken {
    token: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct DomainResponse {
    #[serde(default)]
    tokens: Vec<DomainToken>,
}

#[derive(Debug, Deserialize)]
struct QaResponse {
    #[serde(default)]
    answer: Option<String>,
}

/// HTTP client for the model sidecar
#[derive(Debug, Clone)]
pub struct HttpModelClient {
    client: Client,
    endpoint: String,
}

impl HttpModelClient {
    /// Create a client; `config.request_timeout_ms` bounds each call
    pub fn new(config: &ModelConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(Error::invalid_input("model sidecar endpoint is empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| Error::model(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.endpoint, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| Error::model(format!("Sidecar request to {} failed: {}", path, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(Error::model(format!(
                "Sidecar {} failed: {} - {}",
                path, status, text
            )));
        }

        response
            .json()
            .map_err(|e| Error::model(format!("Failed to parse sidecar {} response: {}", path, e)))
    }
}

impl GeneralRecognizer for HttpModelClient {
    fn recognize(&self, text: &str) -> Result<Vec<RecognizedSpan>> {
        let response: GeneralResponse = self.post("/ner/general", &TextRequest { text })?;
        Ok(response.entities)
    }

    fn name(&self) -> &str {
        "http"
    }
}

impl DomainTagger for HttpModelClient {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let response: DomainResponse = self.post("/ner/domain", &TextRequest { text })?;

        Ok(response
            .tokens
            .into_iter()
            .map(|token| {
                let label = token.label.parse::<Label>().unwrap_or_else(|_| {
                    tracing::debug!(label = %token.label, "Unknown domain label, using O");
                    Label::Outside
                });
                TaggedToken::new(token.token, label)
            })
            .collect())
    }

    fn name(&self) -> &str {
        "http"
    }
}

impl QuestionAnswerer for HttpModelClient {
    fn answer(&self, question: &str, context: &str) -> Result<Option<String>> {
        let response: QaResponse = self.post("/qa", &QaRequest { question, context })?;
        Ok(response.answer)
    }

    fn name(&self) -> &str {
        "http"
    }
}
