use crate::config::Config;
use crate::error::panic_message;
use crate::models::SentimentLabel;
use async_trait::async_trait;
use futures::FutureExt;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::panic::AssertUnwindSafe;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Why a query fell back to the neutral mood.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("empty response")]
    EmptyResponse,

    #[error("response has no label")]
    MissingLabel,

    #[error("cancelled")]
    Cancelled,

    #[error("classifier panicked: {0}")]
    Panicked(String),
}

impl From<reqwest::Error> for ClassifyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClassifyError::Timeout
        } else if e.is_decode() {
            ClassifyError::Decode(e.to_string())
        } else {
            ClassifyError::Request(e)
        }
    }
}

/// Outcome of a classification. A failed lookup is not an error to the caller;
/// it is reported as `Defaulted` and reads as `Neutral`.
#[derive(Debug)]
pub enum Classification {
    Classified(SentimentLabel),
    Defaulted { reason: ClassifyError },
}

impl Classification {
    pub fn label(&self) -> SentimentLabel {
        match self {
            Classification::Classified(label) => *label,
            Classification::Defaulted { .. } => SentimentLabel::Neutral,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Classification::Defaulted { .. })
    }
}

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify `text`. Never fails; gives up early once `cancel` fires.
    async fn classify(&self, text: &str, cancel: &CancellationToken) -> Classification;
}

/// Run `classifier` on `text`. A panic inside the classifier is reported as
/// `Defaulted` like any other failure, so callers always get a label.
pub async fn classify_or_default(
    classifier: &dyn SentimentClassifier,
    text: &str,
    cancel: &CancellationToken,
) -> Classification {
    match AssertUnwindSafe(classifier.classify(text, cancel))
        .catch_unwind()
        .await
    {
        Ok(classification) => classification,
        Err(panic) => {
            let detail = panic_message(&*panic);
            warn!("Sentiment classifier panicked, using neutral: {}", detail);
            Classification::Defaulted {
                reason: ClassifyError::Panicked(detail),
            }
        }
    }
}

/// Text-classification client for the Hugging Face Inference API.
pub struct HuggingFaceClassifier {
    api_url: String,
    api_key: Option<String>,
    client: Client,
}

impl HuggingFaceClassifier {
    pub fn new(api_url: String, api_key: Option<String>, client: Client) -> Self {
        Self {
            api_url,
            api_key,
            client,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(config.sentiment_timeout)
            .build()?;

        Ok(Self::new(
            config.sentiment_api_url.clone(),
            config.hugging_face_api_key.clone(),
            client,
        ))
    }

    async fn request_label(&self, text: &str) -> Result<SentimentLabel, ClassifyError> {
        let api_key = self.api_key.as_deref().ok_or(ClassifyError::MissingApiKey)?;

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&json!({ "inputs": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Status { status, body });
        }

        let body: Value = response.json().await?;
        extract_label(&body)
    }
}

#[async_trait]
impl SentimentClassifier for HuggingFaceClassifier {
    async fn classify(&self, text: &str, cancel: &CancellationToken) -> Classification {
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ClassifyError::Cancelled),
            result = self.request_label(text) => result,
        };

        match outcome {
            Ok(label) => {
                debug!("Classified query as {}", label);
                Classification::Classified(label)
            }
            Err(reason) => {
                warn!("Sentiment analysis failed, using neutral: {}", reason);
                Classification::Defaulted { reason }
            }
        }
    }
}

/// Pull the top label out of an inference response.
///
/// Accepts both `[{"label": ..}]` and the batched `[[{"label": .., "score": ..}, ..]]`
/// shape, whose inner list is sorted by score.
fn extract_label(body: &Value) -> Result<SentimentLabel, ClassifyError> {
    let items = body
        .as_array()
        .ok_or_else(|| ClassifyError::Decode(format!("expected a JSON array, got {}", body)))?;

    let first = match items.first().ok_or(ClassifyError::EmptyResponse)? {
        Value::Array(inner) => inner.first().ok_or(ClassifyError::EmptyResponse)?,
        other => other,
    };

    let raw = first
        .get("label")
        .and_then(Value::as_str)
        .ok_or(ClassifyError::MissingLabel)?;

    let label = SentimentLabel::from_raw(raw).unwrap_or_else(|| {
        debug!("Unrecognized sentiment label '{}', treating as neutral", raw);
        SentimentLabel::Neutral
    });

    Ok(label)
}
