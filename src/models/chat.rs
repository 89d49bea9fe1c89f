use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
///
/// `query` is kept as raw JSON so a missing or non-string value reaches the
/// handler instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: Option<serde_json::Value>,
}

impl ChatRequest {
    /// The query text, if one was sent as a JSON string.
    pub fn text(&self) -> Option<&str> {
        self.query.as_ref().and_then(|q| q.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "botMessage")]
    pub bot_message: String,
    pub playlist: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatErrorResponse {
    #[serde(rename = "botMessage")]
    pub bot_message: String,
    pub error: String,
}
