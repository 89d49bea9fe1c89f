use std::env;
use std::time::Duration;

pub const DEFAULT_SENTIMENT_API_URL: &str =
    "https://api-inference.huggingface.co/models/cardiffnlp/twitter-roberta-base-sentiment";

#[derive(Debug, Clone)]
pub struct Config {
    pub hugging_face_api_key: Option<String>,
    pub sentiment_api_url: String,
    /// Upper bound on a single classifier round trip
    pub sentiment_timeout: Duration,
    pub server_host: String,
    pub server_port: u16,
    /// Allowed CORS origins (comma-separated). "*" allows any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let hugging_face_api_key = env::var("HUGGING_FACE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        if hugging_face_api_key.is_none() {
            tracing::warn!(
                "HUGGING_FACE_API_KEY is not set; every query will fall back to the neutral mood"
            );
        }

        let timeout_secs: u64 = env::var("SENTIMENT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| {
                anyhow::anyhow!(
                    "SENTIMENT_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                )
            })?;

        if timeout_secs == 0 {
            return Err(anyhow::anyhow!("SENTIMENT_TIMEOUT_SECS must be greater than zero"));
        }

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("SERVER_PORT must be a valid port number: {}", e))?;

        Ok(Config {
            hugging_face_api_key,
            sentiment_api_url: env::var("SENTIMENT_API_URL")
                .unwrap_or_else(|_| DEFAULT_SENTIMENT_API_URL.to_string()),
            sentiment_timeout: Duration::from_secs(timeout_secs),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port,
            cors_origins: parse_origins(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
