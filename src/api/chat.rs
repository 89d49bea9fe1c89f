use crate::error::Result;
use crate::models::{ChatRequest, ChatResponse, SentimentLabel};
use crate::services::sentiment::classify_or_default;
use crate::services::{composer, playlists, SentimentClassifier};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub struct AppState {
    pub classifier: Arc<dyn SentimentClassifier>,
    /// Cancelled on shutdown; aborts in-flight classifier calls
    pub shutdown: CancellationToken,
}

pub fn chat_routes() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

async fn chat(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let Json(req) = payload?;

    info!("User query: {:?}", req.query);

    // Step 1: Analyze the user's mood
    let sentiment = match req.text() {
        Some(text) => {
            let classification =
                classify_or_default(state.classifier.as_ref(), text, &state.shutdown).await;
            if classification.is_defaulted() {
                warn!("Mood detection unavailable, answering with the neutral set");
            }
            classification.label()
        }
        None => {
            warn!("Chat request carries no text query, using neutral mood");
            SentimentLabel::Neutral
        }
    };
    info!("Detected mood: {}", sentiment);

    // Step 2: Pick playlists for the mood
    let playlist = playlists::resolve(sentiment);

    // Step 3: Build the reply
    let bot_message = composer::compose(sentiment, &playlist);

    Ok(Json(ChatResponse {
        bot_message,
        playlist: playlist.iter().map(|name| name.to_string()).collect(),
    }))
}
