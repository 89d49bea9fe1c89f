pub mod chat;
pub mod sentiment;

pub use chat::{ChatErrorResponse, ChatRequest, ChatResponse};
pub use sentiment::{PlaylistSet, SentimentLabel};
