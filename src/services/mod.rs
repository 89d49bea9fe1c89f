pub mod composer;
pub mod playlists;
pub mod sentiment;

pub use sentiment::{HuggingFaceClassifier, SentimentClassifier};
