use crate::models::SentimentLabel;

/// Build the chat reply for a mood and the playlists chosen for it.
pub fn compose(label: SentimentLabel, playlists: &[&str]) -> String {
    let names = playlists.join(", ");

    match label {
        SentimentLabel::Positive => format!(
            "You seem in high spirits! 🎉 Here's a playlist to keep those vibes going: {}",
            names
        ),
        SentimentLabel::Negative => format!(
            "It seems like things might be a bit rough. Here are some calming tunes to lift your spirits: {}",
            names
        ),
        SentimentLabel::Neutral => format!(
            "I sense a chill mood! Here are some mellow tunes for your vibe: {}",
            names
        ),
    }
}
