use crate::models::{PlaylistSet, SentimentLabel};

const POSITIVE: PlaylistSet = ["Happy Vibes", "Good Times", "Uplifting Beats"];
const NEGATIVE: PlaylistSet = ["Chill Songs", "Calm Down", "Reflective Moments"];
const NEUTRAL: PlaylistSet = ["Easy Listening", "Background Beats", "Mellow Tunes"];

/// Playlists offered for a mood.
pub fn resolve(label: SentimentLabel) -> PlaylistSet {
    match label {
        SentimentLabel::Positive => POSITIVE,
        SentimentLabel::Negative => NEGATIVE,
        SentimentLabel::Neutral => NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_mood_has_its_own_set() {
        assert_eq!(
            resolve(SentimentLabel::Positive),
            ["Happy Vibes", "Good Times", "Uplifting Beats"]
        );
        assert_eq!(
            resolve(SentimentLabel::Negative),
            ["Chill Songs", "Calm Down", "Reflective Moments"]
        );
        assert_eq!(
            resolve(SentimentLabel::Neutral),
            ["Easy Listening", "Background Beats", "Mellow Tunes"]
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ] {
            assert_eq!(resolve(label), resolve(label));
        }
    }

    #[test]
    fn test_unknown_label_gets_neutral_set() {
        for raw in ["ecstatic", "", "label_7"] {
            let label = SentimentLabel::from_raw(raw).unwrap_or_default();
            assert_eq!(resolve(label), NEUTRAL);
        }
        assert_eq!(resolve(SentimentLabel::from_raw("Positive").unwrap_or_default()), POSITIVE);
    }
}
