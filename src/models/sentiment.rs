use std::fmt;

/// Mood bucket a query is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Exactly three playlist names, fixed per label.
pub type PlaylistSet = [&'static str; 3];

impl SentimentLabel {
    /// Parse a label as reported by the classifier.
    ///
    /// Matching is case-insensitive. Returns `None` for anything else.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(SentimentLabel::from_raw("POSITIVE"), Some(SentimentLabel::Positive));
        assert_eq!(SentimentLabel::from_raw("Negative"), Some(SentimentLabel::Negative));
        assert_eq!(SentimentLabel::from_raw(" neutral "), Some(SentimentLabel::Neutral));
    }

    #[test]
    fn test_model_class_names_are_not_labels() {
        for raw in ["LABEL_0", "LABEL_1", "LABEL_2"] {
            assert_eq!(SentimentLabel::from_raw(raw), None);
            assert_eq!(SentimentLabel::from_raw(raw).unwrap_or_default(), SentimentLabel::Neutral);
        }
    }

    #[test]
    fn test_unknown_collapses_to_neutral() {
        assert_eq!(SentimentLabel::from_raw("joy"), None);
        assert_eq!(SentimentLabel::from_raw("").unwrap_or_default(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_displays_lowercase() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }
}
