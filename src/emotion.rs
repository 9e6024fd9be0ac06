//! Emotion category definitions
//!
//! The category set is closed: counting only recognizes these five labels,
//! anything else is dropped silently.

/// The five recognized emotion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
}

impl Emotion {
    /// All categories in chart dataset order.
    pub const ALL: [Self; 5] = [
        Self::Joy,
        Self::Anger,
        Self::Sadness,
        Self::Fear,
        Self::Surprise,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Display label as it appears in the source data.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Joy => "기쁨",
            Self::Anger => "분노",
            Self::Sadness => "슬픔",
            Self::Fear => "두려움",
            Self::Surprise => "놀람",
        }
    }

    /// Parse a data label into a category. Unrecognized labels yield `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.label() == label)
    }

    /// Display color for this category.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Joy => "rgba(255, 206, 86, 0.8)",
            Self::Anger => "rgba(255, 99, 132, 0.8)",
            Self::Sadness => "rgba(54, 162, 235, 0.8)",
            Self::Fear => "rgba(153, 102, 255, 0.82)",
            Self::Surprise => "rgba(102, 192, 75, 0.8)",
        }
    }

    /// Position in [`Self::ALL`], usable as a counter index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Neutral color for labels outside the category set.
pub const FALLBACK_COLOR: &str = "rgba(128, 128, 128, 0.8)";

/// Display color for an arbitrary label, falling back to neutral grey
/// so unrecognized categories are visible rather than dropped.
#[must_use]
pub fn color_for_label(label: &str) -> &'static str {
    Emotion::from_label(label).map_or(FALLBACK_COLOR, Emotion::color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_label(emotion.label()), Some(emotion));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Emotion::from_label("행복"), None);
        assert_eq!(Emotion::from_label(""), None);
        assert_eq!(Emotion::from_label("joy"), None);
    }

    #[test]
    fn test_color_lookup() {
        assert_eq!(color_for_label("기쁨"), "rgba(255, 206, 86, 0.8)");
        assert_eq!(color_for_label("분노"), "rgba(255, 99, 132, 0.8)");
        assert_eq!(color_for_label("무감각"), FALLBACK_COLOR);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, emotion) in Emotion::ALL.into_iter().enumerate() {
            assert_eq!(emotion.index(), i);
        }
    }
}
