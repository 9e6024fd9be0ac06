//! Per-date emotion aggregation
//!
//! Single pass over the fetched records: only sessions belonging to the
//! tracked person contribute, and within them only the person's own
//! utterances are counted. Buckets are keyed by timestamp string, so the
//! output order is the lexicographic date order.

use crate::emotion::Emotion;
use crate::records::ConversationRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Fixed-size counter record, one slot per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionCounts([u32; Emotion::COUNT]);

impl EmotionCounts {
    #[must_use]
    pub const fn get(&self, emotion: Emotion) -> u32 {
        self.0[emotion.index()]
    }

    pub fn increment(&mut self, emotion: Emotion) {
        self.0[emotion.index()] += 1;
    }

    /// Sum over all categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// One timestamp's emotion-count vector, the unit of chart input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionRow {
    pub timestamp: String,
    pub counts: EmotionCounts,
}

// Rows serialize flat, `{"timestamp": ..., "기쁨": 2, ...}`, with every
// category present even at zero.
impl Serialize for EmotionRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + Emotion::COUNT))?;
        map.serialize_entry("timestamp", &self.timestamp)?;
        for emotion in Emotion::ALL {
            map.serialize_entry(emotion.label(), &self.counts.get(emotion))?;
        }
        map.end()
    }
}

/// Aggregate one person's emotion counts by date.
///
/// Records with a different `person_name` or an empty timestamp are skipped.
/// Duplicate timestamps accumulate into the same row. Emotion labels outside
/// the category set are ignored.
#[must_use]
pub fn aggregate_by_date(records: &[ConversationRecord], person: &str) -> Vec<EmotionRow> {
    let mut by_date: BTreeMap<&str, EmotionCounts> = BTreeMap::new();

    for record in records {
        if record.person_name != person || record.timestamp.is_empty() {
            continue;
        }

        let counts = by_date.entry(record.timestamp.as_str()).or_default();

        for utterance in &record.conversation {
            if utterance.speaker != person {
                continue;
            }
            for label in &utterance.emotions {
                if let Some(emotion) = Emotion::from_label(label) {
                    counts.increment(emotion);
                }
            }
        }
    }

    by_date
        .into_iter()
        .map(|(timestamp, counts)| EmotionRow {
            timestamp: timestamp.to_string(),
            counts,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Utterance;

    fn record(timestamp: &str, person: &str, utterances: Vec<Utterance>) -> ConversationRecord {
        ConversationRecord {
            timestamp: timestamp.to_string(),
            person_name: person.to_string(),
            conversation: utterances,
        }
    }

    fn utterance(speaker: &str, emotions: &[&str]) -> Utterance {
        Utterance {
            speaker: speaker.to_string(),
            emotions: emotions.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_repeated_emotion_counts_twice() {
        let records = vec![record(
            "2024-01-01",
            "Winter",
            vec![utterance("Winter", &["기쁨", "기쁨"])],
        )];

        let rows = aggregate_by_date(&records, "Winter");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].timestamp, "2024-01-01");
        assert_eq!(rows[0].counts.get(Emotion::Joy), 2);
        assert_eq!(rows[0].counts.get(Emotion::Anger), 0);
        assert_eq!(rows[0].counts.get(Emotion::Sadness), 0);
        assert_eq!(rows[0].counts.get(Emotion::Fear), 0);
        assert_eq!(rows[0].counts.get(Emotion::Surprise), 0);
    }

    #[test]
    fn test_other_person_creates_no_row() {
        let records = vec![record(
            "2024-01-01",
            "Karina",
            vec![utterance("Karina", &["기쁨"])],
        )];

        assert!(aggregate_by_date(&records, "Winter").is_empty());
    }

    #[test]
    fn test_other_speakers_within_record_are_ignored() {
        let records = vec![record(
            "2024-01-02",
            "Winter",
            vec![
                utterance("Winter", &["슬픔"]),
                utterance("상담사", &["기쁨", "놀람"]),
            ],
        )];

        let rows = aggregate_by_date(&records, "Winter");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].counts.get(Emotion::Sadness), 1);
        assert_eq!(rows[0].counts.get(Emotion::Joy), 0);
        assert_eq!(rows[0].counts.get(Emotion::Surprise), 0);
    }

    #[test]
    fn test_record_without_timestamp_is_skipped() {
        let records = vec![record("", "Winter", vec![utterance("Winter", &["기쁨"])])];

        assert!(aggregate_by_date(&records, "Winter").is_empty());
    }

    #[test]
    fn test_unrecognized_emotions_are_ignored_not_errors() {
        let records = vec![record(
            "2024-01-03",
            "Winter",
            vec![utterance("Winter", &["기쁨", "설렘", "happy"])],
        )];

        let rows = aggregate_by_date(&records, "Winter");
        assert_eq!(rows[0].counts.get(Emotion::Joy), 1);
        assert_eq!(rows[0].counts.total(), 1);
    }

    #[test]
    fn test_duplicate_timestamps_accumulate() {
        let records = vec![
            record("2024-01-01", "Winter", vec![utterance("Winter", &["분노"])]),
            record(
                "2024-01-01",
                "Winter",
                vec![utterance("Winter", &["분노", "두려움"])],
            ),
        ];

        let rows = aggregate_by_date(&records, "Winter");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].counts.get(Emotion::Anger), 2);
        assert_eq!(rows[0].counts.get(Emotion::Fear), 1);
    }

    #[test]
    fn test_rows_sorted_by_timestamp() {
        let records = vec![
            record("2024-03-01", "Winter", vec![utterance("Winter", &["기쁨"])]),
            record("2024-01-15", "Winter", vec![utterance("Winter", &["슬픔"])]),
            record("2024-02-01", "Winter", vec![]),
        ];

        let rows = aggregate_by_date(&records, "Winter");
        let dates: Vec<&str> = rows.iter().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(dates, ["2024-01-15", "2024-02-01", "2024-03-01"]);
    }

    #[test]
    fn test_total_counts_recognized_values() {
        let records = vec![record(
            "2024-01-01",
            "Winter",
            vec![
                utterance("Winter", &["기쁨", "놀람"]),
                utterance("Winter", &["모름"]),
                utterance("Winter", &["슬픔"]),
            ],
        )];

        let rows = aggregate_by_date(&records, "Winter");
        // Two multi-counted plus one single, the unknown label adds nothing.
        assert_eq!(rows[0].counts.total(), 3);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(aggregate_by_date(&[], "Winter").is_empty());
    }

    #[test]
    fn test_row_serializes_flat_with_all_categories() {
        let rows = aggregate_by_date(
            &[record(
                "2024-01-01",
                "Winter",
                vec![utterance("Winter", &["기쁨", "기쁨"])],
            )],
            "Winter",
        );

        let value = serde_json::to_value(&rows[0]).expect("serializable row");
        assert_eq!(
            value,
            serde_json::json!({
                "timestamp": "2024-01-01",
                "기쁨": 2,
                "분노": 0,
                "슬픔": 0,
                "두려움": 0,
                "놀람": 0
            })
        );
    }
}
