//! Conversation record input model
//!
//! Shape of the remote JSON document: an array of per-session records, each
//! carrying the utterances of that session. Fields default to empty when
//! absent so partially-filled records are skipped during aggregation instead
//! of failing the whole document.

use serde::Deserialize;

/// One recorded conversation session.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationRecord {
    /// Session date, e.g. `"2024-01-01"`. Records without one are ignored.
    #[serde(default)]
    pub timestamp: String,
    /// Name of the person this session belongs to.
    #[serde(default)]
    pub person_name: String,
    #[serde(default)]
    pub conversation: Vec<Utterance>,
}

/// A single utterance within a conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct Utterance {
    #[serde(default)]
    pub speaker: String,
    /// Emotion labels tagged on this utterance; may repeat.
    #[serde(default)]
    pub emotions: Vec<String>,
}

/// Decode a JSON array body into conversation records.
pub fn parse_records(body: &[u8]) -> Result<Vec<ConversationRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}
