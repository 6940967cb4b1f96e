//! Shared structs.

use serde::{Deserialize, Serialize};

use crate::curation::CuratedReply;
use crate::stats::StatsProfile;
use crate::tone::ToneProfile;

/// One message from the exchange history. Created by the caller and
/// read-only to the pipeline; `is_outgoing` partitions "self" vs "other".
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatMessage {
    pub text: String,
    pub timestamp: String,
    #[serde(rename = "isOutgoing")]
    pub is_outgoing: bool,
    pub sender: String,
}

impl ChatMessage {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

fn default_user_id() -> String {
    "default".to_string()
}

/// Inbound shape for the assistant pipeline.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssistRequest {
    pub chat_history: Vec<ChatMessage>,
    pub user_query: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

/// Inbound shape for the insights pipeline.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatsRequest {
    pub chat_history: Vec<ChatMessage>,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

/// Outbound shape for the assistant pipeline.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssistReply {
    pub response: String,
    pub suggestions: Vec<String>,
    pub conversation_summary: String,
    pub user_tone_analysis: ToneProfile,
}

impl AssistReply {
    pub fn from_parts(curated: CuratedReply, summary: String, tone: ToneProfile) -> Self {
        Self {
            response: curated.response,
            suggestions: curated.suggestions,
            conversation_summary: summary,
            user_tone_analysis: tone,
        }
    }
}

/// Outbound shape for the insights pipeline is [`StatsProfile`] itself.
pub type StatsReply = StatsProfile;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_defaults_when_absent() {
        let req: AssistRequest =
            serde_json::from_str(r#"{"chat_history": [], "user_query": "hi"}"#).unwrap();
        assert_eq!(req.user_id, "default");
    }

    #[test]
    fn test_message_wire_field_names() {
        let msg: ChatMessage = serde_json::from_str(
            r#"{"text": "hey", "timestamp": "2024-01-01T00:00:00Z", "isOutgoing": true, "sender": "me"}"#,
        )
        .unwrap();
        assert!(msg.is_outgoing);
        assert_eq!(msg.word_count(), 1);
    }
}
