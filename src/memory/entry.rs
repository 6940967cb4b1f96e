//! What each pipeline records per interaction.

use serde::{Deserialize, Serialize};

use crate::curation::CuratedReply;
use crate::stats::{ConversationMetrics, StatsProfile};
use crate::tone::ToneProfile;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssistMemoryEntry {
    pub timestamp: String,
    pub query: String,
    pub response: CuratedReply,
    pub tone: ToneProfile,
    pub summary: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatsMemoryEntry {
    pub timestamp: String,
    pub metrics: ConversationMetrics,
    pub response: StatsProfile,
    pub chat_history_length: usize,
}
