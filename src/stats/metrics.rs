//! Deterministic conversation counts and the transcript fed to the model.

use serde::{Deserialize, Serialize};

use crate::types::ChatMessage;

/// Number of most recent messages rendered into the transcript.
const TRANSCRIPT_WINDOW: usize = 50;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConversationMetrics {
    pub total_messages: usize,
    pub user_messages: usize,
    pub other_messages: usize,
    pub conversation_text: String,
}

impl ConversationMetrics {
    pub fn from_messages(messages: &[ChatMessage]) -> Self {
        if messages.is_empty() {
            return Self::default();
        }

        let user_messages = messages.iter().filter(|m| m.is_outgoing).count();

        let start = messages.len().saturating_sub(TRANSCRIPT_WINDOW);
        let mut conversation_text = String::new();
        for msg in &messages[start..] {
            let sender = if msg.is_outgoing { "You" } else { "Them" };
            conversation_text.push_str(&format!("{sender}: {}\n", msg.text));
        }

        Self {
            total_messages: messages.len(),
            user_messages,
            other_messages: messages.len() - user_messages,
            conversation_text,
        }
    }
}
