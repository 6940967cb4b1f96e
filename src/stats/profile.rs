//! The fixed five-group insights schema.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConversationDynamics {
    pub energy_balance: String,
    pub engagement_level: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponsePatterns {
    pub avg_response_time: String,
    pub words_per_message: i64,
    pub question_rate: String,
    pub emoji_usage: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicShare {
    pub topic: String,
    pub percentage: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConversationTopics {
    pub topics: Vec<TopicShare>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommunicationStyle {
    pub style_points: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConversationTips {
    pub tips: Vec<String>,
}

/// Always-complete insights report. Like [`crate::tone::ToneProfile`],
/// construction starts from the default table, so a partial profile cannot
/// be observed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatsProfile {
    pub conversation_dynamics: ConversationDynamics,
    pub response_patterns: ResponsePatterns,
    pub conversation_topics: ConversationTopics,
    pub communication_style: CommunicationStyle,
    pub conversation_tips: ConversationTips,
}

impl StatsProfile {
    /// The one fixed default profile, returned verbatim on missing
    /// credentials, model failure, or an unparsable reply.
    pub fn fallback() -> Self {
        Self {
            conversation_dynamics: ConversationDynamics {
                energy_balance: "Medium".to_string(),
                engagement_level: "Medium".to_string(),
            },
            response_patterns: ResponsePatterns {
                avg_response_time: "5m".to_string(),
                words_per_message: 8,
                question_rate: "20%".to_string(),
                emoji_usage: "Medium".to_string(),
            },
            conversation_topics: ConversationTopics {
                topics: vec![TopicShare {
                    topic: "General Conversation".to_string(),
                    percentage: "100%".to_string(),
                }],
            },
            communication_style: CommunicationStyle {
                style_points: vec![
                    "Shows interest in conversation".to_string(),
                    "Responds to messages".to_string(),
                    "Maintains conversation flow".to_string(),
                    "Uses appropriate tone".to_string(),
                    "Engages in dialogue".to_string(),
                ],
            },
            conversation_tips: ConversationTips {
                tips: vec![
                    "Ask follow-up questions to show interest".to_string(),
                    "Share your own experiences when relevant".to_string(),
                    "Use emojis to match their energy level".to_string(),
                    "Be genuine and authentic in your responses".to_string(),
                    "Show appreciation for their messages".to_string(),
                ],
            },
        }
    }
}

impl Default for StatsProfile {
    fn default() -> Self {
        Self::fallback()
    }
}
