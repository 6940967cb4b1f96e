use serde_json::json;

use super::*;
use crate::types::ChatMessage;

fn msg(text: &str, outgoing: bool) -> ChatMessage {
    ChatMessage {
        text: text.to_string(),
        timestamp: "2026-08-30T12:00:00Z".to_string(),
        is_outgoing: outgoing,
        sender: if outgoing { "me" } else { "them" }.to_string(),
    }
}

#[test]
fn test_metrics_count_both_sides() {
    let messages = vec![
        msg("hey", false),
        msg("hi!", true),
        msg("free tonight?", false),
    ];
    let metrics = ConversationMetrics::from_messages(&messages);
    assert_eq!(metrics.total_messages, 3);
    assert_eq!(metrics.user_messages, 1);
    assert_eq!(metrics.other_messages, 2);
    assert_eq!(metrics.conversation_text, "Them: hey\nYou: hi!\nThem: free tonight?\n");
}

#[test]
fn test_metrics_empty_history() {
    let metrics = ConversationMetrics::from_messages(&[]);
    assert_eq!(metrics, ConversationMetrics::default());
    assert!(metrics.conversation_text.is_empty());
}

#[test]
fn test_metrics_transcript_window_is_fifty() {
    let messages: Vec<ChatMessage> = (0..60).map(|i| msg(&format!("m{i}"), i % 2 == 0)).collect();
    let metrics = ConversationMetrics::from_messages(&messages);
    assert_eq!(metrics.total_messages, 60);
    assert!(!metrics.conversation_text.contains("m9\n"));
    assert!(metrics.conversation_text.contains("m10\n"));
    assert!(metrics.conversation_text.contains("m59\n"));
}

#[test]
fn test_merge_keeps_per_field_defaults() {
    let raw = json!({
        "conversation_dynamics": {"energy_balance": "High"},
        "response_patterns": {"words_per_message": 14},
    });
    let profile = merge_stats(&raw);
    assert_eq!(profile.conversation_dynamics.energy_balance, "High");
    assert_eq!(profile.conversation_dynamics.engagement_level, "Medium");
    assert_eq!(profile.response_patterns.words_per_message, 14);
    assert_eq!(profile.response_patterns.avg_response_time, "5m");
    assert_eq!(profile.conversation_topics.topics[0].topic, "General Conversation");
}

#[test]
fn test_merge_full_reply_overrides_everything() {
    let raw = json!({
        "conversation_dynamics": {"energy_balance": "High", "engagement_level": "Low"},
        "response_patterns": {
            "avg_response_time": "2m",
            "words_per_message": 11,
            "question_rate": "35%",
            "emoji_usage": "High"
        },
        "conversation_topics": {
            "topics": [
                {"topic": "Sports", "percentage": "60%"},
                {"topic": "Food", "percentage": "40%"}
            ]
        },
        "communication_style": {"style_points": ["Initiates social activities"]},
        "conversation_tips": {"tips": ["Match their energy - they're enthusiastic!"]}
    });
    let profile = merge_stats(&raw);
    assert_eq!(profile.response_patterns.question_rate, "35%");
    assert_eq!(profile.conversation_topics.topics.len(), 2);
    assert_eq!(profile.conversation_topics.topics[1].topic, "Food");
    assert_eq!(
        profile.communication_style.style_points,
        vec!["Initiates social activities".to_string()]
    );
    assert_eq!(
        profile.conversation_tips.tips,
        vec!["Match their energy - they're enthusiastic!".to_string()]
    );
}

#[test]
fn test_merge_wrong_shapes_fall_back_per_field() {
    let raw = json!({
        "conversation_dynamics": {"energy_balance": 3},
        "response_patterns": {"words_per_message": "eight"},
        "conversation_topics": {"topics": ["Sports"]},
        "communication_style": {"style_points": []},
    });
    let profile = merge_stats(&raw);
    assert_eq!(profile, StatsProfile::fallback());
}

#[test]
fn test_prompt_carries_counts_and_transcript() {
    let messages = vec![msg("lunch tomorrow?", false), msg("sure, noon works", true)];
    let metrics = ConversationMetrics::from_messages(&messages);
    let prompt = stats_prompt(&metrics);
    assert!(prompt.contains("Total Messages: 2"));
    assert!(prompt.contains("Your Messages: 1"));
    assert!(prompt.contains("Them: lunch tomorrow?"));
    assert!(prompt.contains("Return ONLY valid JSON"));
}
