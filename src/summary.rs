//! Keyword-based conversation summary. Pure, no model call.

use crate::types::ChatMessage;

const SUMMARY_WINDOW: usize = 15;

/// Topic keyword groups. A topic is mentioned once if any keyword appears
/// anywhere in the lower-cased window.
const TOPIC_GROUPS: [(&str, &[&str]); 4] = [
    ("work", &["work", "job", "project", "deadline"]),
    ("social plans", &["weekend", "plan", "meet", "dinner", "lunch"]),
    ("sports", &["game", "sport", "match", "team"]),
    ("personal life", &["family", "home", "house"]),
];

/// `summarize(messages) -> string` over the last 15 messages.
pub fn summarize(messages: &[ChatMessage]) -> String {
    if messages.is_empty() {
        return "No conversation history available.".to_string();
    }

    let start = messages.len().saturating_sub(SUMMARY_WINDOW);
    let recent = &messages[start..];

    let outgoing = recent.iter().filter(|m| m.is_outgoing).count();
    let incoming = recent.len() - outgoing;

    let all_text = recent
        .iter()
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let topics: Vec<&str> = TOPIC_GROUPS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| all_text.contains(kw)))
        .map(|(topic, _)| *topic)
        .collect();

    let mut summary = format!(
        "Recent conversation with {} messages from them and {} from you. ",
        incoming, outgoing
    );

    if !topics.is_empty() {
        summary.push_str(&format!("Topics discussed: {}. ", topics.join(", ")));
    }

    if outgoing as f64 > incoming as f64 * 0.8 {
        summary.push_str("You've been quite engaged in the conversation.");
    } else if (outgoing as f64) < incoming as f64 * 0.3 {
        summary.push_str("You've been relatively quiet in this conversation.");
    } else {
        summary.push_str("You've maintained a balanced conversation flow.");
    }

    summary
}
