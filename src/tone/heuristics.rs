//! Deterministic rule-based tone approximation.
//!
//! A pure function of the outgoing-message set: identical input yields
//! identical output. Infers only six of the thirty fields; the rest keep
//! their literal defaults. This is a crude approximation, not a substitute
//! for the model.

use crate::tone::ToneProfile;
use crate::types::ChatMessage;

/// Fixed small emoji set. Membership test, not a Unicode property scan.
const EMOJI_SET: [char; 10] = ['😀', '😃', '😄', '😁', '😆', '😅', '😂', '🤣', '😊', '😇'];

const FORMAL_WORDS: [&str; 7] = [
    "indeed",
    "furthermore",
    "consequently",
    "therefore",
    "thus",
    "hence",
    "moreover",
];

const CASUAL_WORDS: [&str; 9] = [
    "yeah", "cool", "awesome", "gonna", "wanna", "gotta", "hey", "hi", "yo",
];

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| EMOJI_SET.contains(&c))
}

/// Infer a tone profile from outgoing messages alone.
pub fn heuristic_profile(outgoing: &[&ChatMessage]) -> ToneProfile {
    if outgoing.is_empty() {
        return ToneProfile::neutral();
    }

    let count = outgoing.len() as f64;
    let total_words: usize = outgoing.iter().map(|m| m.word_count()).sum();
    let avg_length = total_words as f64 / count;

    let emoji_count = outgoing.iter().filter(|m| contains_emoji(&m.text)).count() as f64;
    let question_count = outgoing.iter().filter(|m| m.text.contains('?')).count() as f64;
    let exclamation_count = outgoing.iter().filter(|m| m.text.contains('!')).count() as f64;

    let all_text = outgoing
        .iter()
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let formal_hits = FORMAL_WORDS.iter().filter(|w| all_text.contains(*w)).count();
    let casual_hits = CASUAL_WORDS.iter().filter(|w| all_text.contains(*w)).count();

    let formality_level = if formal_hits > casual_hits {
        "formal"
    } else if casual_hits > formal_hits {
        "casual"
    } else {
        "medium"
    };

    let response_length = if avg_length > 12.0 {
        "long"
    } else if avg_length < 5.0 {
        "short"
    } else {
        "medium"
    };

    let emoji_usage = if emoji_count > count * 0.3 {
        "high"
    } else if emoji_count < count * 0.1 {
        "low"
    } else {
        "medium"
    };

    let engagement_style = if question_count < count * 0.2 {
        "reserved"
    } else {
        "engaged"
    };

    ToneProfile {
        formality_level: formality_level.to_string(),
        response_length: response_length.to_string(),
        emoji_usage: emoji_usage.to_string(),
        engagement_style: engagement_style.to_string(),
        avg_message_length: round1(avg_length),
        question_rate: round2(question_count / count),
        exclamation_rate: round2(exclamation_count / count),
        ..ToneProfile::neutral()
    }
}
