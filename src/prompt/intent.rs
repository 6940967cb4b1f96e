//! Tone-change request detection.

/// Trigger table for the tone-change branch. A plain membership test over
/// the lower-cased query; false positives are accepted.
const TONE_CHANGE_KEYWORDS: [&str; 18] = [
    "cool",
    "casual",
    "formal",
    "professional",
    "friendly",
    "enthusiastic",
    "serious",
    "funny",
    "playful",
    "romantic",
    "flirty",
    "business",
    "tone",
    "style",
    "sound",
    "make it",
    "change",
    "different",
];

pub fn is_tone_change_request(query: &str) -> bool {
    let lowered = query.to_lowercase();
    TONE_CHANGE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
