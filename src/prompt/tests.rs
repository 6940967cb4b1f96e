use super::*;
use crate::tone::ToneProfile;
use crate::types::ChatMessage;

fn msg(text: &str, outgoing: bool) -> ChatMessage {
    ChatMessage {
        text: text.to_string(),
        timestamp: "2024-06-01T12:00:00Z".to_string(),
        is_outgoing: outgoing,
        sender: if outgoing { "me" } else { "them" }.to_string(),
    }
}

#[test]
fn test_tone_change_detection() {
    assert!(is_tone_change_request("can you make this sound more formal?"));
    assert!(is_tone_change_request("MAKE IT COOL"));
    assert!(!is_tone_change_request("what should I reply to her?"));
}

#[test]
fn test_tone_change_branch_quotes_request() {
    let query = "can you make this sound more formal?";
    let prompt = build_prompt(&[], query, &ToneProfile::neutral(), "summary");

    assert!(prompt.contains("requesting a specific tone/style change"));
    assert!(prompt.contains(&format!("User's request: \"{}\"", query)));
    // The full 30-field enumeration belongs to the other branch.
    assert!(!prompt.contains("COMMUNICATION BEHAVIORS:"));
}

#[test]
fn test_default_branch_enumerates_all_sections() {
    let prompt = build_prompt(
        &[],
        "what should I reply to her?",
        &ToneProfile::neutral(),
        "summary",
    );

    for section in [
        "COMMUNICATION METRICS:",
        "COMMUNICATION STYLE:",
        "LANGUAGE PATTERNS:",
        "SOCIAL AND BEHAVIORAL TRAITS:",
        "COMMUNICATION BEHAVIORS:",
        "PATTERNS AND PHRASES:",
    ] {
        assert!(prompt.contains(section), "missing section {section}");
    }
    assert!(prompt.contains("GENERATE SUGGESTIONS THAT MATCH THE USER'S STYLE:"));
}

#[test]
fn test_conversation_rendered_with_speaker_labels() {
    let messages = vec![msg("dinner on saturday?", false), msg("count me in", true)];
    let prompt = build_prompt(
        &messages,
        "what should I reply to her?",
        &ToneProfile::neutral(),
        "summary",
    );

    assert!(prompt.contains("Them: dinner on saturday?"));
    assert!(prompt.contains("You: count me in"));
}

#[test]
fn test_conversation_window_is_twenty_messages() {
    let messages: Vec<ChatMessage> = (0..25).map(|i| msg(&format!("m{i}"), true)).collect();
    let prompt = build_prompt(
        &messages,
        "what should I reply?",
        &ToneProfile::neutral(),
        "summary",
    );

    assert!(!prompt.contains("You: m4\n"));
    assert!(prompt.contains("You: m5\n"));
    assert!(prompt.contains("You: m24\n"));
}
