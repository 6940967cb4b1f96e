use super::normalizer::extract_json_object;
use super::*;
use crate::types::ChatMessage;
use serde_json::json;

fn msg(text: &str, outgoing: bool) -> ChatMessage {
    ChatMessage {
        text: text.to_string(),
        timestamp: "2024-06-01T12:00:00Z".to_string(),
        is_outgoing: outgoing,
        sender: if outgoing { "me" } else { "them" }.to_string(),
    }
}

fn profile_keys(profile: &ToneProfile) -> Vec<String> {
    match serde_json::to_value(profile).unwrap() {
        serde_json::Value::Object(map) => map.keys().cloned().collect(),
        _ => panic!("profile must serialize to an object"),
    }
}

#[tokio::test]
async fn test_empty_outgoing_returns_neutral_default_without_model() {
    // Only incoming messages: no model call, literal default table.
    let analyzer = ToneAnalyzer::new(None);
    let messages = vec![msg("hey, are you coming?", false)];

    let profile = analyzer.analyze(&messages).await;
    assert_eq!(profile, ToneProfile::neutral());
    assert_eq!(profile.formality_level, "medium");
    assert_eq!(profile.response_length, "short");
}

#[test]
fn test_heuristic_casual_exclamations() {
    let messages = [
        msg("yeah cool", true),
        msg("gonna be there!", true),
        msg("yo!", true),
    ];
    let outgoing: Vec<&ChatMessage> = messages.iter().collect();

    let profile = heuristic_profile(&outgoing);
    assert_eq!(profile.exclamation_rate, 0.67);
    assert_eq!(profile.formality_level, "casual");
    assert_eq!(profile.question_rate, 0.0);
    assert_eq!(profile.engagement_style, "reserved");
    assert_eq!(profile.response_length, "short");
    assert_eq!(profile.avg_message_length, 2.0);
}

#[test]
fn test_heuristic_is_deterministic() {
    let messages = [
        msg("indeed, therefore we should proceed 😊", true),
        msg("furthermore the deadline moved?", true),
    ];
    let outgoing: Vec<&ChatMessage> = messages.iter().collect();

    let first = heuristic_profile(&outgoing);
    let second = heuristic_profile(&outgoing);
    assert_eq!(first, second);
    assert_eq!(first.formality_level, "formal");
}

#[test]
fn test_heuristic_only_infers_six_fields() {
    let messages = [msg("what a win! amazing game today, we crushed it", true)];
    let outgoing: Vec<&ChatMessage> = messages.iter().collect();

    let profile = heuristic_profile(&outgoing);
    let neutral = ToneProfile::neutral();
    assert_eq!(profile.writing_style, neutral.writing_style);
    assert_eq!(profile.humor_style, neutral.humor_style);
    assert_eq!(profile.common_phrases, neutral.common_phrases);
    assert_eq!(profile.boundary_setting, neutral.boundary_setting);
}

#[test]
fn test_profile_always_has_exactly_thirty_keys() {
    for profile in [ToneProfile::neutral(), merge_profile(&json!({}))] {
        let keys = profile_keys(&profile);
        assert_eq!(keys.len(), 30);
        for name in ToneProfile::FIELD_NAMES {
            assert!(keys.iter().any(|k| k == name), "missing key {name}");
        }
    }
}

#[test]
fn test_merge_nested_categories() {
    let raw = json!({
        "Basic Communication Metrics": {
            "formality_level": "very casual",
            "avg_message_length": 7.5
        },
        "Communication Style": {
            "writing_style": "enthusiastic"
        },
        "Patterns and Phrases": {
            "common_phrases": ["no way", "for sure"]
        }
    });

    let profile = merge_profile(&raw);
    assert_eq!(profile.formality_level, "very casual");
    assert_eq!(profile.avg_message_length, 7.5);
    assert_eq!(profile.writing_style, "enthusiastic");
    assert_eq!(profile.common_phrases, vec!["no way", "for sure"]);
    // Fields the model omitted keep their defaults.
    assert_eq!(profile.empathy_level, "medium");
    assert_eq!(profile.question_rate, 0.0);
}

#[test]
fn test_merge_flat_object() {
    let raw = json!({
        "formality_level": "formal",
        "humor_style": "dry",
        "question_rate": 0.4
    });

    let profile = merge_profile(&raw);
    assert_eq!(profile.formality_level, "formal");
    assert_eq!(profile.humor_style, "dry");
    assert_eq!(profile.question_rate, 0.4);
    assert_eq!(profile.greeting_style, "standard");
}

#[test]
fn test_merge_never_forwards_extra_keys() {
    let raw = json!({
        "formality_level": "formal",
        "made_up_field": "should vanish"
    });

    let profile = merge_profile(&raw);
    let keys = profile_keys(&profile);
    assert_eq!(keys.len(), 30);
    assert!(!keys.iter().any(|k| k == "made_up_field"));
}

#[test]
fn test_merge_nested_wins_over_flat_when_both_present() {
    // A category key anywhere in the object selects the nested strategy;
    // stray flat fields at the root are then ignored.
    let raw = json!({
        "formality_level": "formal",
        "Communication Style": { "writing_style": "concise" }
    });

    let profile = merge_profile(&raw);
    assert_eq!(profile.writing_style, "concise");
    assert_eq!(profile.formality_level, "medium");
}

#[test]
fn test_extract_json_object_from_prose() {
    let raw = "Sure! Here is the analysis:\n{\"formality_level\": \"casual\"}\nHope it helps.";
    assert_eq!(
        extract_json_object(raw),
        Some("{\"formality_level\": \"casual\"}")
    );
    assert_eq!(extract_json_object("no braces here"), None);
    assert_eq!(extract_json_object("} reversed {"), None);
}
