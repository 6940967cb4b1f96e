use super::tables::{DEFAULT_SUGGESTIONS, FILLER_SUGGESTION};
use super::*;

#[test]
fn test_bulleted_suggestions_extracted_and_padded() {
    let raw = "Here are some suggestions:\n\
               • That sounds great!\n\
               • I'd love to join you\n\
               Analysis: this shows enthusiasm";

    let curated = curate(raw);
    assert_eq!(
        curated.suggestions,
        vec![
            "That sounds great!".to_string(),
            "I'd love to join you".to_string(),
            FILLER_SUGGESTION.to_string(),
        ]
    );
    assert!(!curated.response.contains("this shows"));
    assert!(!curated.response.contains("That sounds great!"));
}

#[test]
fn test_suggestion_bounds_hold() {
    let raw = "Suggestions:\n\
               Sounds perfect, see you there!\n\
               I'll bring the snacks this time\n\
               Let's do Saturday instead, works better for me\n\
               Count me in for sure, wouldn't miss it\n\
               Honestly I can't wait, it's been too long";

    let suggestions = extract_suggestions(raw);
    assert!(suggestions.len() >= 3 && suggestions.len() <= 4);
    for s in &suggestions {
        let len = s.chars().count();
        assert!(len > 5 && len < 200, "bad length for {s:?}");
    }
}

#[test]
fn test_duplicates_removed_first_seen_order() {
    let raw = "You could say:\n\
               - Sounds perfect, see you there!\n\
               - Happy to help with the move\n\
               - Sounds perfect, see you there!";

    let suggestions = extract_suggestions(raw);
    assert_eq!(suggestions[0], "Sounds perfect, see you there!");
    assert_eq!(suggestions[1], "Happy to help with the move");
    let unique: std::collections::HashSet<_> = suggestions.iter().collect();
    assert_eq!(unique.len(), suggestions.len());
}

#[test]
fn test_ordinal_and_quote_prefixes_stripped() {
    let raw = "Try saying:\n\
               1. \"Absolutely, count me in\"\n\
               2. 'Give me ten minutes'";

    let suggestions = extract_suggestions(raw);
    assert_eq!(suggestions[0], "Absolutely, count me in");
    assert_eq!(suggestions[1], "Give me ten minutes");
}

#[test]
fn test_empty_extraction_falls_back_to_default_set() {
    let raw = "Short.\nOk.";
    let suggestions = extract_suggestions(raw);
    assert_eq!(
        suggestions,
        DEFAULT_SUGGESTIONS
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_speaker_lines_are_not_candidates() {
    let raw = "You: are we still on for tonight?\n\
               Them: yes, looking forward to it!";
    let suggestions = extract_suggestions(raw);
    // Nothing extractable, so the default set applies.
    assert_eq!(suggestions.len(), 4);
    assert_eq!(suggestions[0], "That sounds great!");
}

#[test]
fn test_filler_stripping_is_idempotent() {
    let raw = "Good advice here. Feel free to choose one that fits your style!";
    let once = strip_closing_fillers(raw);
    let twice = strip_closing_fillers(&once);
    assert_eq!(once, twice);
    assert!(!once.contains("Feel free"));
}

#[test]
fn test_body_placeholder_when_everything_removed() {
    let raw = "Suggestions:\n• That sounds great, count me in!";
    let curated = curate(raw);
    assert_eq!(
        curated.response,
        "Based on your conversation style, here are some good response options."
    );
}

#[test]
fn test_blank_runs_collapse() {
    let raw = "Based on the vibe, you can ask about timing directly.\n\n\n\
               Consider mentioning the weekend plans as well.";
    let curated = curate(raw);
    assert!(!curated.response.contains("\n\n"));
    assert!(curated.response.contains("ask about timing"));
    assert!(curated.response.contains("weekend plans"));
}
