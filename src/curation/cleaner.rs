//! Body cleanup: remove closing filler, headers, and extracted suggestions
//! from the raw model text.

use crate::curation::tables::{
    BODY_SKIP_PHRASES, CLOSING_FILLERS, EMPTY_BODY_PLACEHOLDER, SECTION_HEADERS,
};

/// Remove the fixed closing-filler sentences by literal replacement.
/// Idempotent: re-running on already-cleaned text is a no-op.
pub fn strip_closing_fillers(text: &str) -> String {
    let mut cleaned = text.to_string();
    for filler in CLOSING_FILLERS {
        cleaned = cleaned.replace(filler, "");
    }
    cleaned
}

/// Produce the advice body from the raw model text, with the already
/// extracted `suggestions` removed so nothing appears in both places.
///
/// Follows the same one-way section transition as the extractor: once a
/// suggestions header is seen, the remaining lines belong to the suggestion
/// stream and never to the body.
pub fn clean_body(raw_text: &str, suggestions: &[String]) -> String {
    let without_fillers = strip_closing_fillers(raw_text);

    let mut in_suggestions_section = false;
    let mut kept: Vec<&str> = Vec::new();

    for line in without_fillers.lines() {
        let line = line.trim();
        let lowered = line.to_lowercase();

        if SECTION_HEADERS.iter().any(|h| lowered.contains(h)) {
            in_suggestions_section = true;
            continue;
        }
        if in_suggestions_section || is_skippable(line, &lowered, suggestions) {
            continue;
        }
        kept.push(line);
    }

    let joined = kept.join("\n");
    let collapsed = match regex::Regex::new(r"\n\s*\n") {
        Ok(re) => re.replace_all(&joined, "\n").into_owned(),
        Err(_) => joined,
    };

    let body = collapsed.trim().to_string();
    if body.is_empty() {
        EMPTY_BODY_PLACEHOLDER.to_string()
    } else {
        body
    }
}

fn is_skippable(line: &str, lowered: &str, suggestions: &[String]) -> bool {
    if BODY_SKIP_PHRASES.iter().any(|p| lowered.contains(p)) {
        return true;
    }
    // Bulleted source lines still carry their markers, so containment
    // rather than equality decides whether a line restates a suggestion.
    suggestions
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .any(|s| line.contains(s))
}
