//! Suggestion extraction: a one-way state machine over lines.

use crate::curation::tables::{
    ANALYSIS_DENYLIST, BULLET_MARKERS, DEFAULT_SUGGESTIONS, FILLER_SUGGESTION, SECTION_HEADERS,
};

const MIN_SUGGESTIONS: usize = 3;
const MAX_SUGGESTIONS: usize = 4;

/// Extract, clean, deduplicate and bound the suggestion list. Output always
/// holds between 3 and 4 entries.
pub fn extract_suggestions(raw_text: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    let mut in_suggestions_section = false;

    for line in raw_text.lines() {
        let line = line.trim();
        let lowered = line.to_lowercase();

        if SECTION_HEADERS.iter().any(|h| lowered.contains(h)) {
            in_suggestions_section = true;
            continue;
        }

        if !is_candidate(line, in_suggestions_section) {
            continue;
        }

        let cleaned = clean_candidate(line);
        if cleaned.chars().count() > 5 && !contains_analysis_language(&cleaned) {
            candidates.push(cleaned);
        }
    }

    let mut suggestions = dedupe(candidates);

    if suggestions.is_empty() {
        suggestions = DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions.retain(|s| {
        let len = s.chars().count();
        len > 5 && len < 200
    });

    while suggestions.len() < MIN_SUGGESTIONS {
        suggestions.push(FILLER_SUGGESTION.to_string());
    }

    suggestions
}

fn is_candidate(line: &str, in_suggestions_section: bool) -> bool {
    if line.is_empty() {
        return false;
    }
    if in_suggestions_section {
        return true;
    }
    if line.starts_with(BULLET_MARKERS) {
        return true;
    }
    let len = line.chars().count();
    len > 10 && len < 200 && !line.starts_with("You") && !line.starts_with("Them")
}

fn clean_candidate(line: &str) -> String {
    let stripped = line.trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c == ' ');

    // "1. " style ordinal prefixes
    let stripped = match regex::Regex::new(r"^\d+\.\s*") {
        Ok(re) => re.replace(stripped, "").into_owned(),
        Err(_) => stripped.to_string(),
    };

    stripped.trim_matches(['"', '\'']).to_string()
}

fn contains_analysis_language(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    ANALYSIS_DENYLIST.iter().any(|w| lowered.contains(w))
}

fn dedupe(candidates: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
