//! Response curation: reverse-engineer a clean advice body and a bounded,
//! deduplicated suggestion list from unstructured model prose.
//!
//! Classification rules live in [`tables`] as data; the extractor is a
//! one-way `outside -> inside` state machine over lines.

mod cleaner;
mod extractor;
mod tables;

pub use cleaner::{clean_body, strip_closing_fillers};
pub use extractor::extract_suggestions;

use serde::{Deserialize, Serialize};

/// Curated model output: advice body plus 3-4 pasteable suggestions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CuratedReply {
    pub response: String,
    pub suggestions: Vec<String>,
}

/// `curate(raw_text) -> {response, suggestions}`.
pub fn curate(raw_text: &str) -> CuratedReply {
    let suggestions = extract_suggestions(raw_text);
    let response = clean_body(raw_text, &suggestions);
    CuratedReply {
        response,
        suggestions,
    }
}

#[cfg(test)]
mod tests;
