//! The fixed 30-field tone profile.

use serde::{Deserialize, Serialize};

/// Structured description of a user's writing style. Every field is always
/// present: construction starts from the neutral default table and
/// normalization only overwrites what the model actually supplied, so a
/// partial profile cannot be observed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToneProfile {
    pub formality_level: String,
    pub response_length: String,
    pub emoji_usage: String,
    pub engagement_style: String,
    pub avg_message_length: f64,
    pub question_rate: f64,
    pub exclamation_rate: f64,
    pub common_phrases: Vec<String>,
    pub writing_style: String,
    pub greeting_style: String,
    pub response_patterns: Vec<String>,
    pub emotional_expression: String,
    pub conversation_initiative: String,
    pub punctuality_style: String,
    pub abbreviation_usage: String,
    pub capitalization_style: String,
    pub sentence_structure: String,
    pub vocabulary_complexity: String,
    pub cultural_references: String,
    pub humor_style: String,
    pub empathy_level: String,
    pub assertiveness_level: String,
    pub social_distance: String,
    pub urgency_expression: String,
    pub agreement_style: String,
    pub disagreement_style: String,
    pub apology_style: String,
    pub gratitude_style: String,
    pub compliment_style: String,
    pub boundary_setting: String,
}

impl ToneProfile {
    /// The literal default table. Returned verbatim when there are no
    /// outgoing messages to analyze, and used as the base layer of every
    /// merge.
    pub fn neutral() -> Self {
        Self {
            formality_level: "medium".to_string(),
            response_length: "short".to_string(),
            emoji_usage: "low".to_string(),
            engagement_style: "reserved".to_string(),
            avg_message_length: 0.0,
            question_rate: 0.0,
            exclamation_rate: 0.0,
            common_phrases: Vec::new(),
            writing_style: "neutral".to_string(),
            greeting_style: "standard".to_string(),
            response_patterns: Vec::new(),
            emotional_expression: "neutral".to_string(),
            conversation_initiative: "reactive".to_string(),
            punctuality_style: "standard".to_string(),
            abbreviation_usage: "low".to_string(),
            capitalization_style: "standard".to_string(),
            sentence_structure: "simple".to_string(),
            vocabulary_complexity: "medium".to_string(),
            cultural_references: "none".to_string(),
            humor_style: "none".to_string(),
            empathy_level: "medium".to_string(),
            assertiveness_level: "medium".to_string(),
            social_distance: "medium".to_string(),
            urgency_expression: "low".to_string(),
            agreement_style: "neutral".to_string(),
            disagreement_style: "neutral".to_string(),
            apology_style: "standard".to_string(),
            gratitude_style: "standard".to_string(),
            compliment_style: "standard".to_string(),
            boundary_setting: "medium".to_string(),
        }
    }

    /// Canonical key set, in declaration order. Tests assert the serialized
    /// form carries exactly these keys.
    pub const FIELD_NAMES: [&'static str; 30] = [
        "formality_level",
        "response_length",
        "emoji_usage",
        "engagement_style",
        "avg_message_length",
        "question_rate",
        "exclamation_rate",
        "common_phrases",
        "writing_style",
        "greeting_style",
        "response_patterns",
        "emotional_expression",
        "conversation_initiative",
        "punctuality_style",
        "abbreviation_usage",
        "capitalization_style",
        "sentence_structure",
        "vocabulary_complexity",
        "cultural_references",
        "humor_style",
        "empathy_level",
        "assertiveness_level",
        "social_distance",
        "urgency_expression",
        "agreement_style",
        "disagreement_style",
        "apology_style",
        "gratitude_style",
        "compliment_style",
        "boundary_setting",
    ];
}

impl Default for ToneProfile {
    fn default() -> Self {
        Self::neutral()
    }
}
