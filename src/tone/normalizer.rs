//! Model-backed tone analysis and the layered-default merge.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ModelError;
use crate::llm::ModelClient;
use crate::tone::{heuristic_profile, ToneProfile};
use crate::types::ChatMessage;

const ANALYSIS_SYSTEM_PROMPT: &str = "You are an expert communication analyst. \
Provide accurate, objective analysis of communication patterns in JSON format.";

const ANALYSIS_MAX_TOKENS: u32 = 1000;
const ANALYSIS_TEMPERATURE: f32 = 0.3;
const ANALYSIS_SAMPLE_SIZE: usize = 20;

const METRICS: &str = "Basic Communication Metrics";
const STYLE: &str = "Communication Style";
const LANGUAGE: &str = "Language Patterns";
const SOCIAL: &str = "Social and Cultural Elements";
const BEHAVIORS: &str = "Communication Behaviors";
const PHRASES: &str = "Patterns and Phrases";

const CATEGORY_KEYS: [&str; 6] = [METRICS, STYLE, LANGUAGE, SOCIAL, BEHAVIORS, PHRASES];

/// Builds the user's tone profile, preferring the model and falling back to
/// the deterministic heuristic on any model or parse failure.
pub struct ToneAnalyzer {
    model: Option<Arc<dyn ModelClient>>,
}

impl ToneAnalyzer {
    pub fn new(model: Option<Arc<dyn ModelClient>>) -> Self {
        Self { model }
    }

    /// `normalize(messages) -> ToneProfile`. Infallible: every failure path
    /// resolves to either the neutral default or the heuristic fallback.
    pub async fn analyze(&self, messages: &[ChatMessage]) -> ToneProfile {
        let outgoing: Vec<&ChatMessage> = messages.iter().filter(|m| m.is_outgoing).collect();

        if outgoing.is_empty() {
            return ToneProfile::neutral();
        }

        let model = match &self.model {
            Some(model) => model,
            None => return heuristic_profile(&outgoing),
        };

        let start = outgoing.len().saturating_sub(ANALYSIS_SAMPLE_SIZE);
        let samples: Vec<&str> = outgoing[start..].iter().map(|m| m.text.as_str()).collect();
        let prompt = analysis_prompt(&samples);

        match model
            .complete(
                ANALYSIS_SYSTEM_PROMPT,
                &prompt,
                ANALYSIS_MAX_TOKENS,
                ANALYSIS_TEMPERATURE,
            )
            .await
        {
            Ok(raw) => match parse_profile(&raw) {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::warn!(error = %e, "tone analysis unparsable, using heuristic fallback");
                    heuristic_profile(&outgoing)
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "tone analysis model call failed, using heuristic fallback");
                heuristic_profile(&outgoing)
            }
        }
    }
}

fn parse_profile(raw: &str) -> Result<ToneProfile, ModelError> {
    let json_str = extract_json_object(raw)
        .ok_or_else(|| ModelError::Malformed("no JSON object in response".to_string()))?;
    let value: Value =
        serde_json::from_str(json_str).map_err(|e| ModelError::Malformed(e.to_string()))?;
    Ok(merge_profile(&value))
}

/// Extract the first-`{` .. last-`}` substring. The model may wrap its JSON
/// in prose on either side.
pub(crate) fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end > start {
        Some(&raw[start..=end])
    } else {
        None
    }
}

/// Layered-default resolver: nested category extraction first, flat
/// top-level extraction otherwise, the neutral table underneath. Pure.
///
/// Only recognized field names are copied — extra keys in the model output
/// are never forwarded.
pub fn merge_profile(raw: &Value) -> ToneProfile {
    let mut profile = ToneProfile::neutral();

    if CATEGORY_KEYS.iter().any(|k| raw.get(k).is_some()) {
        apply_fields(&mut profile, |category, field| {
            raw.get(category).and_then(|c| c.get(field))
        });
    } else {
        apply_fields(&mut profile, |_, field| raw.get(field));
    }

    profile
}

fn apply_fields<'a, F>(profile: &mut ToneProfile, lookup: F)
where
    F: Fn(&'static str, &'static str) -> Option<&'a Value>,
{
    set_str(&mut profile.formality_level, lookup(METRICS, "formality_level"));
    set_str(&mut profile.response_length, lookup(METRICS, "response_length"));
    set_str(&mut profile.emoji_usage, lookup(METRICS, "emoji_usage"));
    set_num(&mut profile.avg_message_length, lookup(METRICS, "avg_message_length"));
    set_num(&mut profile.question_rate, lookup(METRICS, "question_rate"));
    set_num(&mut profile.exclamation_rate, lookup(METRICS, "exclamation_rate"));

    set_str(&mut profile.writing_style, lookup(STYLE, "writing_style"));
    set_str(&mut profile.greeting_style, lookup(STYLE, "greeting_style"));
    set_str(&mut profile.engagement_style, lookup(STYLE, "engagement_style"));
    set_str(&mut profile.emotional_expression, lookup(STYLE, "emotional_expression"));
    set_str(
        &mut profile.conversation_initiative,
        lookup(STYLE, "conversation_initiative"),
    );

    set_str(&mut profile.abbreviation_usage, lookup(LANGUAGE, "abbreviation_usage"));
    set_str(
        &mut profile.capitalization_style,
        lookup(LANGUAGE, "capitalization_style"),
    );
    set_str(&mut profile.sentence_structure, lookup(LANGUAGE, "sentence_structure"));
    set_str(
        &mut profile.vocabulary_complexity,
        lookup(LANGUAGE, "vocabulary_complexity"),
    );
    set_str(&mut profile.punctuality_style, lookup(LANGUAGE, "punctuality_style"));

    set_str(&mut profile.cultural_references, lookup(SOCIAL, "cultural_references"));
    set_str(&mut profile.humor_style, lookup(SOCIAL, "humor_style"));
    set_str(&mut profile.empathy_level, lookup(SOCIAL, "empathy_level"));
    set_str(&mut profile.assertiveness_level, lookup(SOCIAL, "assertiveness_level"));
    set_str(&mut profile.social_distance, lookup(SOCIAL, "social_distance"));

    set_str(&mut profile.urgency_expression, lookup(BEHAVIORS, "urgency_expression"));
    set_str(&mut profile.agreement_style, lookup(BEHAVIORS, "agreement_style"));
    set_str(&mut profile.disagreement_style, lookup(BEHAVIORS, "disagreement_style"));
    set_str(&mut profile.apology_style, lookup(BEHAVIORS, "apology_style"));
    set_str(&mut profile.gratitude_style, lookup(BEHAVIORS, "gratitude_style"));
    set_str(&mut profile.compliment_style, lookup(BEHAVIORS, "compliment_style"));
    set_str(&mut profile.boundary_setting, lookup(BEHAVIORS, "boundary_setting"));

    set_list(&mut profile.common_phrases, lookup(PHRASES, "common_phrases"));
    set_list(&mut profile.response_patterns, lookup(PHRASES, "response_patterns"));
}

fn set_str(field: &mut String, value: Option<&Value>) {
    if let Some(s) = value.and_then(Value::as_str) {
        *field = s.to_string();
    }
}

fn set_num(field: &mut f64, value: Option<&Value>) {
    if let Some(n) = value.and_then(Value::as_f64) {
        *field = n;
    }
}

fn set_list(field: &mut Vec<String>, value: Option<&Value>) {
    if let Some(items) = value.and_then(Value::as_array) {
        *field = items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect();
    }
}

fn analysis_prompt(samples: &[&str]) -> String {
    let context = samples
        .iter()
        .enumerate()
        .map(|(i, text)| format!("Message {}: {}", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert in communication analysis and psychology. Analyze the \
following chat messages from a user and provide a detailed assessment of their \
communication style, tone, and personality traits.

MESSAGES TO ANALYZE:
{context}

Please analyze the user's communication patterns and provide a JSON response with \
the following fields:

1. **{METRICS}:**
   - formality_level: \"formal\", \"semi-formal\", \"casual\", or \"very casual\"
   - response_length: \"very short\", \"short\", \"medium\", \"long\", or \"very long\"
   - emoji_usage: \"none\", \"low\", \"medium\", or \"high\"
   - avg_message_length: average words per message (number)
   - question_rate: percentage of messages with questions (0.0 to 1.0)
   - exclamation_rate: percentage of messages with exclamations (0.0 to 1.0)

2. **{STYLE}:**
   - writing_style: \"concise\", \"detailed\", \"conversational\", \"formal\", \"casual\", \
\"enthusiastic\", \"reserved\", \"inquisitive\", \"assertive\", \"empathetic\", \"humorous\", or \"professional\"
   - greeting_style: \"formal\", \"casual\", \"friendly\", \"professional\", \"enthusiastic\", or \"reserved\"
   - engagement_style: \"highly engaged\", \"engaged\", \"moderately engaged\", \"reserved\", or \"passive\"
   - emotional_expression: \"expressive\", \"moderate\", \"reserved\", \"neutral\", or \"minimal\"
   - conversation_initiative: \"proactive\", \"balanced\", \"reactive\", or \"passive\"

3. **{LANGUAGE}:**
   - abbreviation_usage: \"none\", \"low\", \"medium\", or \"high\"
   - capitalization_style: \"standard\", \"all caps\", \"minimal caps\", or \"mixed\"
   - sentence_structure: \"simple\", \"complex\", \"mixed\", or \"fragmented\"
   - vocabulary_complexity: \"simple\", \"medium\", \"advanced\", or \"technical\"
   - punctuality_style: \"immediate\", \"quick\", \"standard\", \"slow\", or \"delayed\"

4. **{SOCIAL}:**
   - cultural_references: \"none\", \"few\", \"moderate\", or \"frequent\"
   - humor_style: \"none\", \"dry\", \"playful\", \"sarcastic\", \"self-deprecating\", or \"observational\"
   - empathy_level: \"high\", \"medium\", \"low\", or \"minimal\"
   - assertiveness_level: \"high\", \"medium\", \"low\", or \"passive\"
   - social_distance: \"close\", \"medium\", \"formal\", or \"distant\"

5. **{BEHAVIORS}:**
   - urgency_expression: \"high\", \"medium\", \"low\", or \"none\"
   - agreement_style: \"enthusiastic\", \"polite\", \"neutral\", \"reluctant\", or \"avoidant\"
   - disagreement_style: \"direct\", \"polite\", \"avoidant\", \"passive-aggressive\", or \"diplomatic\"
   - apology_style: \"immediate\", \"polite\", \"reluctant\", \"detailed\", or \"minimal\"
   - gratitude_style: \"enthusiastic\", \"polite\", \"minimal\", \"detailed\", or \"none\"
   - compliment_style: \"enthusiastic\", \"polite\", \"minimal\", \"detailed\", or \"none\"
   - boundary_setting: \"clear\", \"moderate\", \"unclear\", or \"none\"

6. **{PHRASES}:**
   - common_phrases: array of 3-5 most frequently used phrases or expressions
   - response_patterns: array of communication patterns like \"asks_questions\", \
\"uses_emojis\", \"gives_detailed_responses\", \"uses_abbreviations\", \"shows_empathy\", \
\"expresses_enthusiasm\", \"uses_humor\", \"shows_gratitude\", \"sets_boundaries\", \
\"expresses_urgency\", \"uses_formal_language\", \"shows_assertiveness\"

IMPORTANT GUIDELINES:
- Be objective and analytical, not judgmental
- Look for patterns across multiple messages
- Consider both explicit and implicit communication cues
- Focus on consistent patterns rather than isolated instances

Provide your analysis as a valid JSON object with ONLY the structured categories \
listed above. Do NOT include flat fields at the root level. Be precise and accurate \
in your assessments."
    )
}
