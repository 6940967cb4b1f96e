//! Insights prompt rendering and per-field normalization of the model's
//! JSON into a [`StatsProfile`].

use serde_json::Value;

use crate::stats::metrics::ConversationMetrics;
use crate::stats::profile::{StatsProfile, TopicShare};

pub const STATS_SYSTEM_PROMPT: &str = "You are Mentora, an AI assistant that \
    analyzes chat conversations and provides insights. Return only valid JSON \
    in the exact format requested.";

pub const STATS_MAX_TOKENS: u32 = 1000;
pub const STATS_TEMPERATURE: f32 = 0.3;

/// Render the insights prompt from precomputed metrics.
pub fn stats_prompt(metrics: &ConversationMetrics) -> String {
    format!(
        r#"You are Mentora, an expert AI assistant that analyzes chat conversations and provides comprehensive insights. Your task is to analyze the conversation below and generate detailed statistics and insights.

CONVERSATION DATA:
- Total Messages: {total}
- Your Messages: {user}
- Their Messages: {other}

CONVERSATION HISTORY:
{transcript}

ANALYSIS INSTRUCTIONS:

1. CONVERSATION DYNAMICS:
   Analyze the overall energy and engagement level of the conversation:
   - energy_balance: Determine "Low", "Medium", or "High" based on:
     * Exclamation marks and enthusiasm indicators
     * Emoji usage frequency and variety
     * Overall tone and excitement level
     * Use of positive language and expressions

   - engagement_level: Determine "Low", "Medium", or "High" based on:
     * Response frequency and timing
     * Question asking patterns
     * Active participation vs passive responses
     * Interest shown in the other person's messages

2. RESPONSE PATTERNS:
   Analyze the communication patterns in detail:
   - avg_response_time: Estimate based on conversation flow, message timing, and response patterns (e.g., "2m", "5m", "10m", "15m")
   - words_per_message: Calculate average words per message from the user's messages
   - question_rate: Calculate percentage of user messages that contain questions
   - emoji_usage: Determine "Low", "Medium", or "High" based on emoji frequency in user messages

3. CONVERSATION TOPICS:
   Identify the main topics discussed and their relative importance:
   - Analyze all messages for topic keywords and themes
   - Calculate percentage distribution of topics
   - Include 3-4 most prominent topics
   - Topics can include: Sports, Work/Life Balance, Social Plans, Personal Life, Technology, Travel, Entertainment, Food, Family, etc.

4. THEIR COMMUNICATION STYLE:
   Analyze the other person's communication patterns and provide 5-6 specific insights:
   - Look for patterns in their messaging style
   - Identify their tone, formality level, and engagement style
   - Note how they initiate conversations and respond
   - Consider their use of emojis, questions, and expressions
   - Examples: "Uses enthusiasm to engage (exclamation marks)", "Shows genuine concern for your wellbeing", "Initiates social activities"

5. GENERAL CONVERSATION TIPS:
   Provide 5-6 actionable, specific tips based on the conversation analysis:
   - Tips should be personalized to this specific conversation
   - Focus on improving engagement and connection
   - Consider the other person's communication style
   - Make tips practical and implementable
   - Examples: "Match their energy - they're enthusiastic!", "Ask follow-up questions to show interest"

IMPORTANT ANALYSIS GUIDELINES:
- Be thorough and analytical in your assessment
- Consider context, tone, and relationship dynamics
- Look for patterns across the entire conversation
- Provide specific, actionable insights
- Ensure all percentages and metrics are realistic and well-calculated
- Make the analysis feel personalized and relevant

Return ONLY valid JSON with this exact structure:
{{
  "conversation_dynamics": {{
    "energy_balance": "Low/Medium/High",
    "engagement_level": "Low/Medium/High"
  }},
  "response_patterns": {{
    "avg_response_time": "Xm",
    "words_per_message": X,
    "question_rate": "X%",
    "emoji_usage": "Low/Medium/High"
  }},
  "conversation_topics": {{
    "topics": [
      {{"topic": "Topic Name", "percentage": "X%"}}
    ]
  }},
  "communication_style": {{
    "style_points": [
      "Point 1",
      "Point 2",
      "Point 3",
      "Point 4",
      "Point 5"
    ]
  }},
  "conversation_tips": {{
    "tips": [
      "Tip 1",
      "Tip 2",
      "Tip 3",
      "Tip 4",
      "Tip 5"
    ]
  }}
}}"#,
        total = metrics.total_messages,
        user = metrics.user_messages,
        other = metrics.other_messages,
        transcript = metrics.conversation_text,
    )
}

/// Fold a parsed model reply into the default profile, field by field. Each
/// field keeps its own default when the reply omits it or gives it the wrong
/// shape, so one bad group never discards the rest.
pub fn merge_stats(raw: &Value) -> StatsProfile {
    let mut profile = StatsProfile::fallback();

    if let Some(s) = str_at(raw, "conversation_dynamics", "energy_balance") {
        profile.conversation_dynamics.energy_balance = s;
    }
    if let Some(s) = str_at(raw, "conversation_dynamics", "engagement_level") {
        profile.conversation_dynamics.engagement_level = s;
    }

    if let Some(s) = str_at(raw, "response_patterns", "avg_response_time") {
        profile.response_patterns.avg_response_time = s;
    }
    if let Some(n) = raw
        .get("response_patterns")
        .and_then(|g| g.get("words_per_message"))
        .and_then(Value::as_i64)
    {
        profile.response_patterns.words_per_message = n;
    }
    if let Some(s) = str_at(raw, "response_patterns", "question_rate") {
        profile.response_patterns.question_rate = s;
    }
    if let Some(s) = str_at(raw, "response_patterns", "emoji_usage") {
        profile.response_patterns.emoji_usage = s;
    }

    if let Some(topics) = topic_list(raw) {
        profile.conversation_topics.topics = topics;
    }
    if let Some(points) = string_list(raw, "communication_style", "style_points") {
        profile.communication_style.style_points = points;
    }
    if let Some(tips) = string_list(raw, "conversation_tips", "tips") {
        profile.conversation_tips.tips = tips;
    }

    profile
}

fn str_at(raw: &Value, group: &str, field: &str) -> Option<String> {
    raw.get(group)?
        .get(field)?
        .as_str()
        .map(|s| s.to_string())
}

fn string_list(raw: &Value, group: &str, field: &str) -> Option<Vec<String>> {
    let items = raw.get(group)?.get(field)?.as_array()?;
    let strings: Vec<String> = items
        .iter()
        .filter_map(|v| v.as_str())
        .map(|s| s.to_string())
        .collect();
    if strings.is_empty() {
        None
    } else {
        Some(strings)
    }
}

fn topic_list(raw: &Value) -> Option<Vec<TopicShare>> {
    let items = raw.get("conversation_topics")?.get("topics")?.as_array()?;
    let topics: Vec<TopicShare> = items
        .iter()
        .filter_map(|item| {
            Some(TopicShare {
                topic: item.get("topic")?.as_str()?.to_string(),
                percentage: item.get("percentage")?.as_str()?.to_string(),
            })
        })
        .collect();
    if topics.is_empty() {
        None
    } else {
        Some(topics)
    }
}
