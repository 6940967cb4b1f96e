//! Final prompt assembly.

use crate::prompt::is_tone_change_request;
use crate::tone::ToneProfile;
use crate::types::ChatMessage;

pub const ASSIST_SYSTEM_PROMPT: &str = "You are Mentora, a helpful AI assistant that \
provides conversation advice for chat messages. Respond conversationally and \
naturally, not in JSON format.";

const CONVERSATION_WINDOW: usize = 20;

/// `build(messages, query, tone, summary) -> string`.
pub fn build_prompt(
    messages: &[ChatMessage],
    query: &str,
    tone: &ToneProfile,
    summary: &str,
) -> String {
    let conversation = render_conversation(messages);

    let tone_instructions = if is_tone_change_request(query) {
        tone_change_block(query, tone)
    } else {
        full_style_block(tone)
    };

    format!(
        "You are Mentora, an AI assistant that helps users improve their chat \
conversations. You have access to a chat history and should provide helpful, \
personalized advice.

CONVERSATION SUMMARY:
{summary}

USER'S COMMUNICATION STYLE:
{tone_instructions}

RECENT CONVERSATION:
{conversation}

USER'S QUESTION: {query}

Please provide a helpful response to their question about the conversation. Focus \
on giving actionable advice and specific suggestions for how they could respond to \
the other person in their chat.

Your response should be conversational and helpful, not in JSON format.

IMPORTANT:
- Provide analysis and advice in the main response text (not numbered suggestions)
- Include 3-4 specific response suggestions that can be copied and pasted directly \
into the chat
- Format suggestions as clear, actionable responses without quotes or numbering
- Avoid analysis text like \"This shows...\" or \"This indicates...\" in the suggestions
- Don't repeat the same text in both the response and suggestions
- ADAPT TO USER REQUESTS: If the user asks for a specific tone or style, prioritize \
their request over historical patterns

Remember: The suggestions you provide are meant to be copied and pasted into their \
conversation with the other person. They should sound like the user wrote them \
themselves."
    )
}

fn render_conversation(messages: &[ChatMessage]) -> String {
    let start = messages.len().saturating_sub(CONVERSATION_WINDOW);
    messages[start..]
        .iter()
        .map(|m| {
            let speaker = if m.is_outgoing { "You" } else { "Them" };
            format!("{}: {}\n", speaker, m.text)
        })
        .collect()
}

/// The "adopt the requested tone" branch: eight adaptation rules keyed on
/// fixed trigger words, with the literal request quoted.
fn tone_change_block(query: &str, tone: &ToneProfile) -> String {
    format!(
        "IMPORTANT: The user is requesting a specific tone/style change. Adapt your \
suggestions to match their request.

User's request: \"{query}\"

Base communication style analysis:
- Formality level: {formality}
- Response length: {length}
- Emoji usage: {emoji}
- Writing style: {writing}
- Emotional expression: {emotion}
- Empathy level: {empathy}
- Assertiveness level: {assertive}
- Humor style: {humor}
- Social distance: {distance}

ADAPTIVE INSTRUCTIONS:
- Prioritize the user's tone/style request over their historical patterns
- Generate suggestions that match the requested tone/style
- Keep suggestions authentic and natural
- If they want to sound \"cool\", make suggestions more casual and confident
- If they want to sound \"formal\", make suggestions more professional
- If they want to sound \"friendly\", make suggestions warm and approachable
- If they want to sound \"enthusiastic\", add more energy and exclamations
- If they want to sound \"playful\", add humor and lightheartedness
- If they want to sound \"empathetic\", show more understanding and care
- If they want to sound \"assertive\", be more direct and confident
- Overall, adapt the suggestions to the user's requests as much as possible.",
        formality = tone.formality_level,
        length = tone.response_length,
        emoji = tone.emoji_usage,
        writing = tone.writing_style,
        emotion = tone.emotional_expression,
        empathy = tone.empathy_level,
        assertive = tone.assertiveness_level,
        humor = tone.humor_style,
        distance = tone.social_distance,
    )
}

/// The default branch: all thirty fields in six labeled sections, each with
/// an imperative "match their X" directive.
fn full_style_block(tone: &ToneProfile) -> String {
    format!(
        "Based on the user's comprehensive communication style analysis:

COMMUNICATION METRICS:
- Formality level: {formality}
- Response length: {length}
- Emoji usage: {emoji}
- Average message length: {avg_len} words
- Question rate: {questions}
- Exclamation rate: {exclamations}

COMMUNICATION STYLE:
- Writing style: {writing}
- Greeting style: {greeting}
- Engagement style: {engagement}
- Emotional expression: {emotion}
- Conversation initiative: {initiative}

LANGUAGE PATTERNS:
- Abbreviation usage: {abbreviations}
- Capitalization style: {capitalization}
- Sentence structure: {sentences}
- Vocabulary complexity: {vocabulary}
- Punctuality style: {punctuality}

SOCIAL AND BEHAVIORAL TRAITS:
- Empathy level: {empathy}
- Assertiveness level: {assertive}
- Social distance: {distance}
- Humor style: {humor}
- Cultural references: {culture}

COMMUNICATION BEHAVIORS:
- Urgency expression: {urgency}
- Agreement style: {agreement}
- Disagreement style: {disagreement}
- Apology style: {apology}
- Gratitude style: {gratitude}
- Compliment style: {compliment}
- Boundary setting: {boundaries}

PATTERNS AND PHRASES:
- Common phrases: {phrases}
- Response patterns: {patterns}

GENERATE SUGGESTIONS THAT MATCH THE USER'S STYLE:
- Use their preferred greeting style ({greeting})
- Match their response length ({length})
- Include emojis if they use them frequently ({emoji})
- Use their formality level ({formality})
- Match their emotional expression ({emotion})
- Use their empathy level ({empathy})
- Match their assertiveness level ({assertive})
- Incorporate their humor style ({humor})
- Use their vocabulary complexity ({vocabulary})
- Match their sentence structure ({sentences})
- Use their abbreviation style ({abbreviations})
- Incorporate their common phrases and patterns
- Match their question/exclamation frequency
- Use their writing style ({writing})
- Consider their social distance preferences ({distance})
- Match their urgency expression ({urgency})
- Use their agreement/disagreement styles
- Incorporate their cultural references if any ({culture})

The suggestions should sound like they were written by the user themselves, \
matching their unique communication fingerprint.",
        formality = tone.formality_level,
        length = tone.response_length,
        emoji = tone.emoji_usage,
        avg_len = tone.avg_message_length,
        questions = tone.question_rate,
        exclamations = tone.exclamation_rate,
        writing = tone.writing_style,
        greeting = tone.greeting_style,
        engagement = tone.engagement_style,
        emotion = tone.emotional_expression,
        initiative = tone.conversation_initiative,
        abbreviations = tone.abbreviation_usage,
        capitalization = tone.capitalization_style,
        sentences = tone.sentence_structure,
        vocabulary = tone.vocabulary_complexity,
        punctuality = tone.punctuality_style,
        empathy = tone.empathy_level,
        assertive = tone.assertiveness_level,
        distance = tone.social_distance,
        humor = tone.humor_style,
        culture = tone.cultural_references,
        urgency = tone.urgency_expression,
        agreement = tone.agreement_style,
        disagreement = tone.disagreement_style,
        apology = tone.apology_style,
        gratitude = tone.gratitude_style,
        compliment = tone.compliment_style,
        boundaries = tone.boundary_setting,
        phrases = tone.common_phrases.join(", "),
        patterns = tone.response_patterns.join(", "),
    )
}
