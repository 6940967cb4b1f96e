//! Fixed classification tables for the curator.

/// A line containing one of these (lower-cased) flips the extractor into the
/// suggestions section; the flag is never cleared.
pub const SECTION_HEADERS: [&str; 5] = [
    "suggestions:",
    "responses:",
    "options:",
    "you could say:",
    "try saying:",
];

/// Leading characters that mark a bulleted candidate line.
pub const BULLET_MARKERS: [char; 5] = ['•', '-', '*', '"', '\''];

/// Candidates containing any of these (case-insensitive) are analysis
/// language, not pasteable replies.
pub const ANALYSIS_DENYLIST: [&str; 28] = [
    "analysis",
    "insight",
    "observation",
    "assessment",
    "evaluation",
    "conclusion",
    "summary",
    "here are",
    "here is",
    "some good",
    "good responses",
    "you could send",
    "feel free",
    "choose one",
    "pick one",
    "mix and match",
    "options",
    "suggestions",
    "responses",
    "fits your style",
    "that fits",
    "based on",
    "consider",
    "might want",
    "could try",
    "you can",
    "this shows",
    "this indicates",
];

/// Closing filler sentences removed from the body by literal replacement.
pub const CLOSING_FILLERS: [&str; 15] = [
    "Feel free to choose one that fits your style!",
    "Feel free to pick one or mix and match!",
    "Choose one that feels right for you!",
    "Pick one that feels right for you!",
    "Feel free to choose one!",
    "Choose one that fits your style!",
    "Feel free to choose any of these or adjust them slightly to match your tone!",
    "Feel free to choose any of these!",
    "Choose any of these or adjust them slightly to match your tone!",
    "Choose one that feels right for the conversation!",
    "Choose one that feels right!",
    "These keep the vibe casual and enthusiastic, just like your style!",
    "These suggestions match your style perfectly!",
    "These options fit your communication style!",
    "These suggestions align with your tone!",
];

/// Body lines containing any of these (lower-cased) are dropped outright.
pub const BODY_SKIP_PHRASES: [&str; 10] = [
    "suggestions:",
    "responses:",
    "options:",
    "you could say:",
    "try saying:",
    "here are a few",
    "here are some",
    "feel free to",
    "choose one",
    "pick one",
];

/// Returned verbatim when extraction finds nothing usable.
pub const DEFAULT_SUGGESTIONS: [&str; 4] = [
    "That sounds great!",
    "I'd love to join you",
    "What time were you thinking?",
    "Thanks for thinking of me!",
];

/// Appended until the 3-suggestion minimum is met.
pub const FILLER_SUGGESTION: &str = "That sounds interesting! Tell me more.";

/// Substituted when body cleanup leaves nothing.
pub const EMPTY_BODY_PLACEHOLDER: &str =
    "Based on your conversation style, here are some good response options.";
