//! Insights pipeline: conversation metrics and the fixed-schema stats
//! profile. Sibling of the tone normalizer, with one difference — there is
//! no heuristic branch here. Any model or parse failure resolves to one
//! fixed default profile.

mod metrics;
mod normalizer;
mod profile;

pub use metrics::ConversationMetrics;
pub use normalizer::{
    merge_stats, stats_prompt, STATS_MAX_TOKENS, STATS_SYSTEM_PROMPT, STATS_TEMPERATURE,
};
pub use profile::{
    CommunicationStyle, ConversationDynamics, ConversationTips, ConversationTopics,
    ResponsePatterns, StatsProfile, TopicShare,
};

#[cfg(test)]
mod tests;
