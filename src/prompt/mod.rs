//! Prompt construction for the assistant pipeline: render the recent
//! conversation, detect explicit tone-change requests, and inject the
//! matching instruction block.

mod builder;
mod intent;

pub use builder::{build_prompt, ASSIST_SYSTEM_PROMPT};
pub use intent::is_tone_change_request;

#[cfg(test)]
mod tests;
