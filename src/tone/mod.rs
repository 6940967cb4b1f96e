//! Tone profiling: model-backed analysis of the user's outgoing messages,
//! normalized into a fixed 30-field profile, with a deterministic
//! rule-based fallback when the model is unavailable or unparsable.

mod heuristics;
mod normalizer;
mod profile;

pub use heuristics::heuristic_profile;
pub(crate) use normalizer::extract_json_object;
pub use normalizer::{merge_profile, ToneAnalyzer};
pub use profile::ToneProfile;

#[cfg(test)]
mod tests;
