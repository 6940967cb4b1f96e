//! Mentora: conversation coaching over chat transcripts.
//!
//! Two pipelines share the stages in this crate. The advice pipeline
//! profiles the user's tone, summarizes the recent exchange, builds a
//! style-matched prompt, and curates the model's free-text reply into an
//! advice body plus pasteable suggestions. The insights pipeline computes
//! conversation metrics and normalizes the model's JSON into a fixed
//! five-group report. Both record per-user history in a bounded,
//! TTL-backed memory store and degrade gracefully when the model or the
//! cache is unavailable.

pub mod config;
pub mod curation;
pub mod engine;
pub mod error;
pub mod llm;
pub mod memory;
pub mod prompt;
pub mod stats;
pub mod summary;
pub mod tone;
pub mod types;

pub use config::Config;
pub use engine::{AssistEngine, StatsEngine};
pub use error::{CacheError, ModelError, PipelineError};
pub use types::{AssistReply, AssistRequest, ChatMessage, StatsReply, StatsRequest};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
