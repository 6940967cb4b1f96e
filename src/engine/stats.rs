//! The conversation-insights pipeline.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::assist::open_backend;
use crate::llm::{ModelClient, OpenAiClient};
use crate::memory::{CacheBackend, MemoryStore, StatsMemoryEntry, STATS_MEMORY_CAP};
use crate::stats::{
    merge_stats, stats_prompt, ConversationMetrics, StatsProfile, STATS_MAX_TOKENS,
    STATS_SYSTEM_PROMPT, STATS_TEMPERATURE,
};
use crate::tone::extract_json_object;
use crate::types::{StatsReply, StatsRequest};

/// Runs metric computation, the model call, per-field normalization, and
/// the memory write for one insights request. Infallible: every failure
/// path resolves to the fixed default profile.
pub struct StatsEngine {
    model: Option<Arc<dyn ModelClient>>,
    memory: MemoryStore<StatsMemoryEntry>,
}

impl StatsEngine {
    pub fn new(
        model: Option<Arc<dyn ModelClient>>,
        backend: Option<Arc<dyn CacheBackend>>,
    ) -> Self {
        Self {
            model,
            memory: MemoryStore::new("mentora_stats", backend),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let model = OpenAiClient::from_config(config)
            .map(|client| Arc::new(client) as Arc<dyn ModelClient>);
        Self::new(model, open_backend(config))
    }

    pub async fn stats(&self, request: &StatsRequest) -> StatsReply {
        let metrics = ConversationMetrics::from_messages(&request.chat_history);

        let model = match &self.model {
            Some(model) => model,
            None => {
                info!("no model credentials, returning default insights");
                return StatsProfile::fallback();
            }
        };

        let prompt = stats_prompt(&metrics);
        let raw = match model
            .complete(
                STATS_SYSTEM_PROMPT,
                &prompt,
                STATS_MAX_TOKENS,
                STATS_TEMPERATURE,
            )
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "insights model call failed, returning defaults");
                return StatsProfile::fallback();
            }
        };

        let parsed: Option<Value> =
            extract_json_object(&raw).and_then(|s| serde_json::from_str(s).ok());
        let value = match parsed {
            Some(value) => value,
            None => {
                warn!("insights reply unparsable, returning defaults");
                return StatsProfile::fallback();
            }
        };

        let profile = merge_stats(&value);

        let entry = StatsMemoryEntry {
            timestamp: Utc::now().to_rfc3339(),
            metrics,
            response: profile.clone(),
            chat_history_length: request.chat_history.len(),
        };
        self.memory
            .append(&request.user_id, entry, STATS_MEMORY_CAP)
            .await;

        profile
    }

    pub async fn memory_len(&self, user_id: &str) -> usize {
        self.memory.len(user_id).await
    }

    pub async fn memory_snapshot(&self, user_id: &str) -> Vec<StatsMemoryEntry> {
        self.memory.get(user_id).await
    }
}
