//! The conversation-advice pipeline.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::curation::curate;
use crate::error::PipelineError;
use crate::llm::{ModelClient, OpenAiClient};
use crate::memory::{
    AssistMemoryEntry, CacheBackend, MemoryStore, SqliteBackend, ASSIST_MEMORY_CAP,
};
use crate::prompt::{build_prompt, ASSIST_SYSTEM_PROMPT};
use crate::summary::summarize;
use crate::tone::ToneAnalyzer;
use crate::types::{AssistReply, AssistRequest};

const ASSIST_MAX_TOKENS: u32 = 800;
const ASSIST_TEMPERATURE: f32 = 0.7;

const NO_CREDENTIALS_RESPONSE: &str = "I can see you're having a conversation! \
To get personalized advice, please configure a model API key for the assistant.\n\n\
Based on what I can see, here are some general tips for your conversation:\n\n\
• Ask follow-up questions to show interest\n\
• Share your own experiences when relevant\n\
• Use emojis to match their energy level\n\
• Be genuine and authentic in your responses";

const NO_CREDENTIALS_SUGGESTIONS: [&str; 4] = [
    "That sounds great! What time were you thinking?",
    "I'd love to join you! Who else is coming?",
    "Thanks for thinking of me! I'll try to make it work.",
    "That's really interesting! Tell me more about that.",
];

/// Runs tone profiling, summarization, prompt building, the model call,
/// curation, and the memory write for one advice request.
pub struct AssistEngine {
    model: Option<Arc<dyn ModelClient>>,
    tone: ToneAnalyzer,
    memory: MemoryStore<AssistMemoryEntry>,
}

impl AssistEngine {
    pub fn new(
        model: Option<Arc<dyn ModelClient>>,
        backend: Option<Arc<dyn CacheBackend>>,
    ) -> Self {
        Self {
            model: model.clone(),
            tone: ToneAnalyzer::new(model),
            memory: MemoryStore::new("mentora_user", backend),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let model = OpenAiClient::from_config(config)
            .map(|client| Arc::new(client) as Arc<dyn ModelClient>);
        Self::new(model, open_backend(config))
    }

    pub async fn assist(&self, request: &AssistRequest) -> Result<AssistReply, PipelineError> {
        let tone = self.tone.analyze(&request.chat_history).await;
        let summary = summarize(&request.chat_history);
        let prompt = build_prompt(&request.chat_history, &request.user_query, &tone, &summary);

        let model = match &self.model {
            Some(model) => model,
            None => {
                // Checked condition, not a failure: answer with canned
                // content and leave the user's memory untouched.
                info!("no model credentials, returning canned advice");
                return Ok(AssistReply {
                    response: NO_CREDENTIALS_RESPONSE.to_string(),
                    suggestions: NO_CREDENTIALS_SUGGESTIONS
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                    conversation_summary: summary,
                    user_tone_analysis: tone,
                });
            }
        };

        let raw = model
            .complete(
                ASSIST_SYSTEM_PROMPT,
                &prompt,
                ASSIST_MAX_TOKENS,
                ASSIST_TEMPERATURE,
            )
            .await?;

        let curated = curate(&raw);

        let entry = AssistMemoryEntry {
            timestamp: Utc::now().to_rfc3339(),
            query: request.user_query.clone(),
            response: curated.clone(),
            tone: tone.clone(),
            summary: summary.clone(),
        };
        self.memory
            .append(&request.user_id, entry, ASSIST_MEMORY_CAP)
            .await;

        Ok(AssistReply::from_parts(curated, summary, tone))
    }

    pub async fn memory_len(&self, user_id: &str) -> usize {
        self.memory.len(user_id).await
    }

    pub async fn memory_snapshot(&self, user_id: &str) -> Vec<AssistMemoryEntry> {
        self.memory.get(user_id).await
    }
}

pub(crate) fn open_backend(config: &Config) -> Option<Arc<dyn CacheBackend>> {
    let path = config.memory_db_path.as_deref()?;
    match SqliteBackend::open(path) {
        Ok(backend) => Some(Arc::new(backend)),
        Err(e) => {
            warn!("memory cache unavailable at {path}, using in-process storage: {e}");
            None
        }
    }
}
