//! Model collaborator boundary.
//!
//! The pipeline only ever sees [`ModelClient`]: one completion call that
//! either yields text or fails with a [`ModelError`]. The concrete
//! [`OpenAiClient`] speaks the OpenAI-compatible chat-completions wire
//! format over HTTP.

mod client;

pub use client::OpenAiClient;

use crate::error::ModelError;

/// `complete(system, user, max_tokens, temperature) -> text`.
#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ModelError>;
}
