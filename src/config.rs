//! Environment-derived configuration.
//!
//! Credentials may legitimately be absent: the pipeline then serves canned
//! content instead of calling the model, so `api_key` is an `Option`, not a
//! required variable.

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub model: String,
    pub api_key: Option<String>,
    pub api_url: String,
    /// Path of the sqlite file backing the durable memory cache. `None`
    /// keeps memory in-process only.
    pub memory_db_path: Option<String>,
}

impl Config {
    /// Read configuration from the environment (`.env` honored).
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        let api_key = std::env::var("API_KEY").ok().filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("API_KEY not set; model calls disabled, serving canned content");
        }

        Self {
            model: std::env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_key,
            api_url: std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            memory_db_path: std::env::var("MEMORY_DB_PATH").ok(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            memory_db_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_credentials() {
        let config = Config::default();
        assert!(!config.has_credentials());
        assert_eq!(config.model, "gpt-4o-mini");
    }
}
