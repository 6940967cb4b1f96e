//! Bounded per-user history over a durable cache with an in-process mirror.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::memory::backend::CacheBackend;

pub const MEMORY_TTL_SECS: i64 = 86400 * 30;
pub const ASSIST_MEMORY_CAP: usize = 50;
pub const STATS_MEMORY_CAP: usize = 20;

/// Per-user entry history, capped at append time.
///
/// Reads prefer the durable backend and fall back to the mirror; writes
/// always land in the mirror and are attempted against the backend, with
/// backend failures logged and swallowed. Appends for one user serialize on
/// a per-user lock, so two concurrent interactions cannot both read the same
/// history and erase each other's entry.
pub struct MemoryStore<T> {
    namespace: &'static str,
    backend: Option<Arc<dyn CacheBackend>>,
    mirror: Mutex<HashMap<String, Vec<T>>>,
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<T> MemoryStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send,
{
    pub fn new(namespace: &'static str, backend: Option<Arc<dyn CacheBackend>>) -> Self {
        Self {
            namespace,
            backend,
            mirror: Mutex::new(HashMap::new()),
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    fn key(&self, user_id: &str) -> String {
        format!("{}_{}", self.namespace, user_id)
    }

    pub async fn get(&self, user_id: &str) -> Vec<T> {
        if let Some(backend) = &self.backend {
            match backend.get(&self.key(user_id)) {
                Ok(Some(payload)) => match serde_json::from_str(&payload) {
                    Ok(entries) => return entries,
                    Err(e) => warn!("discarding corrupt memory payload for {user_id}: {e}"),
                },
                Ok(None) => {}
                Err(e) => warn!("cache read failed for {user_id}, using mirror: {e}"),
            }
        }
        self.mirror
            .lock()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn put(&self, user_id: &str, entries: Vec<T>) {
        if let Some(backend) = &self.backend {
            match serde_json::to_string(&entries) {
                Ok(payload) => {
                    if let Err(e) = backend.set(&self.key(user_id), &payload, MEMORY_TTL_SECS) {
                        error!("cache write failed for {user_id}: {e}");
                    }
                }
                Err(e) => error!("memory serialization failed for {user_id}: {e}"),
            }
        }
        self.mirror
            .lock()
            .await
            .insert(user_id.to_string(), entries);
    }

    /// Append one entry and truncate to the newest `cap`. The whole
    /// read-modify-write runs under this user's lock.
    pub async fn append(&self, user_id: &str, entry: T, cap: usize) {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        let mut entries = self.get(user_id).await;
        entries.push(entry);
        if entries.len() > cap {
            entries.drain(..entries.len() - cap);
        }
        self.put(user_id, entries).await;
    }

    pub async fn len(&self, user_id: &str) -> usize {
        self.get(user_id).await.len()
    }

    async fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        self.user_locks
            .lock()
            .await
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
