//! Per-user interaction memory: a durable TTL cache with an in-process
//! mirror that keeps requests working when the cache is down.

mod backend;
mod entry;
mod store;

pub use backend::{CacheBackend, SqliteBackend};
pub use entry::{AssistMemoryEntry, StatsMemoryEntry};
pub use store::{MemoryStore, ASSIST_MEMORY_CAP, MEMORY_TTL_SECS, STATS_MEMORY_CAP};
