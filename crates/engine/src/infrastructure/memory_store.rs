//! In-memory key-value store for development and testing
//!
//! Nothing is persisted; contents vanish with the process.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::infrastructure::ports::{KvStore, RepoError};

#[derive(Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepoError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepoError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
