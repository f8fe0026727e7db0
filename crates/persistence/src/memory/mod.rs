//! In-memory flag store for tests and offline evaluation

use crate::store::FlagStore;
use async_trait::async_trait;
use scoredex_core::{Error, Result};
use std::collections::HashSet;
use std::sync::Mutex;

/// Thread-safe in-memory flag set for a single user
#[derive(Default)]
pub struct MemoryFlagStore {
    flags: Mutex<HashSet<String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of flags currently recorded
    pub fn len(&self) -> usize {
        self.flags.lock().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn flags(&self) -> Result<HashSet<String>> {
        let flags = self
            .flags
            .lock()
            .map_err(|_| Error::DatabaseError("flag store lock poisoned".into()))?;
        Ok(flags.clone())
    }

    async fn add_flag(&self, key: &str) -> Result<()> {
        let mut flags = self
            .flags
            .lock()
            .map_err(|_| Error::DatabaseError("flag store lock poisoned".into()))?;
        flags.insert(key.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut flags = self
            .flags
            .lock()
            .map_err(|_| Error::DatabaseError("flag store lock poisoned".into()))?;
        flags.clear();
        Ok(())
    }
}
