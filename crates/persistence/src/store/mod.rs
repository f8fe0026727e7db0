//! Flag store abstraction for milestone tracking
//!
//! A store instance is already scoped to a single user; the milestone
//! detector receives one at construction and never sees user ids.

use async_trait::async_trait;
use scoredex_core::{Result, TrophyCategory};
use std::collections::HashSet;

/// Flag key for a (category, threshold) pair, e.g. `"collection_10"`.
///
/// Keys are stable; changing this format would re-fire every milestone
/// already recorded for existing users.
pub fn flag_key(category: TrophyCategory, threshold: u32) -> String {
    format!("{}_{}", category.as_str(), threshold)
}

/// Per-user set of milestone flag keys
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// All flag keys recorded for this user
    async fn flags(&self) -> Result<HashSet<String>>;

    /// Record a flag key. Idempotent: re-adding an existing key is a no-op.
    async fn add_flag(&self, key: &str) -> Result<()>;

    /// Remove every flag for this user
    async fn clear(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_key_format() {
        assert_eq!(flag_key(TrophyCategory::Collection, 10), "collection_10");
        assert_eq!(flag_key(TrophyCategory::Social, 500), "social_500");
    }
}
