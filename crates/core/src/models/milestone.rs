//! One-shot milestone events surfaced when a threshold is newly crossed

use crate::types::{Rarity, TrophyCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A newly-crossed trophy threshold, surfaced at most once per flag store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub category: TrophyCategory,
    /// The raw count at evaluation time
    pub count: u32,
    pub achievement_title: String,
    pub description: String,
    pub rarity: Rarity,
    pub awarded_at: DateTime<Utc>,
}
