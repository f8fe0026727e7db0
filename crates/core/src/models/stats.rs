//! Raw per-user counts that trophies are evaluated from

use crate::types::TrophyCategory;
use serde::{Deserialize, Serialize};

/// Aggregated collector stats, supplied by the caller.
///
/// Counts are unsigned, so negative inputs are unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTrophyStats {
    /// Distinct cards owned
    #[serde(default)]
    pub total_cards: u32,
    /// Autograph cards owned
    #[serde(default)]
    pub total_autographs: u32,
    /// Special-edition cards owned
    #[serde(default)]
    pub total_specials: u32,
    /// Followers on the social feed
    #[serde(default)]
    pub total_followers: u32,
}

impl UserTrophyStats {
    /// The raw count feeding the given category's ladder
    pub fn count_for(&self, category: TrophyCategory) -> u32 {
        match category {
            TrophyCategory::Collection => self.total_cards,
            TrophyCategory::Autographs => self.total_autographs,
            TrophyCategory::Specials => self.total_specials,
            TrophyCategory::Social => self.total_followers,
        }
    }
}
