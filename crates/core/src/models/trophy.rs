//! Trophy tier and evaluated-trophy models

use crate::types::{Rarity, TrophyCategory};
use serde::Serialize;

/// One tier of a trophy ladder: unlocked at `threshold`, displayed with
/// `title` and `color`. Catalog data, immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophyLevel {
    /// Count at which this tier unlocks
    pub threshold: u32,
    pub rarity: Rarity,
    pub title: &'static str,
    /// Fixed palette hex string, or the `"rainbow"` sentinel for top tiers
    pub color: &'static str,
}

/// Evaluated trophy state for one category.
///
/// Derived fresh from the user's raw counts on every evaluation; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trophy {
    pub category: TrophyCategory,
    pub current_count: u32,
    pub current_level: TrophyLevel,
    /// Next tier to reach, absent once the ladder is maxed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level: Option<TrophyLevel>,
    /// Progress toward `next_level` in [0, 100]
    pub progress_percent: f64,
    pub max_achieved: bool,
}

/// Evaluated trophies for all four categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophySet {
    pub collection: Trophy,
    pub autographs: Trophy,
    pub specials: Trophy,
    pub social: Trophy,
}

impl TrophySet {
    pub fn get(&self, category: TrophyCategory) -> &Trophy {
        match category {
            TrophyCategory::Collection => &self.collection,
            TrophyCategory::Autographs => &self.autographs,
            TrophyCategory::Specials => &self.specials,
            TrophyCategory::Social => &self.social,
        }
    }

    /// Iterate trophies in category priority order
    pub fn iter(&self) -> impl Iterator<Item = &Trophy> {
        [&self.collection, &self.autographs, &self.specials, &self.social].into_iter()
    }
}
