//! Milestone Detector - one-shot threshold-crossing events
//!
//! Wraps the stateless trophy calculation with a per-user flag store so each
//! (category, threshold) crossing is celebrated at most once. Store failures
//! never reach the caller: a failed read behaves as "nothing flagged yet"
//! (milestones may repeat), a failed write is logged and dropped.

use crate::catalog;
use chrono::Utc;
use scoredex_core::{Milestone, Result, TrophyCategory, UserTrophyStats};
use scoredex_persistence::{flag_key, FlagStore};
use std::collections::HashSet;
use tracing::warn;

/// Detects newly crossed trophy thresholds for one user
pub struct MilestoneDetector<S: FlagStore> {
    store: S,
}

impl<S: FlagStore> MilestoneDetector<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check one category for a newly crossed threshold.
    ///
    /// Scans the ladder in ascending order and surfaces the lowest crossed
    /// threshold that has no flag yet, flagging it as a side effect. Returns
    /// `None` when every threshold at or below `count` is already flagged.
    pub async fn check_milestones(&self, category: TrophyCategory, count: u32) -> Option<Milestone> {
        let flagged = match self.store.flags().await {
            Ok(flags) => flags,
            Err(err) => {
                warn!(%category, error = %err, "flag read failed, treating as unflagged");
                HashSet::new()
            }
        };

        for level in catalog::levels(category) {
            if level.threshold > count {
                break;
            }
            let key = flag_key(category, level.threshold);
            if flagged.contains(&key) {
                continue;
            }

            if let Err(err) = self.store.add_flag(&key).await {
                warn!(%category, key, error = %err, "flag write failed, milestone may repeat");
            }

            return Some(Milestone {
                category,
                count,
                achievement_title: level.title.to_string(),
                description: format!(
                    "Unlocked at {} {}",
                    level.threshold,
                    catalog::category_noun(category)
                ),
                rarity: level.rarity,
                awarded_at: Utc::now(),
            });
        }

        None
    }

    /// Check all categories in priority order (collection first) and surface
    /// at most one milestone. A lower-priority category that also crossed a
    /// threshold stays unflagged and fires on a later check.
    pub async fn check_all_milestones(&self, stats: &UserTrophyStats) -> Option<Milestone> {
        for category in TrophyCategory::ALL {
            let milestone = self.check_milestones(category, stats.count_for(category)).await;
            if milestone.is_some() {
                return milestone;
            }
        }
        None
    }

    /// Forget every recorded milestone for this user
    pub async fn reset(&self) -> Result<()> {
        self.store.clear().await
    }
}
