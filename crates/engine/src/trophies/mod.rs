//! Trophy Calculator and aggregate rarity resolution

use crate::catalog;
use scoredex_core::{Rarity, Trophy, TrophyCategory, TrophySet, UserTrophyStats};
use serde::Serialize;

/// Evaluate one category's trophy state from a raw count.
///
/// The highest tier whose threshold is at or below `count` is the current
/// level; below the first threshold the synthetic zero level applies.
pub fn calculate_trophy(category: TrophyCategory, count: u32) -> Trophy {
    let ladder = catalog::levels(category);

    let (current_level, next_level) = match ladder.iter().rposition(|l| l.threshold <= count) {
        Some(i) => (ladder[i], ladder.get(i + 1).copied()),
        None => (catalog::ZERO_LEVEL, ladder.first().copied()),
    };

    let progress_percent = match next_level {
        None => 100.0,
        Some(next) => {
            let span = (next.threshold - current_level.threshold) as f64;
            let gained = (count - current_level.threshold) as f64;
            (gained / span * 100.0).clamp(0.0, 100.0)
        }
    };

    Trophy {
        category,
        current_count: count,
        current_level,
        next_level,
        progress_percent,
        max_achieved: next_level.is_none(),
    }
}

/// Evaluate all four categories from the user's stats
pub fn calculate_all(stats: &UserTrophyStats) -> TrophySet {
    TrophySet {
        collection: calculate_trophy(TrophyCategory::Collection, stats.total_cards),
        autographs: calculate_trophy(TrophyCategory::Autographs, stats.total_autographs),
        specials: calculate_trophy(TrophyCategory::Specials, stats.total_specials),
        social: calculate_trophy(TrophyCategory::Social, stats.total_followers),
    }
}

/// Highest rarity achieved across all categories, `Rarity::None` when the
/// user holds no trophies at all.
pub fn highest_achieved_rarity(trophies: &TrophySet) -> Rarity {
    trophies
        .iter()
        .map(|t| t.current_level.rarity)
        .filter(|r| *r != Rarity::None)
        .max()
        .unwrap_or(Rarity::None)
}

/// Avatar border presentation for a rarity grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarBorderStyle {
    pub border_color: &'static str,
    pub border_width_px: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_class: Option<&'static str>,
}

/// Presentation lookup: rarity to avatar border style
pub fn avatar_border_style(rarity: Rarity) -> AvatarBorderStyle {
    match rarity {
        Rarity::None => AvatarBorderStyle {
            border_color: "#E5E7EB",
            border_width_px: 1,
            animation_class: None,
        },
        Rarity::Beginner => AvatarBorderStyle {
            border_color: "#CD7F32",
            border_width_px: 2,
            animation_class: None,
        },
        Rarity::Common => AvatarBorderStyle {
            border_color: "#C0C0C0",
            border_width_px: 2,
            animation_class: None,
        },
        Rarity::Advanced => AvatarBorderStyle {
            border_color: "#FFD700",
            border_width_px: 2,
            animation_class: None,
        },
        Rarity::Rare => AvatarBorderStyle {
            border_color: "#50C878",
            border_width_px: 3,
            animation_class: None,
        },
        Rarity::Epic => AvatarBorderStyle {
            border_color: "#9B59B6",
            border_width_px: 3,
            animation_class: Some("border-glow"),
        },
        Rarity::Legendary => AvatarBorderStyle {
            border_color: "rainbow",
            border_width_px: 4,
            animation_class: Some("border-rainbow-pulse"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_sits_below_first_tier() {
        let trophy = calculate_trophy(TrophyCategory::Collection, 0);
        assert_eq!(trophy.current_level.rarity, Rarity::None);
        assert_eq!(trophy.current_level.threshold, 0);
        assert_eq!(trophy.next_level.unwrap().threshold, 1);
        assert_eq!(trophy.progress_percent, 0.0);
        assert!(!trophy.max_achieved);
    }

    #[test]
    fn first_threshold_unlocks_beginner() {
        let trophy = calculate_trophy(TrophyCategory::Collection, 1);
        assert_eq!(trophy.current_level.rarity, Rarity::Beginner);
        assert_eq!(trophy.next_level.unwrap().threshold, 10);
        assert_eq!(trophy.progress_percent, 0.0);
    }

    #[test]
    fn top_threshold_is_maxed() {
        let trophy = calculate_trophy(TrophyCategory::Collection, 200);
        assert_eq!(trophy.current_level.rarity, Rarity::Legendary);
        assert!(trophy.next_level.is_none());
        assert!(trophy.max_achieved);
        assert_eq!(trophy.progress_percent, 100.0);
    }

    #[test]
    fn mid_range_progress() {
        let trophy = calculate_trophy(TrophyCategory::Collection, 17);
        assert_eq!(trophy.current_level.threshold, 10);
        assert_eq!(trophy.next_level.unwrap().threshold, 25);
        assert!((trophy.progress_percent - (7.0 / 15.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn level_invariants_hold_over_a_sweep() {
        for category in TrophyCategory::ALL {
            for count in 0..=600 {
                let trophy = calculate_trophy(category, count);
                assert!(trophy.current_level.threshold <= count);
                if let Some(next) = trophy.next_level {
                    assert!(count < next.threshold);
                    assert!(trophy.progress_percent < 100.0);
                } else {
                    assert!(trophy.max_achieved);
                }
                assert!((0.0..=100.0).contains(&trophy.progress_percent));
            }
        }
    }

    #[test]
    fn rarity_is_monotone_in_count() {
        for category in TrophyCategory::ALL {
            let mut previous = Rarity::None;
            for count in 0..=600 {
                let rarity = calculate_trophy(category, count).current_level.rarity;
                assert!(rarity >= previous);
                previous = rarity;
            }
        }
    }

    #[test]
    fn highest_rarity_picks_the_best_category() {
        let trophies = calculate_all(&UserTrophyStats {
            total_cards: 200,
            total_autographs: 1,
            total_specials: 0,
            total_followers: 0,
        });
        assert_eq!(highest_achieved_rarity(&trophies), Rarity::Legendary);
    }

    #[test]
    fn highest_rarity_of_nothing_is_none() {
        let trophies = calculate_all(&UserTrophyStats::default());
        assert_eq!(highest_achieved_rarity(&trophies), Rarity::None);
    }

    #[test]
    fn border_styles_distinguish_extremes() {
        let legendary = avatar_border_style(Rarity::Legendary);
        assert_eq!(legendary.border_color, "rainbow");
        assert!(legendary.animation_class.is_some());

        let none = avatar_border_style(Rarity::None);
        assert!(none.animation_class.is_none());
        assert!(none.border_width_px < legendary.border_width_px);
    }
}
