//! Trophy Level Catalog - static tier ladders per category
//!
//! Business data: thresholds, titles, and colors are fixed and must not be
//! reordered. Each ladder is strictly ascending by threshold; the last tier
//! carries the `"rainbow"` sentinel color.

use scoredex_core::{Rarity, TrophyCategory, TrophyLevel};

// Display palette keyed to rarity
const BRONZE: &str = "#CD7F32";
const SILVER: &str = "#C0C0C0";
const GOLD: &str = "#FFD700";
const EMERALD: &str = "#50C878";
const AMETHYST: &str = "#9B59B6";
const RAINBOW: &str = "rainbow";

/// Synthetic tier for counts below the first real threshold
pub const ZERO_LEVEL: TrophyLevel = TrophyLevel {
    threshold: 0,
    rarity: Rarity::None,
    title: "None",
    color: "transparent",
};

pub const COLLECTION_LEVELS: &[TrophyLevel] = &[
    TrophyLevel { threshold: 1, rarity: Rarity::Beginner, title: "First Card", color: BRONZE },
    TrophyLevel { threshold: 10, rarity: Rarity::Common, title: "Card Collector", color: SILVER },
    TrophyLevel { threshold: 25, rarity: Rarity::Advanced, title: "Serious Collector", color: GOLD },
    TrophyLevel { threshold: 50, rarity: Rarity::Rare, title: "Binder Builder", color: EMERALD },
    TrophyLevel { threshold: 100, rarity: Rarity::Epic, title: "Century Collector", color: AMETHYST },
    TrophyLevel { threshold: 200, rarity: Rarity::Legendary, title: "Master Collector", color: RAINBOW },
];

pub const AUTOGRAPH_LEVELS: &[TrophyLevel] = &[
    TrophyLevel { threshold: 1, rarity: Rarity::Beginner, title: "First Signature", color: BRONZE },
    TrophyLevel { threshold: 10, rarity: Rarity::Common, title: "Signature Hunter", color: SILVER },
    TrophyLevel { threshold: 25, rarity: Rarity::Advanced, title: "Ink Enthusiast", color: GOLD },
    TrophyLevel { threshold: 50, rarity: Rarity::Rare, title: "Autograph Authority", color: EMERALD },
    TrophyLevel { threshold: 100, rarity: Rarity::Epic, title: "Signature Century", color: AMETHYST },
    TrophyLevel { threshold: 200, rarity: Rarity::Legendary, title: "Legend of Ink", color: RAINBOW },
];

pub const SPECIAL_LEVELS: &[TrophyLevel] = &[
    TrophyLevel { threshold: 1, rarity: Rarity::Beginner, title: "First Special", color: BRONZE },
    TrophyLevel { threshold: 10, rarity: Rarity::Rare, title: "Special Seeker", color: EMERALD },
    TrophyLevel { threshold: 50, rarity: Rarity::Legendary, title: "Special Master", color: RAINBOW },
];

pub const SOCIAL_LEVELS: &[TrophyLevel] = &[
    TrophyLevel { threshold: 1, rarity: Rarity::Beginner, title: "First Follower", color: BRONZE },
    TrophyLevel { threshold: 10, rarity: Rarity::Common, title: "Rising Star", color: SILVER },
    TrophyLevel { threshold: 50, rarity: Rarity::Advanced, title: "Crowd Favourite", color: GOLD },
    TrophyLevel { threshold: 100, rarity: Rarity::Rare, title: "Local Celebrity", color: EMERALD },
    TrophyLevel { threshold: 200, rarity: Rarity::Epic, title: "Influencer", color: AMETHYST },
    TrophyLevel { threshold: 500, rarity: Rarity::Legendary, title: "Ligue Icon", color: RAINBOW },
];

/// The tier ladder for a category, ascending by threshold
pub fn levels(category: TrophyCategory) -> &'static [TrophyLevel] {
    match category {
        TrophyCategory::Collection => COLLECTION_LEVELS,
        TrophyCategory::Autographs => AUTOGRAPH_LEVELS,
        TrophyCategory::Specials => SPECIAL_LEVELS,
        TrophyCategory::Social => SOCIAL_LEVELS,
    }
}

/// What the category counts, for milestone descriptions
pub fn category_noun(category: TrophyCategory) -> &'static str {
    match category {
        TrophyCategory::Collection => "cards",
        TrophyCategory::Autographs => "autographs",
        TrophyCategory::Specials => "special cards",
        TrophyCategory::Social => "followers",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladders_are_strictly_ascending() {
        for category in TrophyCategory::ALL {
            let ladder = levels(category);
            assert!(!ladder.is_empty());
            for pair in ladder.windows(2) {
                assert!(pair[0].threshold < pair[1].threshold, "{category} ladder out of order");
                assert!(pair[0].rarity < pair[1].rarity, "{category} rarities out of order");
            }
        }
    }

    #[test]
    fn thresholds_match_business_data() {
        let t = |c| levels(c).iter().map(|l| l.threshold).collect::<Vec<_>>();
        assert_eq!(t(TrophyCategory::Collection), [1, 10, 25, 50, 100, 200]);
        assert_eq!(t(TrophyCategory::Autographs), [1, 10, 25, 50, 100, 200]);
        assert_eq!(t(TrophyCategory::Specials), [1, 10, 50]);
        assert_eq!(t(TrophyCategory::Social), [1, 10, 50, 100, 200, 500]);
    }

    #[test]
    fn top_tiers_are_legendary_rainbow() {
        for category in TrophyCategory::ALL {
            let top = levels(category).last().unwrap();
            assert_eq!(top.rarity, Rarity::Legendary);
            assert_eq!(top.color, "rainbow");
        }
    }
}
