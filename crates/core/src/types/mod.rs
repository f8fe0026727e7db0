//! Shared type definitions: trophy categories and rarity grades

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four trophy domains tracked for a collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrophyCategory {
    Collection,
    Autographs,
    Specials,
    Social,
}

impl TrophyCategory {
    /// All categories in milestone priority order (collection first)
    pub const ALL: [TrophyCategory; 4] = [
        TrophyCategory::Collection,
        TrophyCategory::Autographs,
        TrophyCategory::Specials,
        TrophyCategory::Social,
    ];

    /// Lowercase tag used in flag keys and JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            TrophyCategory::Collection => "collection",
            TrophyCategory::Autographs => "autographs",
            TrophyCategory::Specials => "specials",
            TrophyCategory::Social => "social",
        }
    }
}

impl fmt::Display for TrophyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrophyCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collection" => Ok(TrophyCategory::Collection),
            "autographs" => Ok(TrophyCategory::Autographs),
            "specials" => Ok(TrophyCategory::Specials),
            "social" => Ok(TrophyCategory::Social),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// Ordered rarity grade attached to each trophy tier.
///
/// The derived `Ord` follows declaration order, so
/// `None < Beginner < ... < Legendary` holds directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    None,
    Beginner,
    Common,
    Advanced,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Numeric rank (0 = none, 6 = legendary)
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::None => "none",
            Rarity::Beginner => "beginner",
            Rarity::Common => "common",
            Rarity::Advanced => "advanced",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
