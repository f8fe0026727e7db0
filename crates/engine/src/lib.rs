//! Scoredex Engine - Trophy evaluation, aggregation, and milestone detection

pub mod catalog;
pub mod milestones;
pub mod trophies;

pub use milestones::MilestoneDetector;
pub use trophies::{
    avatar_border_style, calculate_all, calculate_trophy, highest_achieved_rarity,
    AvatarBorderStyle,
};
