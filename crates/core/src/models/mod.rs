//! Data models for scoredex entities

mod milestone;
mod stats;
mod trophy;

pub use milestone::*;
pub use stats::*;
pub use trophy::*;
