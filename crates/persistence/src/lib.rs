//! Scoredex Persistence - Milestone flag storage

pub mod memory;
pub mod sqlite;
pub mod store;

pub use memory::MemoryFlagStore;
pub use sqlite::{Database, SqliteFlagStore};
pub use store::{flag_key, FlagStore};
