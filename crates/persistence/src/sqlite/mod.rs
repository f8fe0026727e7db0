//! SQLite database management

mod connection;
mod flags;

pub use connection::Database;
pub use flags::*;
