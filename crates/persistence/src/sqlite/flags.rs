//! Milestone flag queries

use crate::store::FlagStore;
use async_trait::async_trait;
use scoredex_core::{Error, Result};
use sqlx::SqlitePool;
use std::collections::HashSet;

#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct FlagRecord {
    pub user_id: String,
    pub flag_key: String,
    pub created_at: Option<String>,
}

/// Full flag rows for a user, oldest first (for "earned on" displays)
pub async fn get_flag_records(
    pool: &SqlitePool,
    user_id: &str,
) -> std::result::Result<Vec<FlagRecord>, sqlx::Error> {
    sqlx::query_as::<_, FlagRecord>(
        "SELECT user_id, flag_key, created_at FROM milestone_flags WHERE user_id = ? ORDER BY created_at, flag_key",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_flags(pool: &SqlitePool, user_id: &str) -> std::result::Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT flag_key FROM milestone_flags WHERE user_id = ? ORDER BY flag_key",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Insert a flag key for a user. Returns `true` if the flag was newly
/// recorded, `false` if it already existed.
pub async fn add_flag(
    pool: &SqlitePool,
    user_id: &str,
    flag_key: &str,
) -> std::result::Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO milestone_flags (user_id, flag_key)
           VALUES (?, ?)
           ON CONFLICT(user_id, flag_key) DO NOTHING"#,
    )
    .bind(user_id)
    .bind(flag_key)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Remove every flag for a user, returning how many were deleted
pub async fn clear_flags(pool: &SqlitePool, user_id: &str) -> std::result::Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM milestone_flags WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// SQLite-backed [`FlagStore`] scoped to one user
pub struct SqliteFlagStore {
    pool: SqlitePool,
    user_id: String,
}

impl SqliteFlagStore {
    pub fn new(pool: &SqlitePool, user_id: impl Into<String>) -> Self {
        Self {
            pool: pool.clone(),
            user_id: user_id.into(),
        }
    }
}

#[async_trait]
impl FlagStore for SqliteFlagStore {
    async fn flags(&self) -> Result<HashSet<String>> {
        let keys = get_flags(&self.pool, &self.user_id)
            .await
            .map_err(|e| Error::DatabaseError(e.to_string()))?;
        Ok(keys.into_iter().collect())
    }

    async fn add_flag(&self, key: &str) -> Result<()> {
        add_flag(&self.pool, &self.user_id, key)
            .await
            .map(|_| ())
            .map_err(|e| Error::DatabaseError(e.to_string()))
    }

    async fn clear(&self) -> Result<()> {
        clear_flags(&self.pool, &self.user_id)
            .await
            .map(|_| ())
            .map_err(|e| Error::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::Database;

    #[tokio::test]
    async fn flags_start_empty() {
        let db = Database::connect_in_memory().await.unwrap();
        let keys = get_flags(db.pool(), "user-1").await.unwrap();
        assert!(keys.is_empty());
    }

    #[tokio::test]
    async fn add_flag_is_idempotent() {
        let db = Database::connect_in_memory().await.unwrap();
        assert!(add_flag(db.pool(), "user-1", "collection_10").await.unwrap());
        assert!(!add_flag(db.pool(), "user-1", "collection_10").await.unwrap());
        let keys = get_flags(db.pool(), "user-1").await.unwrap();
        assert_eq!(keys, vec!["collection_10".to_string()]);
    }

    #[tokio::test]
    async fn flags_are_scoped_per_user() {
        let db = Database::connect_in_memory().await.unwrap();
        add_flag(db.pool(), "user-1", "collection_1").await.unwrap();
        add_flag(db.pool(), "user-2", "social_1").await.unwrap();

        let user1 = get_flags(db.pool(), "user-1").await.unwrap();
        assert_eq!(user1, vec!["collection_1".to_string()]);

        clear_flags(db.pool(), "user-1").await.unwrap();
        assert!(get_flags(db.pool(), "user-1").await.unwrap().is_empty());
        assert_eq!(get_flags(db.pool(), "user-2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn flag_records_carry_timestamps() {
        let db = Database::connect_in_memory().await.unwrap();
        add_flag(db.pool(), "user-1", "specials_1").await.unwrap();

        let records = get_flag_records(db.pool(), "user-1").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].flag_key, "specials_1");
        assert!(records[0].created_at.is_some());
    }

    #[tokio::test]
    async fn store_trait_round_trip() {
        let db = Database::connect_in_memory().await.unwrap();
        let store = SqliteFlagStore::new(db.pool(), "user-1");

        store.add_flag("autographs_25").await.unwrap();
        assert!(store.flags().await.unwrap().contains("autographs_25"));

        store.clear().await.unwrap();
        assert!(store.flags().await.unwrap().is_empty());
    }
}
