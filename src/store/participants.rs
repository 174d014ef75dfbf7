use sqlx::error::ErrorKind;

use super::Store;
use crate::model::Participant;

impl Store {
    pub async fn participant(&self, name: &str) -> Result<Option<Participant>, sqlx::Error> {
        sqlx::query_as("SELECT name,last_status FROM participants WHERE name=?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
    }

    /// `false` when the name is already taken.
    pub async fn insert_participant(
        &self,
        name: &str,
        last_status: i64,
    ) -> Result<bool, sqlx::Error> {
        let inserted = sqlx::query("INSERT INTO participants (name,last_status) VALUES (?,?)")
            .bind(name)
            .bind(last_status)
            .execute(&self.pool)
            .await;
        match inserted {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(db)) if matches!(db.kind(), ErrorKind::UniqueViolation) => {
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// `false` when nobody by that name is in the room.
    pub async fn touch_participant(
        &self,
        name: &str,
        last_status: i64,
    ) -> Result<bool, sqlx::Error> {
        let updated = sqlx::query("UPDATE participants SET last_status=? WHERE name=?")
            .bind(last_status)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(updated.rows_affected() > 0)
    }

    pub async fn participants(&self) -> Result<Vec<Participant>, sqlx::Error> {
        sqlx::query_as("SELECT name,last_status FROM participants ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
    }

    /// Removes everyone whose last ping is older than `cutoff` and returns
    /// exactly the removed rows. `DELETE ... RETURNING` keeps the removal
    /// and the returned set one atomic statement.
    pub async fn evict_stale_before(&self, cutoff: i64) -> Result<Vec<Participant>, sqlx::Error> {
        sqlx::query_as("DELETE FROM participants WHERE last_status<? RETURNING name,last_status")
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await
    }
}
