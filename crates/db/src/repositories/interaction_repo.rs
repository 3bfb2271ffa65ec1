//! Repository for the `interactions` table.

use sqlx::SqlitePool;

use crate::models::interaction::{CreateInteraction, Interaction};

const COLUMNS: &str = "id, prospect_name, type, content, date";

pub struct InteractionRepo;

impl InteractionRepo {
    /// Insert all interactions in one transaction, returning the number of
    /// rows written. Every `prospect_name` must already exist.
    pub async fn create_batch(
        pool: &SqlitePool,
        inputs: &[CreateInteraction],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for input in inputs {
            inserted += sqlx::query(
                "INSERT INTO interactions (prospect_name, type, content, date)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(&input.prospect_name)
            .bind(input.kind.as_str())
            .bind(&input.content)
            .bind(input.date)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// List all interactions ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Interaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interactions ORDER BY id ASC");
        sqlx::query_as::<_, Interaction>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM interactions")
            .fetch_one(pool)
            .await
    }
}
