//! Repository for the `deals` table.

use sqlx::SqlitePool;

use crate::models::deal::{CreateDeal, Deal};

const COLUMNS: &str = "id, prospect_id, title, amount, stage, close_date";

pub struct DealRepo;

impl DealRepo {
    /// Insert all deals in one transaction, returning the number of rows
    /// written. No deduplication: a prospect may hold many deals.
    pub async fn create_batch(
        pool: &SqlitePool,
        inputs: &[CreateDeal],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for input in inputs {
            inserted += sqlx::query(
                "INSERT INTO deals (prospect_id, title, amount, stage, close_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(input.prospect_id)
            .bind(&input.title)
            .bind(input.amount)
            .bind(input.stage.as_str())
            .bind(input.close_date)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// List all deals ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Deal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deals ORDER BY id ASC");
        sqlx::query_as::<_, Deal>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM deals")
            .fetch_one(pool)
            .await
    }
}
