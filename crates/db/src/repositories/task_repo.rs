//! Repository for the `tasks` table.

use sqlx::SqlitePool;

use crate::models::task::{CreateTask, Task};

const COLUMNS: &str = "id, prospect_id, title, due_date, completed";

pub struct TaskRepo;

impl TaskRepo {
    /// Insert all tasks in one transaction, returning the number of rows
    /// written.
    pub async fn create_batch(
        pool: &SqlitePool,
        inputs: &[CreateTask],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for input in inputs {
            inserted += sqlx::query(
                "INSERT INTO tasks (prospect_id, title, due_date, completed)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(input.prospect_id)
            .bind(&input.title)
            .bind(input.due_date)
            .bind(input.completed)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// List all tasks ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await
    }
}
