//! Repository for the `prospects` table.

use std::collections::HashMap;

use leadbase_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::prospect::{CreateProspect, Prospect, ProspectResolution};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, last_contact, status, last_activity";

/// Provides lookup-or-create and read helpers for prospects.
pub struct ProspectRepo;

impl ProspectRepo {
    /// Return the id of the prospect named `input.name`, inserting it first
    /// if no such prospect exists.
    ///
    /// An existing row always wins: its other columns are never overwritten.
    pub async fn find_or_create(
        conn: &mut SqliteConnection,
        input: &CreateProspect,
    ) -> Result<ProspectResolution, sqlx::Error> {
        let existing = sqlx::query_scalar::<_, DbId>("SELECT id FROM prospects WHERE name = ?1")
            .bind(&input.name)
            .fetch_optional(&mut *conn)
            .await?;

        if let Some(id) = existing {
            return Ok(ProspectResolution::Existing(id));
        }

        let result = sqlx::query(
            "INSERT INTO prospects (name, email, last_contact, status, last_activity)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.last_contact)
        .bind(input.status.as_str())
        .bind(input.last_activity.as_str())
        .execute(&mut *conn)
        .await?;

        Ok(ProspectResolution::Created(result.last_insert_rowid()))
    }

    /// Lookup-or-create every input inside one transaction.
    ///
    /// The returned resolutions are in input order. A name repeated within
    /// `inputs` resolves to `Existing` from its second occurrence on.
    pub async fn find_or_create_batch(
        pool: &SqlitePool,
        inputs: &[CreateProspect],
    ) -> Result<Vec<ProspectResolution>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(inputs.len());

        for input in inputs {
            results.push(Self::find_or_create(&mut *tx, input).await?);
        }

        tx.commit().await?;
        Ok(results)
    }

    /// Find a prospect by its unique name.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Prospect>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prospects WHERE name = ?1");
        sqlx::query_as::<_, Prospect>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Ids of every stored prospect, ascending.
    pub async fn list_ids(pool: &SqlitePool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM prospects ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Map of prospect name to id for every stored prospect.
    pub async fn ids_by_name(pool: &SqlitePool) -> Result<HashMap<String, DbId>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (DbId, String)>(
            "SELECT id, name FROM prospects WHERE name IS NOT NULL",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id, name)| (name, id)).collect())
    }

    /// List all prospects ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Prospect>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prospects ORDER BY id ASC");
        sqlx::query_as::<_, Prospect>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prospects")
            .fetch_one(pool)
            .await
    }
}
