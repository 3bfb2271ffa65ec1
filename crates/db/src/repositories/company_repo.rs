//! Repository for the `companies` table.

use std::collections::HashSet;

use sqlx::SqlitePool;

use crate::models::company::{Company, CreateCompany};

const COLUMNS: &str = "id, name, industry, address, website";

/// Provides batch insert and read helpers for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Names of every stored company.
    pub async fn list_names(pool: &SqlitePool) -> Result<HashSet<String>, sqlx::Error> {
        let names =
            sqlx::query_scalar::<_, String>("SELECT name FROM companies WHERE name IS NOT NULL")
                .fetch_all(pool)
                .await?;
        Ok(names.into_iter().collect())
    }

    /// Insert all companies in one transaction, returning the number of rows
    /// written.
    ///
    /// Callers are expected to filter out known names first; a duplicate
    /// name fails the whole batch with a unique violation.
    pub async fn create_batch(
        pool: &SqlitePool,
        inputs: &[CreateCompany],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for input in inputs {
            inserted += sqlx::query(
                "INSERT INTO companies (name, industry, address, website)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(&input.name)
            .bind(&input.industry)
            .bind(&input.address)
            .bind(&input.website)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE name = ?1");
        sqlx::query_as::<_, Company>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all companies ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY id ASC");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies")
            .fetch_one(pool)
            .await
    }
}
