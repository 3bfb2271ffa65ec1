//! Task entity model and DTOs.

use leadbase_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A follow-up task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub prospect_id: Option<DbId>,
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub completed: Option<bool>,
}

/// DTO for inserting a task.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub prospect_id: DbId,
    pub title: String,
    pub due_date: Date,
    pub completed: bool,
}
