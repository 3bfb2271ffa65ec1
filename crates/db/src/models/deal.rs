//! Deal entity model and DTOs.

use leadbase_core::crm::DealStage;
use leadbase_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A deal row from the `deals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deal {
    pub id: DbId,
    pub prospect_id: Option<DbId>,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub stage: Option<String>,
    pub close_date: Option<String>,
}

/// DTO for inserting a deal.
#[derive(Debug, Clone)]
pub struct CreateDeal {
    pub prospect_id: DbId,
    pub title: String,
    /// Already rounded to cents.
    pub amount: f64,
    pub stage: DealStage,
    pub close_date: Date,
}
