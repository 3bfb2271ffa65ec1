//! Interaction entity model and DTOs.

use leadbase_core::crm::InteractionKind;
use leadbase_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// An interaction row from the `interactions` table.
///
/// Interactions reference their prospect by name, not by id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interaction {
    pub id: DbId,
    pub prospect_name: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
}

/// DTO for inserting an interaction.
#[derive(Debug, Clone)]
pub struct CreateInteraction {
    pub prospect_name: String,
    pub kind: InteractionKind,
    pub content: String,
    pub date: Date,
}
