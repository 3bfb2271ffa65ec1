//! Prospect entity model and DTOs.

use leadbase_core::crm::{Activity, ProspectStatus};
use leadbase_core::fixtures::ProspectCandidate;
use leadbase_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A prospect row from the `prospects` table.
///
/// Only `name` is NOT NULL; the other columns may be cleared by the agent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prospect {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    /// ISO-8601 date.
    pub last_contact: Option<String>,
    pub status: Option<String>,
    pub last_activity: Option<String>,
}

/// DTO for inserting a prospect.
#[derive(Debug, Clone)]
pub struct CreateProspect {
    pub name: String,
    pub email: String,
    pub last_contact: Date,
    pub status: ProspectStatus,
    pub last_activity: Activity,
}

impl From<&ProspectCandidate> for CreateProspect {
    fn from(candidate: &ProspectCandidate) -> Self {
        Self {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            last_contact: candidate.last_contact,
            status: candidate.status,
            last_activity: candidate.last_activity,
        }
    }
}

/// Outcome of a lookup-or-create on the prospect name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProspectResolution {
    /// No prospect had this name; a new row was inserted.
    Created(DbId),
    /// A prospect with this name already existed and was left unchanged.
    Existing(DbId),
}

impl ProspectResolution {
    pub fn id(self) -> DbId {
        match self {
            Self::Created(id) | Self::Existing(id) => id,
        }
    }

    pub fn is_created(self) -> bool {
        matches!(self, Self::Created(_))
    }
}
