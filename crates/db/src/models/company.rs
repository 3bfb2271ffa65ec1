//! Company entity model and DTOs.

use leadbase_core::fixtures::CompanyCandidate;
use leadbase_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A company row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub name: String,
    pub industry: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
}

/// DTO for inserting a company.
#[derive(Debug, Clone)]
pub struct CreateCompany {
    pub name: String,
    pub industry: String,
    pub address: String,
    pub website: String,
}

impl From<&CompanyCandidate> for CreateCompany {
    fn from(candidate: &CompanyCandidate) -> Self {
        Self {
            name: candidate.name.clone(),
            industry: candidate.industry.clone(),
            address: candidate.address.clone(),
            website: candidate.website.clone(),
        }
    }
}
