//! The end-to-end seeding pipeline.
//!
//! Steps run strictly in order and each one commits its own transaction:
//!
//! 1. ensure the schema (abort on an incompatible store)
//! 2. generate the in-memory batch
//! 3. prospects, lookup-or-create by name
//! 4. one interaction per prospect created in step 3
//! 5. companies, deduplicated and filtered against stored names
//! 6. deals and tasks, each assigned to a random stored prospect

use std::fmt;

use leadbase_core::fixtures::{dedup_companies, FixtureGenerator};
use leadbase_db::models::company::CreateCompany;
use leadbase_db::models::deal::CreateDeal;
use leadbase_db::models::interaction::CreateInteraction;
use leadbase_db::models::prospect::CreateProspect;
use leadbase_db::models::task::CreateTask;
use leadbase_db::repositories::{CompanyRepo, DealRepo, InteractionRepo, ProspectRepo, TaskRepo};
use leadbase_db::DbPool;

use crate::error::{SeedError, SeedStep};

/// Per-entity counts of one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub prospects_added: u64,
    /// Candidates whose name was already stored (or repeated in the batch).
    pub prospects_existing: u64,
    pub interactions_added: u64,
    /// Interactions dropped because their prospect was not created this run.
    pub interactions_skipped: u64,
    pub companies_added: u64,
    /// Companies dropped as in-batch duplicates or already stored.
    pub companies_skipped: u64,
    pub deals_added: u64,
    pub tasks_added: u64,
}

impl SeedReport {
    /// Total rows written across all five tables.
    pub fn total_added(&self) -> u64 {
        self.prospects_added
            + self.interactions_added
            + self.companies_added
            + self.deals_added
            + self.tasks_added
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CRM store seeded: {} prospects added ({} already present), {} interactions, \
             {} companies ({} skipped), {} deals, {} tasks",
            self.prospects_added,
            self.prospects_existing,
            self.interactions_added,
            self.companies_added,
            self.companies_skipped,
            self.deals_added,
            self.tasks_added,
        )
    }
}

/// Seed `count` candidates of every kind into the store behind `pool`.
///
/// Interactions are written only for candidates that created their prospect
/// in this run. A candidate whose name was already stored, or repeated
/// earlier in the batch, resolves to the existing prospect and gets no
/// interaction; it is counted in [`SeedReport::interactions_skipped`].
pub async fn seed(
    pool: &DbPool,
    generator: &mut FixtureGenerator,
    count: usize,
) -> Result<SeedReport, SeedError> {
    leadbase_db::health_check(pool)
        .await
        .map_err(SeedError::at(SeedStep::Connect))?;

    leadbase_db::schema::ensure_schema(pool)
        .await
        .map_err(SeedError::from_schema)?;
    tracing::info!("CRM schema ready");

    let batch = generator.generate(count)?;
    tracing::debug!(
        candidates = batch.len(),
        today = %generator.today(),
        "Fixture batch generated",
    );

    let mut report = SeedReport::default();

    // --- Prospects ---------------------------------------------------------

    let inputs: Vec<CreateProspect> = batch.prospects.iter().map(CreateProspect::from).collect();
    let resolutions = ProspectRepo::find_or_create_batch(pool, &inputs)
        .await
        .map_err(SeedError::at(SeedStep::Prospects))?;

    for (candidate, resolution) in batch.prospects.iter().zip(&resolutions) {
        if resolution.is_created() {
            report.prospects_added += 1;
        } else {
            report.prospects_existing += 1;
            tracing::debug!(
                name = %candidate.name,
                prospect_id = resolution.id(),
                "Prospect name already stored, keeping existing row",
            );
        }
    }
    tracing::info!(
        added = report.prospects_added,
        existing = report.prospects_existing,
        "Prospects committed",
    );

    // --- Interactions ------------------------------------------------------

    let interactions: Vec<CreateInteraction> = batch
        .interactions
        .iter()
        .zip(&resolutions)
        .filter(|(_, resolution)| resolution.is_created())
        .map(|(draft, _)| CreateInteraction {
            prospect_name: draft.prospect_name.clone(),
            kind: draft.kind,
            content: draft.content.clone(),
            date: draft.date,
        })
        .collect();
    report.interactions_skipped = (batch.interactions.len() - interactions.len()) as u64;
    report.interactions_added = InteractionRepo::create_batch(pool, &interactions)
        .await
        .map_err(SeedError::at(SeedStep::Interactions))?;
    tracing::info!(
        added = report.interactions_added,
        skipped = report.interactions_skipped,
        "Interactions committed",
    );

    // --- Companies ---------------------------------------------------------

    let candidates = batch.companies.len();
    let unique = dedup_companies(batch.companies);
    let stored = CompanyRepo::list_names(pool)
        .await
        .map_err(SeedError::at(SeedStep::Companies))?;
    let companies: Vec<CreateCompany> = unique
        .iter()
        .filter(|company| !stored.contains(&company.name))
        .map(CreateCompany::from)
        .collect();
    report.companies_skipped = (candidates - companies.len()) as u64;
    report.companies_added = CompanyRepo::create_batch(pool, &companies)
        .await
        .map_err(SeedError::at(SeedStep::Companies))?;
    tracing::info!(
        added = report.companies_added,
        skipped = report.companies_skipped,
        "Companies committed",
    );

    // --- Deals and tasks ---------------------------------------------------

    let prospect_ids = ProspectRepo::list_ids(pool)
        .await
        .map_err(SeedError::at(SeedStep::Deals))?;
    if prospect_ids.is_empty() {
        tracing::warn!("No prospects stored, skipping deals and tasks");
        return Ok(report);
    }

    let mut deals = Vec::with_capacity(batch.deals.len());
    for draft in &batch.deals {
        if let Some(prospect_id) = generator.pick_prospect(&prospect_ids) {
            deals.push(CreateDeal {
                prospect_id,
                title: draft.title.clone(),
                amount: draft.amount,
                stage: draft.stage,
                close_date: draft.close_date,
            });
        }
    }
    report.deals_added = DealRepo::create_batch(pool, &deals)
        .await
        .map_err(SeedError::at(SeedStep::Deals))?;
    tracing::info!(added = report.deals_added, "Deals committed");

    let mut tasks = Vec::with_capacity(batch.tasks.len());
    for draft in &batch.tasks {
        if let Some(prospect_id) = generator.pick_prospect(&prospect_ids) {
            tasks.push(CreateTask {
                prospect_id,
                title: draft.title.clone(),
                due_date: draft.due_date,
                completed: draft.completed,
            });
        }
    }
    report.tasks_added = TaskRepo::create_batch(pool, &tasks)
        .await
        .map_err(SeedError::at(SeedStep::Tasks))?;
    tracing::info!(added = report.tasks_added, "Tasks committed");

    Ok(report)
}
