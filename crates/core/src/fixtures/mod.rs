//! Synthetic CRM fixture data.

pub mod catalog;
pub mod generator;

pub use generator::{
    dedup_companies, round_cents, CompanyCandidate, DealDraft, FixtureBatch, FixtureGenerator,
    InteractionDraft, ProspectCandidate, TaskDraft, DEFAULT_PROSPECT_COUNT,
};
