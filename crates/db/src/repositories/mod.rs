//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Batch inserts run inside a
//! single transaction: a batch is either fully written or not at all.

pub mod company_repo;
pub mod deal_repo;
pub mod interaction_repo;
pub mod prospect_repo;
pub mod task_repo;

pub use company_repo::CompanyRepo;
pub use deal_repo::DealRepo;
pub use interaction_repo::InteractionRepo;
pub use prospect_repo::ProspectRepo;
pub use task_repo::TaskRepo;
