//! `leadbase-seeder` library crate.
//!
//! Populates the CRM store with a self-consistent batch of synthetic
//! prospects, companies, interactions, deals and tasks. The binary
//! entrypoint lives in `main.rs`.

pub mod config;
pub mod error;
pub mod seed;

pub use config::SeederConfig;
pub use error::{SeedError, SeedStep};
pub use seed::{seed, SeedReport};

use leadbase_core::fixtures::FixtureGenerator;

/// Run one seeding pass against the store named by `config`.
///
/// The store is opened once and closed before returning, on success and on
/// failure alike.
pub async fn run(config: SeederConfig) -> Result<SeedReport, SeedError> {
    if let Some(parent) = config.database_file().as_deref().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SeedError::Storage {
                step: SeedStep::Connect,
                source: sqlx::Error::Io(e),
            })?;
        }
    }

    let pool = leadbase_db::create_pool(&config.database_url)
        .await
        .map_err(SeedError::at(SeedStep::Connect))?;
    tracing::info!("Database connection pool created");

    let today = chrono::Local::now().date_naive();
    let mut generator = FixtureGenerator::new(config.rng_seed, today);

    let result = seed(&pool, &mut generator, config.prospect_count).await;
    pool.close().await;
    result
}
