//! `leadbase-seeder` -- one-shot CRM fixture loader.
//!
//! Creates the CRM tables if needed and adds a batch of synthetic,
//! referentially consistent records. Safe to re-run: prospects and
//! companies are never duplicated, deals and tasks accumulate.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default              | Description                  |
//! |-----------------------|----------|----------------------|------------------------------|
//! | `DATABASE_URL`        | no       | `sqlite://db/crm.db` | SQLite store to seed         |
//! | `SEED_PROSPECT_COUNT` | no       | `100`                | Candidates per run           |
//! | `SEED_RNG_SEED`       | no       | --                   | Fixed seed for reproducible data |

use leadbase_seeder::SeederConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadbase_seeder=info,leadbase_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SeederConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid seeder configuration");
        std::process::exit(1);
    });

    tracing::info!(
        database_url = %config.database_url,
        prospect_count = config.prospect_count,
        rng_seed = ?config.rng_seed,
        "Starting CRM fixture seeding",
    );

    match leadbase_seeder::run(config).await {
        Ok(report) => tracing::info!(total_added = report.total_added(), "{report}"),
        Err(e) => {
            tracing::error!(error = %e, "Seeding aborted");
            std::process::exit(1);
        }
    }
}
