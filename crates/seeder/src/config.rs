use std::path::PathBuf;
use std::str::FromStr;

use leadbase_core::fixtures::DEFAULT_PROSPECT_COUNT;

use crate::error::SeedError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://db/crm.db";

/// Seeder configuration, passed by value into [`crate::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeederConfig {
    /// `sqlite://` URL of the CRM store.
    pub database_url: String,
    /// Candidates generated per run (default: `100`).
    pub prospect_count: usize,
    /// Fixed RNG seed for reproducible batches. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            prospect_count: DEFAULT_PROSPECT_COUNT,
            rng_seed: None,
        }
    }
}

impl SeederConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default              |
    /// |-----------------------|----------------------|
    /// | `DATABASE_URL`        | `sqlite://db/crm.db` |
    /// | `SEED_PROSPECT_COUNT` | `100`                |
    /// | `SEED_RNG_SEED`       | unset (entropy)      |
    pub fn from_env() -> Result<Self, SeedError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let prospect_count = match std::env::var("SEED_PROSPECT_COUNT") {
            Ok(raw) => parse_var("SEED_PROSPECT_COUNT", &raw)?,
            Err(_) => DEFAULT_PROSPECT_COUNT,
        };
        if prospect_count == 0 {
            return Err(SeedError::Config(
                "SEED_PROSPECT_COUNT must be at least 1".to_string(),
            ));
        }

        let rng_seed = match std::env::var("SEED_RNG_SEED") {
            Ok(raw) => Some(parse_var("SEED_RNG_SEED", &raw)?),
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            prospect_count,
            rng_seed,
        })
    }

    /// Filesystem path of the database file, if the URL names one.
    ///
    /// In-memory databases have no file.
    pub fn database_file(&self) -> Option<PathBuf> {
        let rest = self
            .database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.database_url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or_default();
        if path.is_empty() || path == ":memory:" {
            return None;
        }
        Some(PathBuf::from(path))
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, SeedError> {
    raw.trim().parse().map_err(|_| {
        SeedError::Config(format!("{name} must be a non-negative integer, got {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> SeederConfig {
        SeederConfig {
            database_url: url.to_string(),
            ..SeederConfig::default()
        }
    }

    #[test]
    fn defaults() {
        let config = SeederConfig::default();
        assert_eq!(config.database_url, "sqlite://db/crm.db");
        assert_eq!(config.prospect_count, 100);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn database_file_from_relative_url() {
        assert_eq!(
            SeederConfig::default().database_file(),
            Some(PathBuf::from("db/crm.db"))
        );
    }

    #[test]
    fn database_file_strips_query() {
        assert_eq!(
            with_url("sqlite:///var/lib/crm.db?mode=rwc").database_file(),
            Some(PathBuf::from("/var/lib/crm.db"))
        );
        assert_eq!(
            with_url("sqlite:crm.db").database_file(),
            Some(PathBuf::from("crm.db"))
        );
    }

    #[test]
    fn in_memory_has_no_file() {
        assert_eq!(with_url("sqlite::memory:").database_file(), None);
        assert_eq!(with_url("postgres://localhost/crm").database_file(), None);
    }

    #[test]
    fn parse_var_rejects_garbage() {
        let err = parse_var::<u64>("SEED_RNG_SEED", "forty-two").unwrap_err();
        assert!(matches!(err, SeedError::Config(msg) if msg.contains("SEED_RNG_SEED")));
        assert_eq!(parse_var::<usize>("SEED_PROSPECT_COUNT", " 25 ").unwrap(), 25);
    }
}
