use std::fmt;

use leadbase_core::error::CoreError;
use leadbase_db::schema::SchemaError;
use sqlx::error::ErrorKind;

/// Pipeline step a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    Connect,
    Schema,
    Prospects,
    Interactions,
    Companies,
    Deals,
    Tasks,
}

impl SeedStep {
    pub fn as_str(self) -> &'static str {
        match self {
            SeedStep::Connect => "connect",
            SeedStep::Schema => "schema",
            SeedStep::Prospects => "prospects",
            SeedStep::Interactions => "interactions",
            SeedStep::Companies => "companies",
            SeedStep::Deals => "deals",
            SeedStep::Tasks => "tasks",
        }
    }
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can abort a seeding run.
///
/// Steps commit independently, so a `Storage` or `Constraint` failure keeps
/// whatever earlier steps already wrote.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The store holds a table whose shape the CRM schema cannot use.
    #[error("Schema error: {0}")]
    Schema(SchemaError),

    /// The store could not be opened or stopped responding.
    #[error("Storage error during {step}: {source}")]
    Storage {
        step: SeedStep,
        #[source]
        source: sqlx::Error,
    },

    /// A batch insert violated a uniqueness, foreign key, not-null or check
    /// constraint.
    #[error("Constraint violated during {step}: {source}")]
    Constraint {
        step: SeedStep,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SeedError {
    /// Classify a sqlx failure raised while running `step`.
    pub fn from_sqlx(step: SeedStep, source: sqlx::Error) -> Self {
        let is_constraint = match &source {
            sqlx::Error::Database(db_err) => matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ),
            _ => false,
        };

        if is_constraint {
            SeedError::Constraint { step, source }
        } else {
            SeedError::Storage { step, source }
        }
    }

    /// Schema verification failures; a database failure while verifying is
    /// a storage problem, not a shape mismatch.
    pub fn from_schema(err: SchemaError) -> Self {
        match err {
            SchemaError::Database(source) => SeedError::from_sqlx(SeedStep::Schema, source),
            other => SeedError::Schema(other),
        }
    }

    /// Closure adapter for `map_err`.
    pub fn at(step: SeedStep) -> impl Fn(sqlx::Error) -> Self {
        move |source| SeedError::from_sqlx(step, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn non_database_errors_are_storage() {
        let err = SeedError::from_sqlx(SeedStep::Deals, sqlx::Error::PoolTimedOut);
        assert_matches!(err, SeedError::Storage { step: SeedStep::Deals, .. });
    }

    #[test]
    fn schema_database_failure_is_storage() {
        let err = SeedError::from_schema(SchemaError::Database(sqlx::Error::PoolClosed));
        assert_matches!(err, SeedError::Storage { step: SeedStep::Schema, .. });
    }

    #[test]
    fn schema_mismatch_is_kept() {
        let err = SeedError::from_schema(SchemaError::MissingColumn {
            table: "deals",
            column: "amount",
        });
        assert_matches!(err, SeedError::Schema(SchemaError::MissingColumn { .. }));
        assert_eq!(
            err.to_string(),
            "Schema error: Table deals is missing column amount"
        );
    }

    #[test]
    fn step_display_is_lowercase() {
        assert_eq!(SeedStep::Interactions.to_string(), "interactions");
    }
}
