//! Domain types and pure fixture generation for the leadbase CRM store.
//!
//! Nothing in this crate touches the database; see `leadbase-db` for
//! persistence and `leadbase-seeder` for the end-to-end pipeline.

pub mod crm;
pub mod error;
pub mod fixtures;
pub mod types;
