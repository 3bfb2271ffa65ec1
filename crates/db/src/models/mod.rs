//! Row models and insert DTOs for the CRM tables.

pub mod company;
pub mod deal;
pub mod interaction;
pub mod prospect;
pub mod task;
