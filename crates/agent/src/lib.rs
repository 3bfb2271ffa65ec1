//! `leadbase-agent` library crate.
//!
//! Describes the CRM agent handed to the external LLM runtime: its model,
//! instructions and the SQLite tool connector it talks to the store through.
//! Nothing here runs the agent; the binary only prints the profile.

pub mod config;
pub mod error;
pub mod profile;

pub use config::AgentSettings;
pub use error::AgentError;
pub use profile::{AgentProfile, SessionIds, ToolServerCommand};
