//! The CRM agent profile and the tool connector it drives.

use std::process::Command;

use serde::Serialize;

use crate::config::AgentSettings;

pub const AGENT_NAME: &str = "CRM_SQLite_Agent";

const DESCRIPTION: &str = "Autonomous CRM agent with direct access to a SQLite database. \
     Queries, modifies and enriches lead data through the SQLite tool server.";

const INSTRUCTION: &str = "You are an autonomous CRM agent with direct access to a SQLite \
     database through the SQLite tool server. Manage the CRM data (prospects, companies, \
     interactions, deals and tasks) by running the appropriate SQL queries and modifications.";

/// Command line that launches the SQLite tool connector over stdio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolServerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolServerCommand {
    /// `uv --directory <tool_server_dir> run mcp-server-sqlite --db-path <db_path>`
    pub fn sqlite(settings: &AgentSettings) -> Self {
        Self {
            program: "uv".to_string(),
            args: vec![
                "--directory".to_string(),
                settings.tool_server_dir.display().to_string(),
                "run".to_string(),
                "mcp-server-sqlite".to_string(),
                "--db-path".to_string(),
                settings.db_path.display().to_string(),
            ],
        }
    }

    /// A process builder for this command. Spawning it is left to the caller.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Session the runtime opens for the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionIds {
    pub app_name: String,
    pub user_id: String,
    pub session_id: String,
}

/// Everything the external runtime needs to instantiate the CRM agent.
///
/// The API key never appears in the serialized profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentProfile {
    pub name: String,
    pub model: String,
    pub use_vertex_ai: bool,
    pub description: String,
    pub instruction: String,
    pub tool_server: ToolServerCommand,
    pub session: SessionIds,
}

impl AgentProfile {
    pub fn crm(settings: AgentSettings) -> Self {
        let tool_server = ToolServerCommand::sqlite(&settings);
        Self {
            name: AGENT_NAME.to_string(),
            model: settings.model,
            use_vertex_ai: settings.use_vertex_ai,
            description: DESCRIPTION.to_string(),
            instruction: INSTRUCTION.to_string(),
            tool_server,
            session: SessionIds {
                app_name: settings.app_name,
                user_id: settings.user_id,
                session_id: settings.session_id,
            },
        }
    }
}
