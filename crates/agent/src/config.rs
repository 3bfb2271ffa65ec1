use std::path::{Path, PathBuf};

use crate::error::AgentError;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_DB_PATH: &str = "db/crm.db";
pub const DEFAULT_TOOL_SERVER_DIR: &str = "sqlite";
pub const DEFAULT_APP_NAME: &str = "crm_tutorial_app";
pub const DEFAULT_USER_ID: &str = "user_1";
pub const DEFAULT_SESSION_ID: &str = "session_001";

/// Agent runtime settings, passed by value into [`crate::AgentProfile::crm`].
///
/// Paths are always absolute; relative values are resolved against the
/// working directory at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSettings {
    /// Credential for the model provider. Absent keys are tolerated here and
    /// reported by the runtime that actually calls the model.
    pub api_key: Option<String>,
    pub use_vertex_ai: bool,
    pub model: String,
    /// SQLite store shared with the seeder.
    pub db_path: PathBuf,
    /// Directory the `mcp-server-sqlite` project lives in.
    pub tool_server_dir: PathBuf,
    pub app_name: String,
    pub user_id: String,
    pub session_id: String,
}

impl AgentSettings {
    /// Load settings from environment variables with defaults.
    ///
    /// | Env Var                     | Default            |
    /// |-----------------------------|--------------------|
    /// | `GOOGLE_API_KEY`            | unset              |
    /// | `GOOGLE_GENAI_USE_VERTEXAI` | `false`            |
    /// | `AGENT_MODEL`               | `gemini-2.0-flash` |
    /// | `CRM_DB_PATH`               | `db/crm.db`        |
    /// | `MCP_SERVER_PATH`           | `sqlite`           |
    /// | `AGENT_APP_NAME`            | `crm_tutorial_app` |
    /// | `AGENT_USER_ID`             | `user_1`           |
    /// | `AGENT_SESSION_ID`          | `session_001`      |
    pub fn from_env() -> Result<Self, AgentError> {
        let cwd = std::env::current_dir()?;
        Self::from_lookup(|name| std::env::var(name).ok(), &cwd)
    }

    /// Build settings from an arbitrary variable source, resolving relative
    /// paths against `base_dir`.
    pub fn from_lookup<F>(lookup: F, base_dir: &Path) -> Result<Self, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &'static str, default: &str| -> Result<String, AgentError> {
            match lookup(name) {
                Some(value) if value.trim().is_empty() => {
                    Err(AgentError::EmptyValue { var: name })
                }
                Some(value) => Ok(value.trim().to_string()),
                None => Ok(default.to_string()),
            }
        };

        let use_vertex_ai = match lookup("GOOGLE_GENAI_USE_VERTEXAI") {
            Some(raw) => parse_flag("GOOGLE_GENAI_USE_VERTEXAI", &raw)?,
            None => false,
        };

        Ok(Self {
            api_key: lookup("GOOGLE_API_KEY").filter(|key| !key.trim().is_empty()),
            use_vertex_ai,
            model: text("AGENT_MODEL", DEFAULT_MODEL)?,
            db_path: absolutize(base_dir, &text("CRM_DB_PATH", DEFAULT_DB_PATH)?),
            tool_server_dir: absolutize(
                base_dir,
                &text("MCP_SERVER_PATH", DEFAULT_TOOL_SERVER_DIR)?,
            ),
            app_name: text("AGENT_APP_NAME", DEFAULT_APP_NAME)?,
            user_id: text("AGENT_USER_ID", DEFAULT_USER_ID)?,
            session_id: text("AGENT_SESSION_ID", DEFAULT_SESSION_ID)?,
        })
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, AgentError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(AgentError::InvalidFlag {
            var,
            value: raw.to_string(),
        }),
    }
}

fn absolutize(base_dir: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AgentSettings, AgentError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AgentSettings::from_lookup(|name| vars.get(name).cloned(), Path::new("/srv/crm"))
    }

    #[test]
    fn defaults_resolve_against_base_dir() {
        let settings = load(&[]).unwrap();

        assert_eq!(settings.api_key, None);
        assert!(!settings.use_vertex_ai);
        assert_eq!(settings.model, "gemini-2.0-flash");
        assert_eq!(settings.db_path, PathBuf::from("/srv/crm/db/crm.db"));
        assert_eq!(settings.tool_server_dir, PathBuf::from("/srv/crm/sqlite"));
        assert_eq!(settings.app_name, "crm_tutorial_app");
        assert_eq!(settings.user_id, "user_1");
        assert_eq!(settings.session_id, "session_001");
    }

    #[test]
    fn overrides_are_applied() {
        let settings = load(&[
            ("GOOGLE_API_KEY", "secret"),
            ("GOOGLE_GENAI_USE_VERTEXAI", "True"),
            ("AGENT_MODEL", "gemini-2.5-pro"),
            ("CRM_DB_PATH", "/data/crm.db"),
            ("MCP_SERVER_PATH", "tools/sqlite"),
        ])
        .unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("secret"));
        assert!(settings.use_vertex_ai);
        assert_eq!(settings.model, "gemini-2.5-pro");
        assert_eq!(settings.db_path, PathBuf::from("/data/crm.db"));
        assert_eq!(settings.tool_server_dir, PathBuf::from("/srv/crm/tools/sqlite"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        assert_eq!(load(&[("GOOGLE_API_KEY", "  ")]).unwrap().api_key, None);
    }

    #[test]
    fn invalid_flag_is_rejected() {
        let err = load(&[("GOOGLE_GENAI_USE_VERTEXAI", "maybe")]).unwrap_err();
        assert_matches!(
            err,
            AgentError::InvalidFlag { var: "GOOGLE_GENAI_USE_VERTEXAI", .. }
        );
    }

    #[test]
    fn empty_model_is_rejected() {
        let err = load(&[("AGENT_MODEL", "")]).unwrap_err();
        assert_matches!(err, AgentError::EmptyValue { var: "AGENT_MODEL" });
    }
}
