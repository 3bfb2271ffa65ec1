//! `leadbase-agent` -- prints the CRM agent profile for the LLM runtime.
//!
//! # Environment variables
//!
//! | Variable                    | Required | Default            | Description                  |
//! |-----------------------------|----------|--------------------|------------------------------|
//! | `GOOGLE_API_KEY`            | no       | --                 | Model provider credential    |
//! | `GOOGLE_GENAI_USE_VERTEXAI` | no       | `false`            | Route calls through Vertex AI |
//! | `AGENT_MODEL`               | no       | `gemini-2.0-flash` | Model name                   |
//! | `CRM_DB_PATH`               | no       | `db/crm.db`        | SQLite store                 |
//! | `MCP_SERVER_PATH`           | no       | `sqlite`           | Tool server project directory |

use leadbase_agent::{AgentProfile, AgentSettings};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadbase_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = AgentSettings::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid agent configuration");
        std::process::exit(1);
    });

    if settings.api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY is not set, the runtime will not reach the model");
    }
    if !settings.db_path.exists() {
        tracing::warn!(
            db_path = %settings.db_path.display(),
            "CRM store not found, run leadbase-seeder first",
        );
    }

    let profile = AgentProfile::crm(settings);
    tracing::info!(agent = %profile.name, model = %profile.model, "Agent profile built");

    match serde_json::to_string_pretty(&profile) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize agent profile");
            std::process::exit(1);
        }
    }
}
