#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    EmptyValue { var: &'static str },

    #[error("Cannot resolve working directory: {0}")]
    WorkingDir(#[from] std::io::Error),
}
