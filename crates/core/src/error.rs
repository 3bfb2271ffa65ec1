#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown {kind} label: {value:?}")]
    UnknownLabel { kind: &'static str, value: String },
}
