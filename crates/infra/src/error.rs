use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("inventory store lock poisoned: {0}")]
    Poisoned(&'static str),

    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
