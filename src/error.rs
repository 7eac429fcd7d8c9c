use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pinch config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not serialize pinch config: {0}")]
    Serialize(serde_json::Error),
}

#[derive(Debug, Error)]
pub enum BindError {
    #[error("failed to attach `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
