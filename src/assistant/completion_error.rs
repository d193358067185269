use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Missing API key or unusable settings
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response or an empty answer
    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
