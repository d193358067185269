// errors.rs
use thiserror::Error;

/// Errors surfaced by the web shell. Prediction and completion failures never
/// end up here; they are absorbed by the orchestrator and the assistant.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}
