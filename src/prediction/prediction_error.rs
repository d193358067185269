use thiserror::Error;

/// Any way a prediction call can fail. All of them are treated the same by the
/// orchestrator: keep what is displayed, log, move on.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Prediction request timed out")]
    Timeout,

    #[error("Prediction service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid prediction response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for PredictionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PredictionError::Timeout
        } else if e.is_decode() {
            PredictionError::Parse(e.to_string())
        } else {
            PredictionError::Network(e.to_string())
        }
    }
}
