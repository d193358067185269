mod client;
mod models;
mod prediction_error;

pub use client::{HttpPredictor, PricePredictor};
pub use models::{CompareRequest, CompareResponse, CompareResult};
pub use prediction_error::PredictionError;
