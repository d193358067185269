// prediction/client.rs
use crate::config::AppConfig;
use crate::prediction::{CompareRequest, CompareResponse, PredictionError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, warn};

/// The remote price-prediction boundary: one request, one response.
#[async_trait]
pub trait PricePredictor: Send + Sync {
    async fn compare(&self, request: &CompareRequest) -> Result<CompareResponse, PredictionError>;
}

pub struct HttpPredictor {
    client: Client,
    endpoint_url: String,
}

impl HttpPredictor {
    pub fn new(config: &AppConfig) -> Result<Self, PredictionError> {
        let client = Client::builder()
            .timeout(config.prediction_timeout)
            .build()
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait]
impl PricePredictor for HttpPredictor {
    async fn compare(&self, request: &CompareRequest) -> Result<CompareResponse, PredictionError> {
        let start = Instant::now();

        let resp = self
            .client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Prediction request failed");
                PredictionError::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PredictionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let parsed: CompareResponse =
            serde_json::from_str(&text).map_err(|e| PredictionError::Parse(e.to_string()))?;

        debug!(
            address1 = %request.address1.value,
            address2 = %request.address2.value,
            duration_ms = start.elapsed().as_millis() as u64,
            "Prediction response received"
        );

        Ok(parsed)
    }
}
