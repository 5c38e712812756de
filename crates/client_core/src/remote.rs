//! HTTP access to the prediction service.
//!
//! Each operation is one request/response round trip against the
//! fixed base address: no retry, no caching, no cancellation. All
//! failure modes (network error, non-2xx status, malformed payload)
//! collapse into the single [`ServiceFailure`] kind; callers never
//! learn which one occurred.

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{
    CorrelationEnvelope, CorrelationSnapshot, DistributionSnapshot, MetricsReport, PredictRequest,
    PredictResponse,
};
use thiserror::Error;

/// The one failure kind surfaced by this layer.
#[derive(Debug, Clone, Error)]
#[error("prediction service request failed: {reason}")]
pub struct ServiceFailure {
    reason: String,
}

impl ServiceFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ServiceFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Seam to the remote prediction service. Implementations are
/// stateless per call.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn fetch_metrics(&self) -> Result<MetricsReport, ServiceFailure>;
    async fn fetch_correlation(&self) -> Result<CorrelationSnapshot, ServiceFailure>;
    async fn fetch_distribution(&self) -> Result<DistributionSnapshot, ServiceFailure>;
    async fn predict(&self, request: &PredictRequest) -> Result<f64, ServiceFailure>;
}

/// reqwest-backed client for the four service endpoints.
pub struct HttpPredictionService {
    http: Client,
    base_url: String,
}

impl HttpPredictionService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn fetch_metrics(&self) -> Result<MetricsReport, ServiceFailure> {
        let base_url = &self.base_url;
        let report: MetricsReport = self
            .http
            .get(format!("{base_url}/metrics"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(report)
    }

    async fn fetch_correlation(&self) -> Result<CorrelationSnapshot, ServiceFailure> {
        let base_url = &self.base_url;
        let envelope: CorrelationEnvelope = self
            .http
            .get(format!("{base_url}/correlation"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.correlation_with_gld)
    }

    async fn fetch_distribution(&self) -> Result<DistributionSnapshot, ServiceFailure> {
        let base_url = &self.base_url;
        let snapshot: DistributionSnapshot = self
            .http
            .get(format!("{base_url}/gld_distribution"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // The labels/counts alignment is the snapshot's invariant;
        // a mismatched payload is malformed, not a shorter chart.
        if snapshot.labels.len() != snapshot.counts.len() {
            return Err(ServiceFailure::new(format!(
                "distribution payload misaligned: {} labels, {} counts",
                snapshot.labels.len(),
                snapshot.counts.len()
            )));
        }

        Ok(snapshot)
    }

    async fn predict(&self, request: &PredictRequest) -> Result<f64, ServiceFailure> {
        let base_url = &self.base_url;
        let response: PredictResponse = self
            .http
            .post(format!("{base_url}/predict"))
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.prediction)
    }
}
