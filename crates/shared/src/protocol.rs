use serde::{Deserialize, Serialize};

use crate::domain::InputField;

/// Hold-out test-set scores reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestMetrics {
    pub r2: f64,
    pub mae: f64,
    pub mse: f64,
    pub rmse: f64,
}

/// K-fold cross-validation averages reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KfoldMetrics {
    pub avg_r2: f64,
    pub avg_mae: f64,
    pub avg_mse: f64,
    pub avg_rmse: f64,
}

/// Payload of `GET /metrics`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub test_metrics: TestMetrics,
    pub kfold_metrics: KfoldMetrics,
}

/// Per-input correlation coefficients against GLD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSnapshot {
    #[serde(rename = "SPX")]
    pub spx: f64,
    #[serde(rename = "USO")]
    pub uso: f64,
    #[serde(rename = "SLV")]
    pub slv: f64,
    #[serde(rename = "EURUSD")]
    pub eurusd: f64,
}

impl CorrelationSnapshot {
    pub fn value(&self, field: InputField) -> f64 {
        match field {
            InputField::Spx => self.spx,
            InputField::Uso => self.uso,
            InputField::Slv => self.slv,
            InputField::Eurusd => self.eurusd,
        }
    }
}

/// Envelope of `GET /correlation`; the session keeps only the inner
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEnvelope {
    pub correlation_with_gld: CorrelationSnapshot,
}

/// Payload of `GET /gld_distribution`. `labels` and `counts` are
/// index-aligned and equal length; the client rejects anything else
/// as malformed at the decode boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSnapshot {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

/// Body of `POST /predict`. The service also accepts numeric strings;
/// this client always sends parsed numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "SPX")]
    pub spx: f64,
    #[serde(rename = "USO")]
    pub uso: f64,
    #[serde(rename = "SLV")]
    pub slv: f64,
    #[serde(rename = "EURUSD")]
    pub eurusd: f64,
}

/// Payload of `POST /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
}
