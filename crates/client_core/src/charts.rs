//! Pure projections from session state into chart-ready data.
//!
//! Every function here is total: an absent snapshot projects to
//! `None` (the presentation shows its loading placeholder), never an
//! error. Nothing is cached; callers recompute from the current
//! session state on demand.

use serde::Serialize;
use shared::{
    domain::InputField,
    protocol::{CorrelationSnapshot, DistributionSnapshot},
};

/// One named series of values, index-aligned with the categories of
/// its chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Categories plus one or more series, consumed by presentation
/// without further transformation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Correlation bars in the fixed order [SPX, USO, SLV, EUR/USD].
pub fn project_correlation(snapshot: Option<&CorrelationSnapshot>) -> Option<ChartData> {
    let snapshot = snapshot?;
    Some(ChartData {
        categories: InputField::ALL
            .iter()
            .map(|field| field.label().to_string())
            .collect(),
        series: vec![ChartSeries {
            label: "Correlation with GLD".to_string(),
            values: InputField::ALL
                .iter()
                .map(|field| snapshot.value(*field))
                .collect(),
        }],
    })
}

/// Distribution bars: bucket labels and counts verbatim from the
/// snapshot, whose own invariant keeps them index-aligned.
pub fn project_distribution(snapshot: Option<&DistributionSnapshot>) -> Option<ChartData> {
    let snapshot = snapshot?;
    Some(ChartData {
        categories: snapshot.labels.clone(),
        series: vec![ChartSeries {
            label: "GLD Distribution".to_string(),
            values: snapshot.counts.iter().map(|count| *count as f64).collect(),
        }],
    })
}

/// Three-point trend line around the latest prediction.
///
/// The yesterday/tomorrow points are a fixed -3/+2 perturbation of
/// the single predicted value. This is a presentational heuristic,
/// not model output, and must never be read as a forecast.
pub fn project_trend(prediction: Option<f64>) -> Option<ChartData> {
    let prediction = prediction?;
    Some(ChartData {
        categories: vec![
            "Yesterday".to_string(),
            "Today".to_string(),
            "Tomorrow".to_string(),
        ],
        series: vec![ChartSeries {
            label: "Gold price trend".to_string(),
            values: vec![prediction - 3.0, prediction, prediction + 2.0],
        }],
    })
}
