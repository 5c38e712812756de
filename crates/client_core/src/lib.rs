//! Client-side orchestration for the gold price dashboard.
//!
//! [`DashboardController`] owns the session state, talks to the
//! remote prediction service through the [`PredictionService`] seam,
//! and exposes a broadcast event stream plus snapshot/chart accessors
//! for the presentation layer.
//!
//! In-flight requests are never cancelled: a superseded fetch is
//! allowed to complete and its result is accepted as the latest
//! snapshot. Duplicate submissions are not guarded here beyond the
//! busy flag the presentation reads; both match the behavior of the
//! service's reference frontend.

use std::sync::Arc;

use shared::{
    domain::InputField,
    protocol::{CorrelationSnapshot, DistributionSnapshot, MetricsReport, PredictRequest},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

pub mod charts;
pub mod remote;
pub mod session;
pub mod settings;

pub use charts::{
    project_correlation, project_distribution, project_trend, ChartData, ChartSeries,
};
pub use remote::{HttpPredictionService, PredictionService, ServiceFailure};
pub use session::{FormInputs, LoadState, ReadGroup, SessionState};
pub use settings::{load_settings, normalize_service_url, Settings};

/// Session changes pushed to subscribed presentation code.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    MetricsUpdated(MetricsReport),
    CorrelationUpdated(CorrelationSnapshot),
    DistributionUpdated(DistributionSnapshot),
    PredictionUpdated(f64),
    /// Predict failed; the presentation surfaces this as a blocking
    /// alert. Prior prediction and metrics are left untouched.
    PredictFailed(String),
    BusyChanged(bool),
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Form validation failed; no request was sent, no state changed.
    Rejected,
    Predicted(f64),
    Failed(String),
}

pub struct DashboardController {
    service: Arc<dyn PredictionService>,
    inner: Mutex<SessionState>,
    events: broadcast::Sender<SessionEvent>,
}

impl DashboardController {
    pub fn new(service: Arc<dyn PredictionService>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            service,
            inner: Mutex::new(SessionState::default()),
            events,
        })
    }

    pub fn with_settings(settings: &Settings) -> Arc<Self> {
        Self::new(Arc::new(HttpPredictionService::new(
            settings.service_url.clone(),
        )))
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Clone of the current session state. Snapshot replacement is
    /// atomic under the controller's lock, so this never observes a
    /// half-written payload.
    pub async fn snapshot(&self) -> SessionState {
        self.inner.lock().await.clone()
    }

    /// Fire the three startup reads concurrently and independently.
    /// Each task transitions only its own group; completion order
    /// does not matter.
    pub fn start(self: &Arc<Self>) {
        for group in [
            ReadGroup::Metrics,
            ReadGroup::Correlation,
            ReadGroup::Distribution,
        ] {
            let controller = Arc::clone(self);
            tokio::spawn(async move {
                match group {
                    ReadGroup::Metrics => controller.refresh_metrics().await,
                    ReadGroup::Correlation => controller.refresh_correlation().await,
                    ReadGroup::Distribution => controller.refresh_distribution().await,
                }
            });
        }
    }

    /// Synchronous form edit; no load-group transition.
    pub async fn set_field(&self, field: InputField, value: impl Into<String>) {
        self.inner.lock().await.set_field(field, value);
    }

    pub async fn refresh_metrics(&self) {
        self.mark_loading(ReadGroup::Metrics).await;
        match self.service.fetch_metrics().await {
            Ok(report) => {
                {
                    let mut guard = self.inner.lock().await;
                    guard.set_metrics(Some(report));
                    guard.set_load_state(ReadGroup::Metrics, LoadState::Loaded);
                }
                let _ = self.events.send(SessionEvent::MetricsUpdated(report));
            }
            Err(err) => self.note_read_failure(ReadGroup::Metrics, err).await,
        }
    }

    pub async fn refresh_correlation(&self) {
        self.mark_loading(ReadGroup::Correlation).await;
        match self.service.fetch_correlation().await {
            Ok(snapshot) => {
                {
                    let mut guard = self.inner.lock().await;
                    guard.set_correlation(Some(snapshot));
                    guard.set_load_state(ReadGroup::Correlation, LoadState::Loaded);
                }
                let _ = self.events.send(SessionEvent::CorrelationUpdated(snapshot));
            }
            Err(err) => self.note_read_failure(ReadGroup::Correlation, err).await,
        }
    }

    pub async fn refresh_distribution(&self) {
        self.mark_loading(ReadGroup::Distribution).await;
        match self.service.fetch_distribution().await {
            Ok(snapshot) => {
                {
                    let mut guard = self.inner.lock().await;
                    guard.set_distribution(Some(snapshot.clone()));
                    guard.set_load_state(ReadGroup::Distribution, LoadState::Loaded);
                }
                let _ = self
                    .events
                    .send(SessionEvent::DistributionUpdated(snapshot));
            }
            Err(err) => self.note_read_failure(ReadGroup::Distribution, err).await,
        }
    }

    /// Validate the form and, if every field parses, run one predict
    /// round trip. A success stores the prediction and re-enters the
    /// metrics `Loading` transition without awaiting it; a failure
    /// leaves the prior prediction and metrics untouched.
    pub async fn submit(self: &Arc<Self>) -> SubmitOutcome {
        let request = {
            let guard = self.inner.lock().await;
            match parse_inputs(&guard.form) {
                Some(request) => request,
                None => return SubmitOutcome::Rejected,
            }
        };

        self.set_busy(true).await;
        let outcome = match self.service.predict(&request).await {
            Ok(prediction) => {
                self.inner.lock().await.set_prediction(Some(prediction));
                info!(prediction, "prediction stored");
                let _ = self.events.send(SessionEvent::PredictionUpdated(prediction));

                // Chained refresh: the service recomputes metrics per
                // predict, so re-fetch without holding up the caller.
                let controller = Arc::clone(self);
                tokio::spawn(async move { controller.refresh_metrics().await });

                SubmitOutcome::Predicted(prediction)
            }
            Err(err) => {
                warn!("predict failed: {err}");
                let _ = self.events.send(SessionEvent::PredictFailed(err.to_string()));
                SubmitOutcome::Failed(err.to_string())
            }
        };
        self.set_busy(false).await;
        outcome
    }

    pub async fn correlation_chart(&self) -> Option<ChartData> {
        project_correlation(self.inner.lock().await.correlation.as_ref())
    }

    pub async fn distribution_chart(&self) -> Option<ChartData> {
        project_distribution(self.inner.lock().await.distribution.as_ref())
    }

    pub async fn trend_chart(&self) -> Option<ChartData> {
        project_trend(self.inner.lock().await.prediction)
    }

    async fn mark_loading(&self, group: ReadGroup) {
        self.inner
            .lock()
            .await
            .set_load_state(group, LoadState::Loading);
    }

    /// Read-group failures are logged and swallowed: the group drops
    /// back to `Unloaded`, its snapshot stays as it was, and nothing
    /// reaches the user.
    async fn note_read_failure(&self, group: ReadGroup, err: ServiceFailure) {
        warn!(group = group.name(), "read fetch failed: {err}");
        self.inner
            .lock()
            .await
            .set_load_state(group, LoadState::Unloaded);
    }

    async fn set_busy(&self, busy: bool) {
        self.inner.lock().await.set_busy(busy);
        let _ = self.events.send(SessionEvent::BusyChanged(busy));
    }
}

/// All four fields must be non-empty and parse as finite numbers;
/// anything else rejects the submit before any network call.
fn parse_inputs(form: &FormInputs) -> Option<PredictRequest> {
    let mut values = [0f64; 4];
    for (slot, field) in values.iter_mut().zip(InputField::ALL) {
        let raw = form.get(field).trim();
        if raw.is_empty() {
            return None;
        }
        let parsed: f64 = raw.parse().ok()?;
        if !parsed.is_finite() {
            return None;
        }
        *slot = parsed;
    }
    let [spx, uso, slv, eurusd] = values;
    Some(PredictRequest {
        spx,
        uso,
        slv,
        eurusd,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
