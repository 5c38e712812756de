use serde::{Deserialize, Serialize};
use shared::{
    domain::InputField,
    protocol::{CorrelationSnapshot, DistributionSnapshot, MetricsReport},
};

/// Raw form values as typed by the user. Empty string is the valid
/// "not yet entered" state; parsing happens in the controller, never
/// here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInputs {
    pub spx: String,
    pub uso: String,
    pub slv: String,
    pub eurusd: String,
}

impl FormInputs {
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Spx => &self.spx,
            InputField::Uso => &self.uso,
            InputField::Slv => &self.slv,
            InputField::Eurusd => &self.eurusd,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::Spx => &mut self.spx,
            InputField::Uso => &mut self.uso,
            InputField::Slv => &mut self.slv,
            InputField::Eurusd => &mut self.eurusd,
        };
        *slot = value.into();
    }
}

/// Load state of one passive read group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
}

/// The three passive data categories fetched from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadGroup {
    Metrics,
    Correlation,
    Distribution,
}

impl ReadGroup {
    pub fn name(self) -> &'static str {
        match self {
            ReadGroup::Metrics => "metrics",
            ReadGroup::Correlation => "correlation",
            ReadGroup::Distribution => "distribution",
        }
    }
}

/// Everything one dashboard session owns. Held behind the
/// controller's mutex; every mutation is a whole-field replacement,
/// so readers never observe a half-written snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub form: FormInputs,
    pub prediction: Option<f64>,
    pub metrics: Option<MetricsReport>,
    pub correlation: Option<CorrelationSnapshot>,
    pub distribution: Option<DistributionSnapshot>,
    pub busy: bool,
    pub metrics_load: LoadState,
    pub correlation_load: LoadState,
    pub distribution_load: LoadState,
}

impl SessionState {
    pub fn set_field(&mut self, field: InputField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn set_prediction(&mut self, prediction: Option<f64>) {
        self.prediction = prediction;
    }

    pub fn set_metrics(&mut self, metrics: Option<MetricsReport>) {
        self.metrics = metrics;
    }

    pub fn set_correlation(&mut self, correlation: Option<CorrelationSnapshot>) {
        self.correlation = correlation;
    }

    pub fn set_distribution(&mut self, distribution: Option<DistributionSnapshot>) {
        self.distribution = distribution;
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn load_state(&self, group: ReadGroup) -> LoadState {
        match group {
            ReadGroup::Metrics => self.metrics_load,
            ReadGroup::Correlation => self.correlation_load,
            ReadGroup::Distribution => self.distribution_load,
        }
    }

    pub fn set_load_state(&mut self, group: ReadGroup, state: LoadState) {
        let slot = match group {
            ReadGroup::Metrics => &mut self.metrics_load,
            ReadGroup::Correlation => &mut self.correlation_load,
            ReadGroup::Distribution => &mut self.distribution_load,
        };
        *slot = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_empty_and_idle() {
        let state = SessionState::default();
        for field in InputField::ALL {
            assert_eq!(state.form.get(field), "");
        }
        assert!(state.prediction.is_none());
        assert!(state.metrics.is_none());
        assert!(!state.busy);
        assert_eq!(state.load_state(ReadGroup::Metrics), LoadState::Unloaded);
    }

    #[test]
    fn field_edits_touch_only_their_own_slot() {
        let mut state = SessionState::default();
        state.set_field(InputField::Eurusd, "1.08");
        state.set_field(InputField::Spx, "4500");

        assert_eq!(state.form.get(InputField::Eurusd), "1.08");
        assert_eq!(state.form.get(InputField::Spx), "4500");
        assert_eq!(state.form.get(InputField::Uso), "");
        assert_eq!(state.form.get(InputField::Slv), "");
    }

    #[test]
    fn load_states_are_independent_per_group() {
        let mut state = SessionState::default();
        state.set_load_state(ReadGroup::Correlation, LoadState::Loading);
        state.set_load_state(ReadGroup::Distribution, LoadState::Loaded);

        assert_eq!(state.load_state(ReadGroup::Metrics), LoadState::Unloaded);
        assert_eq!(state.load_state(ReadGroup::Correlation), LoadState::Loading);
        assert_eq!(state.load_state(ReadGroup::Distribution), LoadState::Loaded);
    }
}
