use serde::{Deserialize, Serialize};

/// The four market inputs the prediction model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputField {
    Spx,
    Uso,
    Slv,
    Eurusd,
}

impl InputField {
    /// Fixed presentation order, shared by the form and the
    /// correlation chart categories.
    pub const ALL: [InputField; 4] = [
        InputField::Spx,
        InputField::Uso,
        InputField::Slv,
        InputField::Eurusd,
    ];

    /// Wire name as the service expects it in request/response keys.
    pub fn name(self) -> &'static str {
        match self {
            InputField::Spx => "SPX",
            InputField::Uso => "USO",
            InputField::Slv => "SLV",
            InputField::Eurusd => "EURUSD",
        }
    }

    /// Display label. Differs from the wire name only for EURUSD.
    pub fn label(self) -> &'static str {
        match self {
            InputField::Eurusd => "EUR/USD",
            other => other.name(),
        }
    }
}
