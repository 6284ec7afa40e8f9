use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Conversion rates relative to a single base currency code.
pub type RateMap = BTreeMap<String, f64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionInput {
    pub amount: f64,
    pub currency: String,
}

/// Final conversion payload, the shape every caller sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub input: ConversionInput,
    /// Converted amount per target currency code.
    pub output: BTreeMap<String, f64>,
}

/// Error payload for the CLI and HTTP boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
