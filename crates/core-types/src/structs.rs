use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// The ordered price history of a single asset, newest observation first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub name: String,
    pub prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(name: impl Into<String>, prices: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            prices,
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Two price series aligned by position, together with their index labels
/// (usually dates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub labels: Vec<String>,
    pub asset_a: PriceSeries,
    pub asset_b: PriceSeries,
}

impl PriceTable {
    /// Builds a table, rejecting series whose lengths do not line up with the labels.
    pub fn new(
        labels: Vec<String>,
        asset_a: PriceSeries,
        asset_b: PriceSeries,
    ) -> Result<Self, CoreError> {
        if asset_a.len() != labels.len() || asset_b.len() != labels.len() {
            return Err(CoreError::InvalidInput(
                "PriceTable".to_string(),
                format!(
                    "{} labels but {} '{}' prices and {} '{}' prices",
                    labels.len(),
                    asset_a.len(),
                    asset_a.name,
                    asset_b.len(),
                    asset_b.name
                ),
            ));
        }
        Ok(Self {
            labels,
            asset_a,
            asset_b,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Percentage returns derived from a `PriceSeries`. Always one element shorter
/// than its source series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    pub name: String,
    pub returns: Vec<f64>,
}

impl ReturnSeries {
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

/// First and second moments of a pair of return series, plus the per-period
/// risk-free rate they are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentSet {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_a: f64,
    pub std_b: f64,
    pub covariance: f64,
    pub risk_free_rate: f64,
}

/// Portfolio weights in percent. The pair does not have to sum to 100:
/// negative values are short positions, sums above 100 are leverage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    pub weight_a: f64,
    pub weight_b: f64,
}

impl WeightPair {
    pub fn new(weight_a: f64, weight_b: f64) -> Self {
        Self { weight_a, weight_b }
    }

    /// The weights as fractions (150% -> 1.5).
    pub fn fractions(&self) -> (f64, f64) {
        (self.weight_a / 100.0, self.weight_b / 100.0)
    }
}

/// A single evaluated portfolio on the weight sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontierPoint {
    pub weights: WeightPair,
    pub expected_return: f64,
    pub risk: f64,
    pub sharpe_ratio: f64,
}

/// A point on the Capital Allocation Line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalPoint {
    /// Fraction of capital in the tangency portfolio (1.0 = fully invested).
    pub leverage: f64,
    /// Human readable leverage, e.g. "100%".
    pub label: String,
    pub risk: f64,
    pub expected_return: f64,
}
