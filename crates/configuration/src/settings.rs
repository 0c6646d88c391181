use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an empty (or missing) `config.toml`
/// reproduces the reference analysis exactly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub risk_free: RiskFreeRate,
    pub weight_grid: WeightGridSettings,
    pub capital_allocation: CapitalAllocation,
    pub input: InputSettings,
    pub execution: Execution,
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// The per-period risk-free rate, in the same percent units as the returns.
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free.per_period()
    }
}

/// The annual risk-free rate and the number of return periods per year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskFreeRate {
    /// Annual rate in percent (2.0 = 2%).
    pub annual_rate_pct: f64,
    /// Trading periods per year used to de-annualize the rate.
    pub periods_per_year: u32,
}

impl RiskFreeRate {
    pub fn per_period(&self) -> f64 {
        self.annual_rate_pct / f64::from(self.periods_per_year)
    }
}

impl Default for RiskFreeRate {
    fn default() -> Self {
        Self {
            annual_rate_pct: 2.0,
            periods_per_year: 252,
        }
    }
}

/// A pair of percentages, one per asset.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PairSettings {
    pub asset_a: f64,
    pub asset_b: f64,
}

/// The arithmetic weight sweep: `count` pairs starting at `start`,
/// each one `step` away from the previous.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeightGridSettings {
    pub count: usize,
    pub start: PairSettings,
    pub step: PairSettings,
}

impl Default for WeightGridSettings {
    fn default() -> Self {
        Self {
            count: 21,
            start: PairSettings {
                asset_a: 150.0,
                asset_b: -50.0,
            },
            step: PairSettings {
                asset_a: -10.0,
                asset_b: 10.0,
            },
        }
    }
}

/// Leverage multiples at which the Capital Allocation Line is sampled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CapitalAllocation {
    pub leverages: Vec<f64>,
}

impl Default for CapitalAllocation {
    fn default() -> Self {
        Self {
            leverages: vec![0.0, 1.0, 2.0],
        }
    }
}

/// Column names looked up in the price file header.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub label_column: String,
    pub asset_a_column: String,
    pub asset_b_column: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            label_column: "Date".to_string(),
            asset_a_column: "Nifty50".to_string(),
            asset_b_column: "Sensex".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Execution {
    /// Evaluate the weight grid on the rayon thread pool.
    pub parallel: bool,
}

/// How the report is presented on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub format: OutputFormat,
    /// When set, report tables are also written to this directory.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file here.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
