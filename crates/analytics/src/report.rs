use chrono::{DateTime, Utc};
use core_types::{CalPoint, FrontierPoint, MomentSet, ReturnSeries};
use serde::{Deserialize, Serialize};

/// Everything a single frontier analysis produces.
///
/// This struct is the final output of the pipeline and the data transfer
/// object handed to the presentation and persistence layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierReport {
    pub generated_at: DateTime<Utc>,

    // I. Inputs
    pub asset_a: String,
    pub asset_b: String,
    /// Index labels of the price observations, newest first.
    pub labels: Vec<String>,

    // II. Returns and moments
    pub returns_a: ReturnSeries,
    pub returns_b: ReturnSeries,
    pub moments: MomentSet,

    // III. Frontier sweep, in grid order
    pub frontier: Vec<FrontierPoint>,
    pub tangency: FrontierPoint,
    /// Position of the tangency portfolio within `frontier`.
    pub tangency_index: usize,

    // IV. Capital Allocation Line
    pub capital_allocation_line: Vec<CalPoint>,
}
