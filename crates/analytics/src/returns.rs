use crate::error::AnalyticsError;
use core_types::{PriceSeries, ReturnSeries};

/// Converts two aligned price series into percentage return series.
///
/// Prices are ordered newest first, so each return divides an observation by
/// the one that follows it: `(P[t] / P[t + 1] - 1) * 100`. The last
/// observation has no successor and produces no return, which makes each
/// output exactly one element shorter than its input.
///
/// All validation happens before any arithmetic: the series must have the
/// same length, at least two observations, and only finite, positive prices.
pub fn calculate_returns(
    asset_a: &PriceSeries,
    asset_b: &PriceSeries,
) -> Result<(ReturnSeries, ReturnSeries), AnalyticsError> {
    if asset_a.len() != asset_b.len() {
        return Err(AnalyticsError::MalformedInput(format!(
            "price series '{}' has {} observations but '{}' has {}",
            asset_a.name,
            asset_a.len(),
            asset_b.name,
            asset_b.len()
        )));
    }
    if asset_a.len() < 2 {
        return Err(AnalyticsError::MalformedInput(format!(
            "at least two price observations are required, got {}",
            asset_a.len()
        )));
    }
    validate_prices(asset_a)?;
    validate_prices(asset_b)?;

    Ok((to_returns(asset_a), to_returns(asset_b)))
}

fn validate_prices(series: &PriceSeries) -> Result<(), AnalyticsError> {
    match series
        .prices
        .iter()
        .position(|p| !p.is_finite() || *p <= 0.0)
    {
        Some(index) => Err(AnalyticsError::MalformedInput(format!(
            "price {} at position {} of '{}' must be a finite number greater than zero",
            series.prices[index], index, series.name
        ))),
        None => Ok(()),
    }
}

fn to_returns(series: &PriceSeries) -> ReturnSeries {
    let returns = series
        .prices
        .windows(2)
        .map(|w| ((w[0] / w[1]) - 1.0) * 100.0)
        .collect();

    ReturnSeries {
        name: series.name.clone(),
        returns,
    }
}
