use crate::error::AnalyticsError;
use crate::{cal, moments, portfolio, returns};
use core_types::{CalPoint, FrontierPoint, MomentSet, PriceTable, ReturnSeries, WeightPair};
use tracing::{debug, info, info_span};

/// A stateless calculator for the mean-variance statistics of two assets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticsEngine {
    risk_free_rate: f64,
}

impl AnalyticsEngine {
    /// Creates an engine evaluating portfolios against the given per-period
    /// risk-free rate (percent units, e.g. `2.0 / 252.0`).
    pub fn new(risk_free_rate: f64) -> Self {
        Self { risk_free_rate }
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Percentage returns for both assets of `prices`.
    pub fn calculate_returns(
        &self,
        prices: &PriceTable,
    ) -> Result<(ReturnSeries, ReturnSeries), AnalyticsError> {
        let _span = info_span!("calculate_returns", observations = prices.len()).entered();
        info!("Calculating periodic returns.");

        let (a, b) = returns::calculate_returns(&prices.asset_a, &prices.asset_b)?;

        info!(returns = a.len(), "Periodic returns calculated.");
        Ok((a, b))
    }

    /// Mean, population standard deviation and population covariance of the
    /// two return series.
    pub fn estimate_moments(
        &self,
        returns_a: &ReturnSeries,
        returns_b: &ReturnSeries,
    ) -> Result<MomentSet, AnalyticsError> {
        let _span = info_span!("estimate_moments").entered();
        info!("Estimating return moments.");

        let moments = moments::estimate_moments(returns_a, returns_b, self.risk_free_rate)?;

        info!(
            mean_a = moments.mean_a,
            mean_b = moments.mean_b,
            std_a = moments.std_a,
            std_b = moments.std_b,
            covariance = moments.covariance,
            risk_free_rate = moments.risk_free_rate,
            "Return moments estimated."
        );
        Ok(moments)
    }

    /// Expected return, risk and Sharpe ratio of a single weight pair.
    pub fn evaluate_portfolio(
        &self,
        weights: WeightPair,
        moments: &MomentSet,
    ) -> Result<FrontierPoint, AnalyticsError> {
        let point = portfolio::evaluate_portfolio(weights, moments)?;
        debug!(
            weight_a = weights.weight_a,
            weight_b = weights.weight_b,
            expected_return = point.expected_return,
            risk = point.risk,
            sharpe_ratio = point.sharpe_ratio,
            "Portfolio evaluated."
        );
        Ok(point)
    }

    /// Capital Allocation Line points through `tangency` for each leverage.
    pub fn capital_allocation_line(
        &self,
        tangency: &FrontierPoint,
        leverages: &[f64],
    ) -> Vec<CalPoint> {
        let _span = info_span!("capital_allocation_line", points = leverages.len()).entered();
        info!("Building Capital Allocation Line.");

        let points = cal::capital_allocation_line(tangency, self.risk_free_rate, leverages);

        info!("Capital Allocation Line built.");
        points
    }
}
