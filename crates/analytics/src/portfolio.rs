use crate::error::AnalyticsError;
use core_types::{FrontierPoint, MomentSet, WeightPair};

/// Evaluates the expected return, risk and Sharpe ratio of a two-asset
/// portfolio.
///
/// Weights are percentages and are not normalized: a pair that sums to more
/// than 100 is leveraged, a negative weight is a short position. The order of
/// every floating-point operation is fixed so that repeated evaluations of the
/// same grid are bit-identical, which the tangency tie-break relies on.
pub fn evaluate_portfolio(
    weights: WeightPair,
    moments: &MomentSet,
) -> Result<FrontierPoint, AnalyticsError> {
    let (w1, w2) = weights.fractions();

    let expected_return = (w1 * moments.mean_a) + (w2 * moments.mean_b);

    let radicand = (w1 * w1) * (moments.std_a * moments.std_a)
        + (w2 * w2) * (moments.std_b * moments.std_b)
        + 2.0 * w1 * w2 * moments.covariance;
    // Only reachable when |covariance| exceeds std_a * std_b.
    if radicand < 0.0 || radicand.is_nan() {
        return Err(AnalyticsError::NumericDomainError {
            weight_a: weights.weight_a,
            weight_b: weights.weight_b,
            radicand,
        });
    }
    let risk = radicand.sqrt();

    Ok(FrontierPoint {
        weights,
        expected_return,
        risk,
        sharpe_ratio: sharpe_ratio(expected_return, risk, moments.risk_free_rate),
    })
}

/// `(return - rf) / risk`, defined as 0 for a riskless portfolio.
pub fn sharpe_ratio(expected_return: f64, risk: f64, risk_free_rate: f64) -> f64 {
    if risk == 0.0 {
        return 0.0;
    }
    (expected_return - risk_free_rate) / risk
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn moments() -> MomentSet {
        MomentSet {
            mean_a: 0.08,
            mean_b: 0.05,
            std_a: 1.2,
            std_b: 0.9,
            covariance: 0.4,
            risk_free_rate: 2.0 / 252.0,
        }
    }

    #[test]
    fn fully_invested_in_one_asset_reproduces_its_moments() {
        let m = moments();
        let point = evaluate_portfolio(WeightPair::new(100.0, 0.0), &m).unwrap();
        assert_eq!(point.expected_return, m.mean_a);
        assert_abs_diff_eq!(point.risk, m.std_a, epsilon = 1e-15);
    }

    #[test]
    fn leveraged_and_short_weights_are_not_normalized() {
        let m = moments();
        let point = evaluate_portfolio(WeightPair::new(150.0, -50.0), &m).unwrap();
        let expected_return = 1.5 * m.mean_a - 0.5 * m.mean_b;
        let variance = 2.25 * m.std_a.powi(2) + 0.25 * m.std_b.powi(2) - 1.5 * m.covariance;
        assert_abs_diff_eq!(point.expected_return, expected_return, epsilon = 1e-12);
        assert_abs_diff_eq!(point.risk, variance.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            point.sharpe_ratio,
            (expected_return - m.risk_free_rate) / variance.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_risk_gives_zero_sharpe() {
        let m = MomentSet {
            std_a: 0.0,
            std_b: 0.0,
            covariance: 0.0,
            ..moments()
        };
        let point = evaluate_portfolio(WeightPair::new(60.0, 40.0), &m).unwrap();
        assert_eq!(point.risk, 0.0);
        assert_eq!(point.sharpe_ratio, 0.0);
    }

    #[test]
    fn covariance_beyond_cauchy_schwarz_is_a_domain_error() {
        let m = MomentSet {
            std_a: 1.0,
            std_b: 1.0,
            covariance: -5.0,
            ..moments()
        };
        let err = evaluate_portfolio(WeightPair::new(50.0, 50.0), &m).unwrap_err();
        assert!(matches!(err, AnalyticsError::NumericDomainError { .. }));
    }

    #[test]
    fn sharpe_ratio_subtracts_risk_free_rate() {
        assert_eq!(sharpe_ratio(3.0, 2.0, 1.0), 1.0);
        assert_eq!(sharpe_ratio(3.0, 0.0, 1.0), 0.0);
    }
}
