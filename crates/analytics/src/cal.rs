use core_types::{CalPoint, FrontierPoint};

/// Samples the Capital Allocation Line through `tangency` at each leverage,
/// in the order given.
///
/// Leverage 0 is the risk-free asset alone, 1 is the tangency portfolio and
/// values above 1 borrow at the risk-free rate.
pub fn capital_allocation_line(
    tangency: &FrontierPoint,
    risk_free_rate: f64,
    leverages: &[f64],
) -> Vec<CalPoint> {
    leverages
        .iter()
        .map(|&leverage| CalPoint {
            leverage,
            label: leverage_label(leverage),
            risk: leverage * tangency.risk,
            expected_return: risk_free_rate
                + leverage * (tangency.expected_return - risk_free_rate),
        })
        .collect()
}

/// Formats a leverage fraction as a percentage label: 1.0 -> "100%".
pub fn leverage_label(leverage: f64) -> String {
    format!("{}%", leverage * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core_types::WeightPair;

    const RF: f64 = 2.0 / 252.0;

    fn tangency() -> FrontierPoint {
        FrontierPoint {
            weights: WeightPair::new(70.0, 30.0),
            expected_return: 0.11,
            risk: 1.3,
            sharpe_ratio: (0.11 - RF) / 1.3,
        }
    }

    #[test]
    fn default_leverages_produce_three_labelled_points() {
        let cal = capital_allocation_line(&tangency(), RF, &[0.0, 1.0, 2.0]);
        let labels: Vec<_> = cal.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["0%", "100%", "200%"]);
    }

    #[test]
    fn zero_leverage_is_the_risk_free_asset() {
        let cal = capital_allocation_line(&tangency(), RF, &[0.0]);
        assert_eq!(cal[0].risk, 0.0);
        assert_eq!(cal[0].expected_return, RF);
    }

    #[test]
    fn unit_leverage_is_the_tangency_portfolio() {
        let t = tangency();
        let cal = capital_allocation_line(&t, RF, &[1.0]);
        assert_eq!(cal[0].risk, t.risk);
        assert_abs_diff_eq!(cal[0].expected_return, t.expected_return, epsilon = 1e-15);
    }

    #[test]
    fn points_lie_on_a_line_with_tangency_sharpe_slope() {
        let t = tangency();
        let cal = capital_allocation_line(&t, RF, &[0.5, 1.5, 2.0, 3.0]);
        for point in &cal {
            let slope = (point.expected_return - RF) / point.risk;
            assert_abs_diff_eq!(slope, t.sharpe_ratio, epsilon = 1e-12);
        }
        assert_eq!(cal[1].label, "150%");
    }
}
