use crate::error::AnalyticsError;
use core_types::{MomentSet, ReturnSeries};

/// Arithmetic mean. A constant series returns its value exactly, so the
/// deviations of a constant series are exactly zero.
pub fn mean(values: &[f64]) -> f64 {
    let first = match values.first() {
        Some(first) => *first,
        None => return f64::NAN,
    };
    if values.iter().all(|v| *v == first) {
        return first;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divisor N).
pub fn population_std_dev(values: &[f64]) -> f64 {
    let mean = mean(values);
    let variance = values
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Population covariance (divisor N) of two equally long series.
pub fn population_covariance(a: &[f64], b: &[f64]) -> f64 {
    let mean_a = mean(a);
    let mean_b = mean(b);
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum::<f64>()
        / a.len() as f64
}

/// Computes the `MomentSet` of two aligned return series.
pub fn estimate_moments(
    returns_a: &ReturnSeries,
    returns_b: &ReturnSeries,
    risk_free_rate: f64,
) -> Result<MomentSet, AnalyticsError> {
    if returns_a.len() != returns_b.len() {
        return Err(AnalyticsError::MalformedInput(format!(
            "return series '{}' has {} values but '{}' has {}",
            returns_a.name,
            returns_a.len(),
            returns_b.name,
            returns_b.len()
        )));
    }
    if returns_a.is_empty() {
        return Err(AnalyticsError::MalformedInput(
            "cannot estimate moments of empty return series".to_string(),
        ));
    }

    let a = &returns_a.returns;
    let b = &returns_b.returns;
    Ok(MomentSet {
        mean_a: mean(a),
        mean_b: mean(b),
        std_a: population_std_dev(a),
        std_b: population_std_dev(b),
        covariance: population_covariance(a, b),
        risk_free_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn returns(name: &str, values: &[f64]) -> ReturnSeries {
        ReturnSeries {
            name: name.to_string(),
            returns: values.to_vec(),
        }
    }

    #[test]
    fn std_dev_uses_population_divisor() {
        // Sample std of [2, 4, 4, 4, 5, 5, 7, 9] would be ~2.138.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(population_std_dev(&values), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_series_has_exactly_zero_std() {
        let values = [0.1; 7];
        assert_eq!(mean(&values), 0.1);
        assert_eq!(population_std_dev(&values), 0.0);
        assert_eq!(population_covariance(&values, &[3.0, 1.0, 2.0, 5.0, 4.0, 6.0, 0.5]), 0.0);
    }

    #[test]
    fn covariance_is_symmetric() {
        let a = [1.5, -2.25, 3.125, 0.75, -0.5];
        let b = [0.3, 1.1, -2.7, 4.4, 0.05];
        assert_eq!(population_covariance(&a, &b), population_covariance(&b, &a));
    }

    #[test]
    fn covariance_of_series_with_itself_is_variance() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let std = population_std_dev(&a);
        assert_abs_diff_eq!(population_covariance(&a, &a), std * std, epsilon = 1e-12);
    }

    #[test]
    fn estimate_moments_carries_risk_free_rate() {
        let moments = estimate_moments(
            &returns("A", &[1.0, 3.0]),
            &returns("B", &[2.0, -2.0]),
            2.0 / 252.0,
        )
        .unwrap();
        assert_eq!(moments.mean_a, 2.0);
        assert_eq!(moments.mean_b, 0.0);
        assert_eq!(moments.std_a, 1.0);
        assert_eq!(moments.std_b, 2.0);
        assert_eq!(moments.covariance, -2.0);
        assert_eq!(moments.risk_free_rate, 2.0 / 252.0);
    }

    #[test]
    fn estimate_moments_rejects_misaligned_or_empty_series() {
        let err = estimate_moments(&returns("A", &[1.0]), &returns("B", &[1.0, 2.0]), 0.0)
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::MalformedInput(_)));

        let err = estimate_moments(&returns("A", &[]), &returns("B", &[]), 0.0).unwrap_err();
        assert!(matches!(err, AnalyticsError::MalformedInput(_)));
    }
}
