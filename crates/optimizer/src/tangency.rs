use core_types::FrontierPoint;

/// Finds the point with the highest Sharpe ratio.
///
/// The scan runs in slice order and only replaces the current best on a
/// strictly greater ratio, so the first maximum wins a tie. Returns the index
/// and the point, or `None` for an empty frontier.
pub fn select_tangency(frontier: &[FrontierPoint]) -> Option<(usize, &FrontierPoint)> {
    frontier
        .iter()
        .enumerate()
        .fold(None, |best, (index, point)| match best {
            Some((_, current)) if point.sharpe_ratio <= current.sharpe_ratio => best,
            _ => Some((index, point)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::WeightPair;

    fn point(weight_a: f64, sharpe_ratio: f64) -> FrontierPoint {
        FrontierPoint {
            weights: WeightPair::new(weight_a, 100.0 - weight_a),
            expected_return: 0.0,
            risk: 1.0,
            sharpe_ratio,
        }
    }

    #[test]
    fn picks_the_maximum() {
        let frontier = [point(100.0, 0.1), point(50.0, 0.7), point(0.0, 0.3)];
        let (index, best) = select_tangency(&frontier).unwrap();
        assert_eq!(index, 1);
        assert_eq!(best.weights.weight_a, 50.0);
    }

    #[test]
    fn first_maximum_wins_ties() {
        let frontier = [point(100.0, 0.2), point(50.0, 0.5), point(0.0, 0.5)];
        assert_eq!(select_tangency(&frontier).unwrap().0, 1);
    }

    #[test]
    fn all_negative_sharpe_still_selects_the_largest() {
        let frontier = [point(100.0, -0.9), point(50.0, -0.1), point(0.0, -0.4)];
        assert_eq!(select_tangency(&frontier).unwrap().0, 1);
    }

    #[test]
    fn empty_frontier_has_no_tangency() {
        assert!(select_tangency(&[]).is_none());
    }
}
