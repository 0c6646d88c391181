use configuration::WeightGridSettings;
use core_types::WeightPair;
use std::iter::FusedIterator;

/// The arithmetic sweep of portfolio weight pairs.
///
/// The grid is a plain value: iterating it never consumes it, so the sweep can
/// be restarted (or evaluated in parallel) as often as needed. Pair `i` is
/// computed directly as `start + i * step` rather than by accumulating steps,
/// which keeps every pair exact for integral settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightGrid {
    count: usize,
    start: WeightPair,
    step: WeightPair,
}

impl WeightGrid {
    pub fn new(count: usize, start: WeightPair, step: WeightPair) -> Self {
        Self { count, start, step }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The `index`-th pair, or `None` past the end of the grid.
    pub fn get(&self, index: usize) -> Option<WeightPair> {
        if index >= self.count {
            return None;
        }
        let i = index as f64;
        Some(WeightPair::new(
            self.start.weight_a + i * self.step.weight_a,
            self.start.weight_b + i * self.step.weight_b,
        ))
    }

    /// A fresh iterator over the whole grid.
    pub fn iter(&self) -> WeightGridIter {
        WeightGridIter {
            grid: *self,
            next: 0,
        }
    }
}

impl Default for WeightGrid {
    /// 21 pairs from (150, -50) to (-50, 150) in steps of (-10, +10).
    fn default() -> Self {
        Self::from(&WeightGridSettings::default())
    }
}

impl From<&WeightGridSettings> for WeightGrid {
    fn from(settings: &WeightGridSettings) -> Self {
        Self::new(
            settings.count,
            WeightPair::new(settings.start.asset_a, settings.start.asset_b),
            WeightPair::new(settings.step.asset_a, settings.step.asset_b),
        )
    }
}

impl IntoIterator for &WeightGrid {
    type Item = WeightPair;
    type IntoIter = WeightGridIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over a `WeightGrid`.
#[derive(Debug, Clone)]
pub struct WeightGridIter {
    grid: WeightGrid,
    next: usize,
}

impl Iterator for WeightGridIter {
    type Item = WeightPair;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.grid.get(self.next)?;
        self.next += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WeightGridIter {}

impl FusedIterator for WeightGridIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_has_twenty_one_pairs() {
        let grid = WeightGrid::default();
        assert_eq!(grid.len(), 21);
        assert_eq!(grid.iter().count(), 21);
        assert_eq!(grid.iter().len(), 21);
    }

    #[test]
    fn default_grid_follows_the_closed_form() {
        let grid = WeightGrid::default();
        for (i, pair) in grid.iter().enumerate() {
            let i = i as f64;
            assert_eq!(pair, WeightPair::new(150.0 - 10.0 * i, -50.0 + 10.0 * i));
        }
        assert_eq!(grid.get(0), Some(WeightPair::new(150.0, -50.0)));
        assert_eq!(grid.get(10), Some(WeightPair::new(50.0, 50.0)));
        assert_eq!(grid.get(20), Some(WeightPair::new(-50.0, 150.0)));
        assert_eq!(grid.get(21), None);
    }

    #[test]
    fn grid_is_restartable() {
        let grid = WeightGrid::default();
        let first: Vec<_> = grid.iter().collect();
        let second: Vec<_> = (&grid).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn iterator_is_fused() {
        let grid = WeightGrid::new(1, WeightPair::new(0.0, 0.0), WeightPair::new(1.0, 1.0));
        let mut iter = grid.iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn custom_settings_are_honoured() {
        let settings = WeightGridSettings {
            count: 5,
            start: configuration::PairSettings {
                asset_a: 100.0,
                asset_b: 0.0,
            },
            step: configuration::PairSettings {
                asset_a: -25.0,
                asset_b: 25.0,
            },
        };
        let pairs: Vec<_> = WeightGrid::from(&settings).iter().collect();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[4], WeightPair::new(0.0, 100.0));
    }
}
