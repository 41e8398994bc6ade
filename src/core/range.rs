use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Smallest span the normalization will divide by.
///
/// Flat series (all samples equal) normalize against this floor instead of
/// dividing by zero.
pub const SPAN_EPSILON: f64 = 0.0001;

/// Combined value domain of the bar and line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Folds both series into one min/max domain.
    ///
    /// Non-finite samples are skipped. When both series are empty the range
    /// degenerates to `[0, 1]` so downstream mapping stays total.
    #[must_use]
    pub fn from_series(bar_values: &[f64], line_values: &[f64]) -> Self {
        let finite = bar_values
            .iter()
            .chain(line_values.iter())
            .copied()
            .filter(|v| v.is_finite());

        let max = finite
            .clone()
            .map(OrderedFloat)
            .max()
            .map_or(1.0, OrderedFloat::into_inner);
        let min = finite
            .map(OrderedFloat)
            .min()
            .map_or(0.0, OrderedFloat::into_inner);

        Self { min, max }
    }

    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> f64 {
        self.max
    }

    /// Domain span floored at [`SPAN_EPSILON`].
    #[must_use]
    pub fn span(self) -> f64 {
        (self.max - self.min).max(SPAN_EPSILON)
    }

    /// Maps a value into `[0, 1]` relative to the domain.
    #[must_use]
    pub fn normalized(self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

#[cfg(test)]
mod tests {
    use super::{SPAN_EPSILON, ValueRange};

    #[test]
    fn empty_series_degenerate_to_unit_range() {
        let range = ValueRange::from_series(&[], &[]);
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 1.0);
    }

    #[test]
    fn flat_series_span_is_floored() {
        let range = ValueRange::from_series(&[5.0, 5.0, 5.0], &[5.0]);
        assert_eq!(range.span(), SPAN_EPSILON);
        assert!(range.normalized(5.0).is_finite());
    }

    #[test]
    fn range_covers_both_series() {
        let range = ValueRange::from_series(&[10.0, 20.0], &[-4.0, 15.0]);
        assert_eq!(range.min(), -4.0);
        assert_eq!(range.max(), 20.0);
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let range = ValueRange::from_series(&[f64::NAN, 2.0], &[f64::INFINITY, 8.0]);
        assert_eq!(range.min(), 2.0);
        assert_eq!(range.max(), 8.0);
    }
}
