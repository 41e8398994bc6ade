use serde::{Deserialize, Serialize};

use crate::core::insets::ChartInsets;
use crate::core::range::ValueRange;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Vertical mapping from sample values to pixel y, inverted axis.
///
/// Larger values map to smaller y; bars hang from the sample value down to
/// the baseline at the bottom inset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    range: ValueRange,
    top: f64,
    baseline: f64,
    chart_height: f64,
    min_bar_height: f64,
}

impl ValueScale {
    pub fn new(range: ValueRange, insets: ChartInsets, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let insets = insets.validate()?;

        Ok(Self {
            range,
            top: insets.top,
            baseline: viewport.height - insets.bottom,
            chart_height: viewport.height - insets.top - insets.bottom,
            min_bar_height: insets.min_bar_height,
        })
    }

    #[must_use]
    pub const fn range(self) -> ValueRange {
        self.range
    }

    /// Top edge of the plot zone.
    #[must_use]
    pub const fn top_y(self) -> f64 {
        self.top
    }

    /// Bottom anchor bars and the guide line terminate on.
    #[must_use]
    pub const fn baseline_y(self) -> f64 {
        self.baseline
    }

    /// Pixel y for a sample value.
    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.baseline - self.range.normalized(value) * self.chart_height
    }

    /// Bar height for a sample value, floored at the minimum bar height.
    #[must_use]
    pub fn bar_height(self, value: f64) -> f64 {
        (self.range.normalized(value) * self.chart_height).max(self.min_bar_height)
    }
}
