use serde::{Deserialize, Serialize};

use crate::core::insets::ChartInsets;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Horizontal index grid shared by bars, line points and the marker.
///
/// Slot `i` occupies one bar width plus one gap; the line series reuses the
/// bar centers so both series sit on the same x grid. The grid extends
/// linearly past `count` for callers mapping a longer line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotScale {
    count: usize,
    left: f64,
    bar_width: f64,
    gap: f64,
}

impl SlotScale {
    /// Builds the grid for `bar_len` samples inside the given viewport.
    ///
    /// An empty bar series still yields a one-slot grid so dependent
    /// projections stay defined.
    pub fn new(bar_len: usize, insets: ChartInsets, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let insets = insets.validate()?;

        let count = bar_len.max(1);
        let zone_w = viewport.width - insets.left - insets.right;
        let bar_width = ((zone_w - insets.gap * (count - 1) as f64) / count as f64).max(0.0);

        Ok(Self {
            count,
            left: insets.left,
            bar_width,
            gap: insets.gap,
        })
    }

    #[must_use]
    pub const fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn bar_width(self) -> f64 {
        self.bar_width
    }

    /// Center x of slot `index`.
    #[must_use]
    pub fn center_x(self, index: usize) -> f64 {
        self.left + index as f64 * (self.bar_width + self.gap) + self.bar_width * 0.5
    }

    /// Left edge x of slot `index`.
    #[must_use]
    pub fn left_x(self, index: usize) -> f64 {
        self.center_x(index) - self.bar_width * 0.5
    }

    /// Clamps a possibly out-of-range highlight index into the grid.
    #[must_use]
    pub fn clamp_index(self, index: isize) -> usize {
        index.clamp(0, (self.count - 1) as isize) as usize
    }
}
