use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fixed chart margins and bar spacing in pixels.
///
/// Configuration, not state: validated once and then shared by every
/// projection pass over the same chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub gap: f64,
    pub min_bar_height: f64,
}

impl Default for ChartInsets {
    fn default() -> Self {
        Self {
            left: 12.0,
            right: 12.0,
            top: 12.0,
            bottom: 12.0,
            gap: 6.0,
            min_bar_height: 6.0,
        }
    }
}

impl ChartInsets {
    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.left, "left"),
            (self.right, "right"),
            (self.top, "top"),
            (self.bottom, "bottom"),
            (self.gap, "gap"),
            (self.min_bar_height, "min_bar_height"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "chart inset `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}
