use serde::{Deserialize, Serialize};

use crate::core::slot_scale::SlotScale;
use crate::core::value_scale::ValueScale;

/// Deterministic bar geometry, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn bottom_y(self) -> f64 {
        self.y + self.height
    }
}

/// Projects bar samples into bottom-anchored rectangles.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry output.
#[must_use]
pub fn project_bar_rects(
    bar_values: &[f64],
    slots: &SlotScale,
    values: &ValueScale,
) -> Vec<BarRect> {
    let mut bars = Vec::with_capacity(bar_values.len());
    for (index, &value) in bar_values.iter().enumerate() {
        let height = values.bar_height(value);
        bars.push(BarRect {
            x: slots.left_x(index),
            y: values.baseline_y() - height,
            width: slots.bar_width(),
            height,
        });
    }
    bars
}
