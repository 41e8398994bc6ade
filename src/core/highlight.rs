use serde::{Deserialize, Serialize};

use crate::core::slot_scale::SlotScale;
use crate::core::types::PixelPoint;
use crate::core::value_scale::ValueScale;

/// Vertical guide through the highlighted slot, spanning the plot zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// The emphasized data point plus its guide line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Resolved slot index after clamping.
    pub index: usize,
    pub marker: PixelPoint,
    pub guide: GuideLine,
}

/// Resolves the highlight marker for a possibly out-of-range index.
///
/// The x index is clamped against the slot grid while the y index is clamped
/// against the line series' own length; the two clamps are independent
/// because the series may have different lengths. Returns `None` when the
/// line series is empty.
#[must_use]
pub fn project_highlight(
    line_values: &[f64],
    highlight_index: isize,
    slots: &SlotScale,
    values: &ValueScale,
) -> Option<Highlight> {
    if line_values.is_empty() {
        return None;
    }

    let slot_index = slots.clamp_index(highlight_index);
    let line_index = highlight_index.clamp(0, (line_values.len() - 1) as isize) as usize;

    let x = slots.center_x(slot_index);
    let y = values.value_to_y(line_values[line_index]);

    Some(Highlight {
        index: slot_index,
        marker: PixelPoint::new(x, y),
        guide: GuideLine {
            x,
            y_top: values.top_y(),
            y_bottom: values.baseline_y(),
        },
    })
}
