use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::slot_scale::SlotScale;
use crate::core::types::PixelPoint;
use crate::core::value_scale::ValueScale;

/// One cubic Bezier piece of the smoothed line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub from: PixelPoint,
    pub c1: PixelPoint,
    pub c2: PixelPoint,
    pub to: PixelPoint,
}

/// Maps line samples onto the shared slot grid.
///
/// x reuses the bar slot centers so line and bars share one horizontal index
/// grid; the grid extends linearly when the line series is longer than the
/// bar series. Typical portfolio charts carry a few dozen samples, so the
/// buffer stays inline.
#[must_use]
pub fn project_line_points(
    line_values: &[f64],
    slots: &SlotScale,
    values: &ValueScale,
) -> SmallVec<[PixelPoint; 32]> {
    line_values
        .iter()
        .enumerate()
        .map(|(index, &value)| PixelPoint::new(slots.center_x(index), values.value_to_y(value)))
        .collect()
}

/// Converts an open polyline into tangent-continuous cubic segments.
///
/// Catmull-Rom-to-Bezier conversion: for each pair `(p1, p2)` with neighbors
/// `p0` (previous, or `p1` at the start) and `p3` (next, or `p2` at the end),
/// the control points are `c1 = p1 + (p2 - p0)/6` and `c2 = p2 - (p3 - p1)/6`.
/// The resulting curve passes exactly through every input point. One point or
/// fewer yields no segments; exactly two points degenerate to a nearly
/// straight cubic via the fallback neighbors.
#[must_use]
pub fn catmull_rom_segments(points: &[PixelPoint]) -> Vec<CubicSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for i in 0..points.len() - 1 {
        let p0 = if i == 0 { points[i] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < points.len() {
            points[i + 2]
        } else {
            points[i + 1]
        };

        let c1 = PixelPoint::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
        let c2 = PixelPoint::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);

        segments.push(CubicSegment {
            from: p1,
            c1,
            c2,
            to: p2,
        });
    }
    segments
}
