use serde::{Deserialize, Serialize};

use crate::core::bar_series::{BarRect, project_bar_rects};
use crate::core::highlight::{Highlight, project_highlight};
use crate::core::insets::ChartInsets;
use crate::core::range::ValueRange;
use crate::core::slot_scale::SlotScale;
use crate::core::spline::{CubicSegment, catmull_rom_segments, project_line_points};
use crate::core::types::Viewport;
use crate::core::value_scale::ValueScale;
use crate::error::ChartResult;

/// Immutable output of one full geometry pass.
///
/// Recomputed fresh on every relevant input change; the engine retains no
/// state between passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub bars: Vec<BarRect>,
    pub curve: Vec<CubicSegment>,
    pub highlight: Option<Highlight>,
}

impl ChartGeometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.curve.is_empty() && self.highlight.is_none()
    }
}

/// Maps the bar and line series into screen-space geometry.
///
/// Both series are normalized against their combined value domain and share
/// one horizontal slot grid. Empty series produce empty geometry rather than
/// an error; the only failure modes are an invalid viewport or insets.
pub fn compute_chart_geometry(
    bar_values: &[f64],
    line_values: &[f64],
    highlight_index: isize,
    insets: ChartInsets,
    viewport: Viewport,
) -> ChartResult<ChartGeometry> {
    let range = ValueRange::from_series(bar_values, line_values);
    let slots = SlotScale::new(bar_values.len(), insets, viewport)?;
    let values = ValueScale::new(range, insets, viewport)?;

    let bars = project_bar_rects(bar_values, &slots, &values);
    let curve = catmull_rom_segments(&project_line_points(line_values, &slots, &values));
    let highlight = project_highlight(line_values, highlight_index, &slots, &values);

    Ok(ChartGeometry {
        bars,
        curve,
        highlight,
    })
}
