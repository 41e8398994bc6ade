pub mod bar_series;
pub mod geometry;
pub mod highlight;
pub mod insets;
pub mod range;
pub mod slot_scale;
pub mod spline;
pub mod types;
pub mod value_scale;

pub use bar_series::{BarRect, project_bar_rects};
pub use geometry::{ChartGeometry, compute_chart_geometry};
pub use highlight::{GuideLine, Highlight, project_highlight};
pub use insets::ChartInsets;
pub use range::ValueRange;
pub use slot_scale::SlotScale;
pub use spline::{CubicSegment, catmull_rom_segments, project_line_points};
pub use types::{PixelPoint, Viewport};
pub use value_scale::ValueScale;
