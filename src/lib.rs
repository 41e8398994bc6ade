//! folio-chart: pure geometry and quote-preview engine for a crypto
//! portfolio UI.
//!
//! The crate computes drawable primitives for a combined bar-and-smoothed-line
//! chart (bars, Catmull-Rom cubic curve, highlight marker with guide line) and
//! two-way swap quote previews with spread and flat fee. It owns no rendering
//! backend and performs no I/O; hosts feed it sample series and read back
//! plain geometry structs and formatted strings.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod quote;
pub mod telemetry;

pub use crate::api::{ChartSession, CurveReveal, RedrawToken};
pub use crate::core::{ChartGeometry, ChartInsets, Viewport, compute_chart_geometry};
pub use crate::error::{ChartError, ChartResult};
pub use crate::quote::{QuoteSummary, SwapDirection, compute_quote};
