use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartGeometry, ChartInsets, Viewport, compute_chart_geometry};
use crate::error::ChartResult;

/// Monotonically increasing redraw generation.
///
/// Every input mutation mints a new token; anything still pending against an
/// older token is stale and must be ignored ("latest trigger wins").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct RedrawToken(u64);

impl RedrawToken {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[must_use]
    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Caller-facing input state for one chart instance.
///
/// The session owns the sample series, highlight selection, insets and
/// viewport, and nothing else: geometry is recomputed fresh on every
/// [`ChartSession::geometry`] call. Mutations bump the redraw token so hosts
/// can restart their reveal animation against the latest generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSession {
    bar_values: Vec<f64>,
    line_values: Vec<f64>,
    highlight_index: isize,
    insets: ChartInsets,
    viewport: Viewport,
    token: RedrawToken,
}

impl ChartSession {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            bar_values: Vec::new(),
            line_values: Vec::new(),
            highlight_index: 0,
            insets: ChartInsets::default(),
            viewport,
            token: RedrawToken::default(),
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: ChartInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Replaces both sample series.
    pub fn set_series(&mut self, bar_values: Vec<f64>, line_values: Vec<f64>) -> RedrawToken {
        self.bar_values = bar_values;
        self.line_values = line_values;
        self.bump("series replaced")
    }

    /// Moves the highlight selection; out-of-range values are kept as-is and
    /// clamped at projection time.
    pub fn set_highlight(&mut self, highlight_index: isize) -> RedrawToken {
        self.highlight_index = highlight_index;
        self.bump("highlight moved")
    }

    pub fn resize(&mut self, viewport: Viewport) -> RedrawToken {
        self.viewport = viewport;
        self.bump("viewport resized")
    }

    pub fn set_insets(&mut self, insets: ChartInsets) -> RedrawToken {
        self.insets = insets;
        self.bump("insets changed")
    }

    #[must_use]
    pub fn bar_values(&self) -> &[f64] {
        &self.bar_values
    }

    #[must_use]
    pub fn line_values(&self) -> &[f64] {
        &self.line_values
    }

    #[must_use]
    pub const fn highlight_index(&self) -> isize {
        self.highlight_index
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub const fn insets(&self) -> ChartInsets {
        self.insets
    }

    /// Latest redraw generation.
    #[must_use]
    pub const fn redraw_token(&self) -> RedrawToken {
        self.token
    }

    /// Computes a fresh geometry pass from the current inputs.
    pub fn geometry(&self) -> ChartResult<ChartGeometry> {
        compute_chart_geometry(
            &self.bar_values,
            &self.line_values,
            self.highlight_index,
            self.insets,
            self.viewport,
        )
    }

    fn bump(&mut self, reason: &str) -> RedrawToken {
        self.token = self.token.next();
        debug!(generation = self.token.raw(), reason, "chart redraw requested");
        self.token
    }
}
