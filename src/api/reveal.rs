use serde::{Deserialize, Serialize};

use crate::api::session::RedrawToken;

/// Curve reveal progress as a pure function of elapsed time.
///
/// The host re-arms the reveal with the redraw token of the latest geometry
/// pass and then samples `progress` with the time elapsed since that trigger.
/// A token older than the armed one is stale and yields `None`, so a prior
/// in-flight animation can never race a newer recomputation. Marker and bars
/// are not revealed; they snap to the new geometry immediately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveReveal {
    duration_ms: f64,
    armed: RedrawToken,
}

impl Default for CurveReveal {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION_MS)
    }
}

impl CurveReveal {
    pub const DEFAULT_DURATION_MS: f64 = 600.0;

    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: if duration_ms.is_finite() && duration_ms > 0.0 {
                duration_ms
            } else {
                Self::DEFAULT_DURATION_MS
            },
            armed: RedrawToken::default(),
        }
    }

    #[must_use]
    pub const fn duration_ms(self) -> f64 {
        self.duration_ms
    }

    /// Restarts the reveal against the given redraw generation.
    pub fn arm(&mut self, token: RedrawToken) {
        self.armed = self.armed.max(token);
    }

    /// Reveal fraction in `[0, 1]` for the given generation and elapsed time.
    ///
    /// Returns `None` when `token` is older than the armed generation: that
    /// trigger has been superseded and must have no effect.
    #[must_use]
    pub fn progress(self, token: RedrawToken, elapsed_ms: f64) -> Option<f64> {
        if token < self.armed {
            return None;
        }
        let fraction = elapsed_ms / self.duration_ms;
        if fraction.is_finite() {
            Some(fraction.clamp(0.0, 1.0))
        } else {
            Some(0.0)
        }
    }

    /// Whether the reveal for `token` has fully played out after `elapsed_ms`.
    #[must_use]
    pub fn is_settled(self, token: RedrawToken, elapsed_ms: f64) -> bool {
        matches!(self.progress(token, elapsed_ms), Some(p) if p >= 1.0)
    }
}
