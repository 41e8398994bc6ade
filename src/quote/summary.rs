use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Static rate and fee terms for one trading pair.
///
/// `rate` is target units per one source unit; `flat_fee` is denominated in
/// the target currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub rate: f64,
    pub spread: f64,
    pub flat_fee: f64,
}

impl QuoteSummary {
    #[must_use]
    pub const fn new(rate: f64, spread: f64, flat_fee: f64) -> Self {
        Self {
            rate,
            spread,
            flat_fee,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(ChartError::InvalidData(
                "quote rate must be finite and > 0".to_owned(),
            ));
        }
        if !self.spread.is_finite() || !(0.0..1.0).contains(&self.spread) {
            return Err(ChartError::InvalidData(
                "quote spread must be in [0, 1)".to_owned(),
            ));
        }
        if !self.flat_fee.is_finite() || self.flat_fee < 0.0 {
            return Err(ChartError::InvalidData(
                "quote flat fee must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Whether the terms are usable for a preview without erroring.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.validate().is_ok()
    }
}

/// Conversion direction of a quote preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Source to target: the typed amount is in source units.
    Forward,
    /// Target to source: the typed amount is already in target units.
    Reverse,
}

impl SwapDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Display precision class of the receiving side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Denomination {
    /// Currency-like units, 2 fraction digits.
    Fiat,
    /// High-precision token units, 6 fraction digits.
    Token,
}

impl Denomination {
    #[must_use]
    pub const fn fraction_digits(self) -> usize {
        match self {
            Self::Fiat => 2,
            Self::Token => 6,
        }
    }
}
