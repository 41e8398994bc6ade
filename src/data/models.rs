use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Converts an exact decimal price into the f64 space the geometry core
/// works in.
pub fn decimal_price_f64(price: Decimal, field_name: &str) -> ChartResult<f64> {
    price.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// One listed asset with its current price and 24h change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub change_percent: f64,
}

impl Asset {
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        change_percent: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change_percent,
        }
    }

    pub fn price_f64(&self) -> ChartResult<f64> {
        decimal_price_f64(self.price, "asset price")
    }
}

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerKind {
    Receive,
    Send,
}

impl LedgerKind {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Receive => "Receive",
            Self::Send => "Send",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Receive => "arrow.down",
            Self::Send => "arrow.up",
        }
    }
}

/// One historical transfer shown on the record screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub kind: LedgerKind,
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub amount: f64,
}

impl LedgerEntry {
    #[must_use]
    pub fn new(
        kind: LedgerKind,
        timestamp: DateTime<Utc>,
        symbol: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            kind,
            timestamp,
            symbol: symbol.into(),
            amount,
        }
    }
}

/// Aggregate portfolio totals shown on the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub fiat_value: f64,
    pub btc_value: f64,
}
