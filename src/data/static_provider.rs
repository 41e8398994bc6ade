use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::data::models::{Asset, LedgerEntry, LedgerKind, PortfolioSnapshot};
use crate::data::provider::MarketDataProvider;
use crate::quote::QuoteSummary;

/// Fixed demo dataset standing in for a real market feed.
///
/// Assets keep their display order in a symbol-keyed map; all numbers are
/// static and constructed once.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMarketData {
    assets: IndexMap<String, Asset>,
    asset_list: Vec<Asset>,
    ledger: Vec<LedgerEntry>,
    summary: QuoteSummary,
    snapshot: PortfolioSnapshot,
    bar_values: Vec<f64>,
    line_values: Vec<f64>,
}

impl Default for StaticMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticMarketData {
    #[must_use]
    pub fn new() -> Self {
        let asset_list = vec![
            Asset::new("BTC", "Bitcoin", Decimal::new(7_562_500, 0), 3.2),
            Asset::new("ETH", "Ether", Decimal::new(179_100, 0), -1.1),
            Asset::new("SOL", "Solana", Decimal::new(12_500, 0), 2.4),
            Asset::new("USDT", "Tether", Decimal::new(831, 1), 0.0),
        ];
        let assets = asset_list
            .iter()
            .map(|asset| (asset.symbol.clone(), asset.clone()))
            .collect();

        let ledger = vec![
            LedgerEntry::new(LedgerKind::Receive, demo_date(2025, 3, 20), "BTC", 0.002126),
            LedgerEntry::new(LedgerKind::Send, demo_date(2025, 3, 19), "ETH", 0.003126),
            LedgerEntry::new(LedgerKind::Send, demo_date(2025, 3, 18), "LTC", 0.02126),
        ];

        Self {
            assets,
            asset_list,
            ledger,
            summary: QuoteSummary::new(176_138.80, 0.002, 422.73),
            snapshot: PortfolioSnapshot {
                fiat_value: 157_342.05,
                btc_value: 0.015,
            },
            bar_values: vec![
                10.0, 20.0, 14.0, 18.0, 22.0, 17.0, 23.0, 28.0, 25.0, 30.0, 33.0,
            ],
            line_values: vec![
                10.0, 18.0, 15.0, 20.0, 19.0, 22.0, 27.0, 31.0, 30.0, 34.0, 36.0,
            ],
        }
    }
}

impl MarketDataProvider for StaticMarketData {
    fn assets(&self) -> &[Asset] {
        &self.asset_list
    }

    fn asset(&self, symbol: &str) -> Option<&Asset> {
        self.assets.get(symbol)
    }

    fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    fn exchange_summary(&self) -> QuoteSummary {
        self.summary
    }

    fn portfolio_snapshot(&self) -> PortfolioSnapshot {
        self.snapshot
    }

    fn chart_series(&self) -> (&[f64], &[f64]) {
        (&self.bar_values, &self.line_values)
    }
}

fn demo_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
