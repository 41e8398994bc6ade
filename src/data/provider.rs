use crate::data::models::{Asset, LedgerEntry, PortfolioSnapshot};
use crate::quote::QuoteSummary;

/// Source of asset, ledger and rate data for the presentation layer.
///
/// The geometry and quote cores never touch a provider; screens inject one
/// and hand plain slices and summaries down. Implementations are expected to
/// be cheap to query (no I/O on the call path).
pub trait MarketDataProvider {
    fn assets(&self) -> &[Asset];

    /// Looks an asset up by its ticker symbol.
    fn asset(&self, symbol: &str) -> Option<&Asset>;

    fn ledger(&self) -> &[LedgerEntry];

    /// Rate and fee terms for the exchange screen's trading pair.
    fn exchange_summary(&self) -> QuoteSummary;

    fn portfolio_snapshot(&self) -> PortfolioSnapshot;

    /// Bar and line sample series backing the dashboard chart.
    fn chart_series(&self) -> (&[f64], &[f64]);
}
