pub mod models;
pub mod provider;
pub mod static_provider;

pub use models::{Asset, LedgerEntry, LedgerKind, PortfolioSnapshot, decimal_price_f64};
pub use provider::MarketDataProvider;
pub use static_provider::StaticMarketData;
