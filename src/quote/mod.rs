pub mod calculator;
pub mod summary;

pub use calculator::{
    QuoteBreakdown, QuotePreview, compute_quote, format_amount, parse_amount, quote_preview,
    swap_direction,
};
pub use summary::{Denomination, QuoteSummary, SwapDirection};
