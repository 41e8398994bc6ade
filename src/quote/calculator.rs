use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::quote::summary::{Denomination, QuoteSummary, SwapDirection};

/// Gross amount, total fee and net receive of one quote preview.
///
/// `gross` and `fee` are always denominated in the target currency; the fee
/// is charged against the target-side gross in both directions. `receive` is
/// in the receiving side's units. The reverse direction is therefore not a
/// mirror of the forward formula; the asymmetry keeps fee economics in one
/// currency and is observable behavior, not an accident.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub gross: f64,
    pub fee: f64,
    pub receive: f64,
}

impl QuoteBreakdown {
    const ZERO: Self = Self {
        gross: 0.0,
        fee: 0.0,
        receive: 0.0,
    };
}

/// Net receive amount plus its display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePreview {
    pub receive: f64,
    pub display: String,
}

/// Parses free-form amount text.
///
/// Unparsable, non-finite or negative input coerces to zero; this is a
/// display preview, malformed input is never an error.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Computes the fee-adjusted receive amount for the given direction.
///
/// Forward: `gross = amount * rate`, `fee = gross * spread + flat_fee`,
/// `receive = max(gross - fee, 0)`. Reverse treats the amount as already
/// target-denominated, applies the fee in target space first and only then
/// converts: `receive = max(amount - fee, 0) / rate`.
///
/// Unusable terms (rate not finite and positive, spread outside `[0, 1)`)
/// produce an all-zero breakdown rather than an error.
#[must_use]
pub fn compute_quote(
    amount_text: &str,
    summary: QuoteSummary,
    direction: SwapDirection,
) -> QuoteBreakdown {
    if !summary.is_usable() {
        return QuoteBreakdown::ZERO;
    }

    let amount = parse_amount(amount_text);
    let breakdown = match direction {
        SwapDirection::Forward => {
            let gross = amount * summary.rate;
            let fee = gross * summary.spread + summary.flat_fee;
            QuoteBreakdown {
                gross,
                fee,
                receive: (gross - fee).max(0.0),
            }
        }
        SwapDirection::Reverse => {
            let fee = amount * summary.spread + summary.flat_fee;
            let net_target = (amount - fee).max(0.0);
            QuoteBreakdown {
                gross: amount,
                fee,
                receive: (net_target / summary.rate).max(0.0),
            }
        }
    };

    trace!(
        amount,
        ?direction,
        gross = breakdown.gross,
        fee = breakdown.fee,
        receive = breakdown.receive,
        "quote preview computed"
    );
    breakdown
}

/// Formats an amount with the denomination's fixed fraction digits.
#[must_use]
pub fn format_amount(value: f64, denomination: Denomination) -> String {
    format!("{value:.prec$}", prec = denomination.fraction_digits())
}

/// One-call preview: breakdown plus display text for the receiving side.
#[must_use]
pub fn quote_preview(
    amount_text: &str,
    summary: QuoteSummary,
    direction: SwapDirection,
    receive_denomination: Denomination,
) -> QuotePreview {
    let breakdown = compute_quote(amount_text, summary, direction);
    QuotePreview {
        receive: breakdown.receive,
        display: format_amount(breakdown.receive, receive_denomination),
    }
}

/// Carries the prior receive amount over as the new send amount on a
/// direction swap.
///
/// "What you were about to receive" becomes "what you are now sending",
/// formatted to the new target side's precision. A non-finite prior receive
/// keeps the current text unchanged.
#[must_use]
pub fn swap_direction(
    current_amount_text: &str,
    prior_receive: f64,
    target_denomination: Denomination,
) -> String {
    if !prior_receive.is_finite() {
        return current_amount_text.to_owned();
    }
    format_amount(prior_receive.max(0.0), target_denomination)
}
