use folio_chart::quote::{
    Denomination, QuoteSummary, SwapDirection, compute_quote, parse_amount, swap_direction,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn receive_is_never_negative(
        amount in 0.0f64..1.0e9,
        rate in 0.0001f64..1.0e6,
        spread in 0.0f64..0.999,
        flat_fee in 0.0f64..1.0e4,
        reverse in any::<bool>(),
    ) {
        let summary = QuoteSummary::new(rate, spread, flat_fee);
        let direction = if reverse {
            SwapDirection::Reverse
        } else {
            SwapDirection::Forward
        };

        let breakdown = compute_quote(&amount.to_string(), summary, direction);
        prop_assert!(breakdown.receive >= 0.0);
        prop_assert!(breakdown.receive.is_finite());
    }

    #[test]
    fn forward_fee_is_at_least_the_flat_fee(
        amount in 0.0f64..1.0e9,
        rate in 0.0001f64..1.0e6,
        spread in 0.0f64..0.999,
        flat_fee in 0.0f64..1.0e4,
    ) {
        let summary = QuoteSummary::new(rate, spread, flat_fee);
        let breakdown = compute_quote(&amount.to_string(), summary, SwapDirection::Forward);
        prop_assert!(breakdown.fee >= flat_fee - 1e-9);
        prop_assert!(breakdown.receive <= breakdown.gross + 1e-9);
    }

    #[test]
    fn parse_amount_is_total(text in "\\PC*") {
        let amount = parse_amount(&text);
        prop_assert!(amount >= 0.0);
        prop_assert!(amount.is_finite());
    }

    #[test]
    fn swap_text_always_parses_back(
        prior in 0.0f64..1.0e12,
        fiat in any::<bool>(),
    ) {
        let denomination = if fiat {
            Denomination::Fiat
        } else {
            Denomination::Token
        };
        let text = swap_direction("0", prior, denomination);
        let parsed = parse_amount(&text);
        prop_assert!(parsed >= 0.0);
        // Fixed-precision formatting stays within rounding distance.
        let step = if fiat { 0.005 } else { 0.000_000_5 };
        prop_assert!((parsed - prior).abs() <= step + prior * 1e-12);
    }
}
