//! Text rendering of the swap widget.
//!
//! One renderer for both phases; presentation differences are driven by
//! `DisplayCfg` instead of separate widget variants.

use std::fmt::Write;

use crate::domain::session::{Phase, SwapSession, VerificationStatus};
use crate::shared::config::{DisplayCfg, SwapCfg};
use crate::shared::types::TokenCatalog;
use crate::shared::utils::{format_amount, format_grouped};

pub fn render(session: &SwapSession, display: &DisplayCfg, swap: &SwapCfg) -> String {
    match session.phase() {
        Phase::Idle => render_compose(session, display, swap),
        Phase::ResultShown => render_result(session, display, swap),
    }
}

pub fn render_compose(session: &SwapSession, display: &DisplayCfg, swap: &SwapCfg) -> String {
    let from = session.from_token();
    let to = session.to_token();
    let mut out = String::new();

    let _ = writeln!(out, "== GlyphSwap [Beta] ==");
    let _ = writeln!(out, "From:   {} ({})", from.symbol, from.name);
    let _ = writeln!(out, "Amount: {}", placeholder(session.amount(), "0.0"));
    if display.show_minimum_input {
        let _ = writeln!(
            out,
            "Minimum input: {} {} (including {}% fee)",
            format_amount(session.minimum_input(), display.precision),
            from.symbol,
            swap.fee_percent
        );
    }
    let _ = writeln!(out, "To:     {} ({})", to.symbol, to.name);
    if display.show_liquidity {
        let _ = writeln!(
            out,
            "Available liquidity: {} {}",
            format_grouped(session.pool().balance(&to.symbol)),
            to.symbol
        );
    }
    let _ = writeln!(
        out,
        "Wallet: {}",
        placeholder(session.wallet_address(), "<enter your wallet address>")
    );
    if session.estimated_output() > 0.0 {
        let _ = writeln!(
            out,
            "Estimated amount: {} {}",
            format_amount(session.estimated_output(), display.precision),
            to.symbol
        );
    }
    out
}

pub fn render_result(session: &SwapSession, display: &DisplayCfg, swap: &SwapCfg) -> String {
    let from = &session.from_token().symbol;
    let to = &session.to_token().symbol;
    let mut out = String::new();

    let _ = writeln!(out, "== Swap Initiated ==");
    let _ = writeln!(
        out,
        "You are swapping {} {} for approximately {} {}.",
        session.amount(),
        from,
        format_amount(session.estimated_output(), display.precision),
        to
    );
    let _ = writeln!(out, "Please send {} {} to the following address:", session.amount(), from);
    let _ = writeln!(out, "  {}", swap.swap_wallet);
    let _ = writeln!(out, "After sending, please enter your transaction ID to verify the swap.");
    if !session.transaction_id().is_empty() {
        let _ = writeln!(out, "Transaction ID: {}", session.transaction_id());
    }
    match session.verification_status() {
        VerificationStatus::None => {}
        VerificationStatus::Success => {
            let _ = writeln!(out, "[Success] Your transaction has been submitted for verification.");
        }
        VerificationStatus::Error => {
            let _ = writeln!(
                out,
                "[Error] There was an error verifying your transaction. Please try again or contact support."
            );
        }
    }
    let _ = writeln!(out, "Need help? Join our Discord: {}", swap.support_url);
    out
}

pub fn render_catalog(catalog: &TokenCatalog) -> String {
    let mut out = String::new();
    for token in catalog.tokens() {
        let _ = writeln!(
            out,
            "{:<8} {:<10} supply {:>18}  {}",
            token.symbol,
            token.name,
            format_grouped(token.total_supply as f64),
            token.image_url
        );
    }
    out
}

fn placeholder<'a>(value: &'a str, empty: &'a str) -> &'a str {
    if value.is_empty() {
        empty
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use std::collections::HashMap;

    fn session() -> SwapSession {
        let mut s = SwapSession::from_config(&AppConfig::default()).unwrap();
        s.load_pool(HashMap::from([("RADCAT".to_string(), 1_000_000.0)]));
        s
    }

    #[test]
    fn test_compose_view() {
        let cfg = AppConfig::default();
        let mut s = session();
        let empty = render(&s, &cfg.display, &cfg.swap);
        assert!(empty.contains("From:   RXD (Radiant)"));
        assert!(empty.contains("Amount: 0.0"));
        assert!(empty.contains("(including 3% fee)"));
        assert!(empty.contains("Available liquidity: 1,000,000 RADCAT"));
        assert!(!empty.contains("Estimated amount"));

        s.set_amount("1000000").unwrap();
        let filled = render(&s, &cfg.display, &cfg.swap);
        assert!(filled.contains("Estimated amount: 169750.000000 RADCAT"));
    }

    #[test]
    fn test_display_toggles() {
        let cfg = AppConfig::default();
        let display = DisplayCfg { precision: 2, show_minimum_input: false, show_liquidity: false };
        let mut s = session();
        s.set_amount("1000000").unwrap();

        let text = render_compose(&s, &display, &cfg.swap);
        assert!(!text.contains("Minimum input"));
        assert!(!text.contains("Available liquidity"));
        assert!(text.contains("Estimated amount: 169750.00 RADCAT"));
    }

    #[test]
    fn test_catalog_listing() {
        let text = render_catalog(&TokenCatalog::default());
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("100,000,000,000"));
    }
}
