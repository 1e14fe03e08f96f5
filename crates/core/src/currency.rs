//! Currency presentation helpers.
//!
//! Amounts are carried as `f64` through the whole pipeline and rounded to two
//! decimal places only when formatted. This keeps per-line rounding error out
//! of subtotal accumulation.

/// Fixed currency tag prefixed to every displayed amount.
pub const CURRENCY_TAG: &str = "INR";

/// Format an amount for display: `INR` tag plus two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_TAG}{amount:.2}")
}
