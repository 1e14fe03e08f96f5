//! Fixed-column textual rendering of a finalized bill.
//!
//! The bill is rendered once into a `String`; the same string goes to the
//! screen and to the invoice file, so the two sinks can never diverge.

use std::fmt::Write as _;

use rasoi_core::format_amount;

use crate::order::Order;
use crate::pricing::PriceBreakdown;

/// Business name printed in the bill banner.
pub const BUSINESS_NAME: &str = "INDIAN CUISINE DAILY";

const RULE_HEAVY: &str = "===============================================";
const RULE_LIGHT: &str = "-----------------------------------------------";

/// Render the full bill: banner, header, one row per line, totals footer.
pub fn render_bill(order: &Order, breakdown: &PriceBreakdown) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "{BUSINESS_NAME:^47}");
    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(
        out,
        "Customer: {}    Date: {}",
        order.customer(),
        order.date()
    );
    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(
        out,
        "{:<6} {:<25} {:<6} {:<10} {:<10}",
        "Code", "Item", "Qty", "Price", "Total"
    );
    let _ = writeln!(out, "{RULE_LIGHT}");

    for line in order.lines() {
        let _ = writeln!(
            out,
            "{:<6} {:<25} {:<6} {:<10} {:<10}",
            line.code,
            line.name,
            line.quantity,
            format_amount(line.price),
            format_amount(line.line_total()),
        );
    }

    let _ = writeln!(out, "{RULE_LIGHT}");
    footer_row(&mut out, "Subtotal:", &format_amount(breakdown.subtotal));
    footer_row(
        &mut out,
        "Discount (10%):",
        &format!("-{}", format_amount(breakdown.discount)),
    );
    footer_row(&mut out, "Net Total:", &format_amount(breakdown.net_total));
    footer_row(&mut out, "CGST (9%):", &format_amount(breakdown.cgst));
    footer_row(&mut out, "SGST (9%):", &format_amount(breakdown.sgst));
    let _ = writeln!(out, "{RULE_LIGHT}");
    footer_row(
        &mut out,
        "GRAND TOTAL:",
        &format_amount(breakdown.grand_total),
    );
    let _ = writeln!(out, "{RULE_HEAVY}");

    out
}

fn footer_row(out: &mut String, label: &str, amount: &str) {
    let _ = writeln!(out, "{label:<27}{amount}");
}
