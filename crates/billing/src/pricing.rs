use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Flat discount applied to every invoice.
pub const DISCOUNT_RATE: f64 = 0.10;

/// Rate of each GST component. CGST and SGST share the rate but are reported
/// as separate lines.
pub const GST_RATE: f64 = 0.09;

/// Full price breakdown for one invoice.
///
/// Pure computation over the subtotal; all values are kept at full `f64`
/// precision and rounded to two decimals only at presentation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub discount: f64,
    pub net_total: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub grand_total: f64,
}

impl PriceBreakdown {
    /// Compute the breakdown from a subtotal.
    pub fn compute(subtotal: f64) -> Self {
        let discount = DISCOUNT_RATE * subtotal;
        let net_total = subtotal - discount;
        let cgst = GST_RATE * net_total;
        let sgst = GST_RATE * net_total;
        Self {
            subtotal,
            discount,
            net_total,
            cgst,
            sgst,
            grand_total: net_total + cgst + sgst,
        }
    }

    /// Breakdown over an order's line items.
    pub fn for_order(order: &Order) -> Self {
        Self::compute(order.subtotal())
    }
}
