//! `rasoi-billing` — invoice construction, pricing, and bill rendering.

pub mod order;
pub mod pricing;
pub mod render;

pub use order::{InvoiceBuilder, MAX_ORDER_LINES, Order, OrderLine};
pub use pricing::{DISCOUNT_RATE, GST_RATE, PriceBreakdown};
pub use render::{BUSINESS_NAME, render_bill};
