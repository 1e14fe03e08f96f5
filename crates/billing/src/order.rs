use chrono::Local;
use serde::{Deserialize, Serialize};

use rasoi_catalog::Catalog;
use rasoi_core::{DomainError, DomainResult};

/// Upper bound on lines per invoice. Exceeding it is a reported
/// `CapacityExceeded` error, never silent truncation.
pub const MAX_ORDER_LINES: usize = 50;

/// One invoice line: an item snapshot plus quantity.
///
/// The snapshot is deliberate — later catalog updates must not retroactively
/// change an order already being built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A finalized order, ready to be rendered and persisted. Transient: durable
/// state lives only in the invoice file and the ledger once saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    customer: String,
    date: String,
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Assembles an `Order` one selection at a time.
///
/// Lifecycle is enforced by move semantics: the builder collects lines until
/// `finish` consumes it, and the resulting `Order` is either handed to the
/// store or dropped.
#[derive(Debug)]
pub struct InvoiceBuilder {
    customer: String,
    date: String,
    lines: Vec<OrderLine>,
}

impl InvoiceBuilder {
    /// Start a new order for `customer`, stamped with the current local date.
    pub fn new(customer: impl Into<String>) -> DomainResult<Self> {
        let customer = customer.into();
        if customer.trim().is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }
        Ok(Self {
            customer,
            date: Local::now().format("%d %b %Y").to_string(),
            lines: Vec::new(),
        })
    }

    /// Resolve `code` against the catalog and append a line for it.
    ///
    /// `NotFound` signals the caller to fall back to manual entry; the order
    /// is unchanged in that case.
    pub fn add_catalog_item(
        &mut self,
        catalog: &Catalog,
        code: &str,
        quantity: u32,
    ) -> DomainResult<&OrderLine> {
        let item = catalog
            .find_by_code(code)
            .ok_or_else(|| DomainError::not_found(code))?;
        let line = OrderLine {
            code: item.code().to_string(),
            name: item.name().to_string(),
            price: item.price(),
            quantity,
        };
        self.push_line(line)
    }

    /// Append an ad hoc line for an item that is not in the catalog. The
    /// code is stored as typed; the catalog is not touched.
    pub fn add_manual_item(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> DomainResult<&OrderLine> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name must not be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "item price must be a non-negative amount, got {price}"
            )));
        }
        let line = OrderLine {
            code: code.into(),
            name,
            price,
            quantity,
        };
        self.push_line(line)
    }

    fn push_line(&mut self, line: OrderLine) -> DomainResult<&OrderLine> {
        if self.lines.len() >= MAX_ORDER_LINES {
            return Err(DomainError::capacity("order lines", MAX_ORDER_LINES));
        }
        self.lines.push(line);
        let idx = self.lines.len() - 1;
        Ok(&self.lines[idx])
    }

    /// Running subtotal over all lines so far.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// End selection and produce the order. An empty order is permitted; the
    /// caller decides whether to warn or discard.
    pub fn finish(self) -> Order {
        Order {
            customer: self.customer,
            date: self.date,
            lines: self.lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> InvoiceBuilder {
        InvoiceBuilder::new("Asha").unwrap()
    }

    #[test]
    fn catalog_selection_snapshots_code_name_and_price() {
        let catalog = Catalog::with_defaults();
        let mut b = builder();

        let line = b.add_catalog_item(&catalog, "BRY01", 2).unwrap();
        assert_eq!(line.code, "BRY01");
        assert_eq!(line.name, "Biryani");
        assert_eq!(line.price, 180.0);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total(), 360.0);
    }

    #[test]
    fn catalog_updates_do_not_touch_lines_already_added() {
        let mut catalog = Catalog::with_defaults();
        let mut b = builder();
        b.add_catalog_item(&catalog, "CHT04", 3).unwrap();

        catalog.update("CHT04", "Masala Chai", 25.0).unwrap();

        let order = b.finish();
        assert_eq!(order.lines()[0].name, "Chai");
        assert_eq!(order.lines()[0].price, 20.0);
    }

    #[test]
    fn unknown_code_is_not_found_and_order_is_unchanged() {
        let catalog = Catalog::with_defaults();
        let mut b = builder();

        let err = b.add_catalog_item(&catalog, "ZZZ99", 1).unwrap_err();
        assert_eq!(err, DomainError::NotFound("ZZZ99".to_string()));
        assert!(b.is_empty());
    }

    #[test]
    fn manual_entry_stores_the_code_as_typed() {
        let mut b = builder();
        let line = b.add_manual_item("ZZZ99", "Kheer", 45.0, 1).unwrap();
        assert_eq!(line.code, "ZZZ99");
        assert_eq!(line.name, "Kheer");
        assert_eq!(line.price, 45.0);
    }

    #[test]
    fn subtotal_is_sum_of_quantity_times_price() {
        let catalog = Catalog::with_defaults();
        let mut b = builder();
        b.add_catalog_item(&catalog, "BRY01", 2).unwrap();
        b.add_catalog_item(&catalog, "CHT04", 3).unwrap();
        b.add_manual_item("ZZZ99", "Kheer", 45.0, 2).unwrap();

        assert_eq!(b.subtotal(), 360.0 + 60.0 + 90.0);
        assert_eq!(b.finish().subtotal(), 510.0);
    }

    #[test]
    fn line_count_is_capped_at_max_order_lines() {
        let mut b = builder();
        for i in 0..MAX_ORDER_LINES {
            b.add_manual_item(format!("AD{i:03}"), "Papad", 10.0, 1)
                .unwrap();
        }
        let err = b.add_manual_item("AD999", "Papad", 10.0, 1).unwrap_err();
        assert_eq!(
            err,
            DomainError::CapacityExceeded {
                what: "order lines",
                limit: MAX_ORDER_LINES
            }
        );
        assert_eq!(b.line_count(), MAX_ORDER_LINES);
    }

    #[test]
    fn empty_customer_name_is_rejected() {
        assert!(InvoiceBuilder::new("   ").is_err());
    }

    #[test]
    fn empty_order_is_permitted() {
        let order = builder().finish();
        assert!(order.is_empty());
        assert_eq!(order.subtotal(), 0.0);
    }

    #[test]
    fn manual_entry_validates_name_and_price() {
        let mut b = builder();
        assert!(b.add_manual_item("X", "", 10.0, 1).is_err());
        assert!(b.add_manual_item("X", "Kheer", -5.0, 1).is_err());
        assert!(b.is_empty());
    }
}
