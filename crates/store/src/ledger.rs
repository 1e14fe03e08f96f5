//! The append-only ledger record and its wire format.

use serde::{Deserialize, Serialize};

use rasoi_core::{DomainError, DomainResult};

/// One saved invoice: `customer|total`, exactly two decimal digits, one
/// record per line. Records are appended and never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub customer: String,
    pub total: f64,
}

impl LedgerRecord {
    /// Build a validated record. The separator character is rejected in the
    /// customer name since it would corrupt the wire format.
    pub fn new(customer: impl Into<String>, total: f64) -> DomainResult<Self> {
        let customer = customer.into();
        if customer.trim().is_empty() {
            return Err(DomainError::validation("customer name must not be empty"));
        }
        if customer.contains('|') {
            return Err(DomainError::validation(
                "customer name must not contain '|'",
            ));
        }
        if !total.is_finite() || total < 0.0 {
            return Err(DomainError::validation(format!(
                "ledger total must be a non-negative amount, got {total}"
            )));
        }
        Ok(Self { customer, total })
    }

    /// Parse one ledger line: everything before the first `|` is the
    /// customer, the remainder is the amount.
    pub fn parse(line: &str) -> DomainResult<Self> {
        let (customer, amount) = line
            .split_once('|')
            .ok_or_else(|| DomainError::parse(format!("missing '|' separator: {line:?}")))?;
        if customer.is_empty() {
            return Err(DomainError::parse(format!("empty customer name: {line:?}")));
        }
        let total: f64 = amount
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("bad amount {amount:?}: {line:?}")))?;
        Ok(Self {
            customer: customer.to_string(),
            total,
        })
    }

    /// Serialize to the wire format, without trailing newline.
    pub fn to_line(&self) -> String {
        format!("{}|{:.2}", self.customer, self.total)
    }
}
