//! Persistence of finalized invoices: one file per invoice plus an
//! append-only ledger record.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::PathBuf;

use chrono::Local;

use rasoi_billing::Order;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::ledger::LedgerRecord;

/// Writes rendered invoices under the invoices directory and appends one
/// ledger record per save.
#[derive(Debug)]
pub struct InvoiceStore {
    config: StoreConfig,
    /// Disambiguates filenames when two invoices for the same customer are
    /// saved within the same second.
    seq: u64,
}

impl InvoiceStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config, seq: 0 }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Persist the rendered bill to a uniquely named file. The invoices
    /// directory is created if absent; creation is idempotent.
    pub fn save(&mut self, order: &Order, rendered: &str) -> StoreResult<PathBuf> {
        let dir = self.config.invoices_dir();
        fs::create_dir_all(&dir)?;

        self.seq += 1;
        let filename = format!(
            "{}_{}_{}.txt",
            sanitize_filename(order.customer()),
            Local::now().format("%Y%m%d%H%M%S"),
            self.seq,
        );
        let path = dir.join(filename);
        fs::write(&path, rendered)?;

        tracing::info!(path = %path.display(), customer = order.customer(), "invoice saved");
        Ok(path)
    }

    /// Append one `customer|total` line to the ledger, creating the file if
    /// absent. Existing content is never rewritten.
    pub fn append_ledger(&self, customer: &str, total: f64) -> StoreResult<()> {
        let record = LedgerRecord::new(customer, total)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.config.ledger_path())?;
        writeln!(file, "{}", record.to_line())?;

        tracing::debug!(customer, total, "ledger record appended");
        Ok(())
    }
}

/// Reduce a customer name to a filesystem-safe stem.
fn sanitize_filename(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if stem.chars().all(|c| c == '_') {
        "customer".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasoi_billing::{InvoiceBuilder, PriceBreakdown, render_bill};
    use rasoi_catalog::Catalog;

    fn scenario_order(customer: &str) -> Order {
        let catalog = Catalog::with_defaults();
        let mut builder = InvoiceBuilder::new(customer).unwrap();
        builder.add_catalog_item(&catalog, "BRY01", 2).unwrap();
        builder.add_catalog_item(&catalog, "CHT04", 3).unwrap();
        builder.finish()
    }

    #[test]
    fn save_writes_the_rendered_bill_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InvoiceStore::new(StoreConfig::new(dir.path()));

        let order = scenario_order("Asha");
        let bill = render_bill(&order, &PriceBreakdown::for_order(&order));
        let path = store.save(&order, &bill).unwrap();

        assert!(path.starts_with(dir.path().join("Invoices")));
        assert_eq!(fs::read_to_string(&path).unwrap(), bill);
    }

    #[test]
    fn rapid_saves_for_the_same_customer_get_distinct_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InvoiceStore::new(StoreConfig::new(dir.path()));

        let order = scenario_order("Asha");
        let bill = render_bill(&order, &PriceBreakdown::for_order(&order));
        let first = store.save(&order, &bill).unwrap();
        let second = store.save(&order, &bill).unwrap();
        let third = store.save(&order, &bill).unwrap();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(fs::read_dir(dir.path().join("Invoices")).unwrap().count(), 3);
    }

    #[test]
    fn append_ledger_accumulates_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = InvoiceStore::new(StoreConfig::new(dir.path()));

        store.append_ledger("Alice", 100.0).unwrap();
        store.append_ledger("Bob", 50.0).unwrap();
        store.append_ledger("Alice", 25.0).unwrap();

        let content = fs::read_to_string(store.config().ledger_path()).unwrap();
        assert_eq!(content, "Alice|100.00\nBob|50.00\nAlice|25.00\n");
    }

    #[test]
    fn append_ledger_rejects_separator_in_customer_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = InvoiceStore::new(StoreConfig::new(dir.path()));

        assert!(store.append_ledger("Al|ice", 10.0).is_err());
        assert!(!store.config().ledger_path().exists());
    }

    #[test]
    fn filenames_are_sanitized() {
        assert_eq!(sanitize_filename("Asha Rao"), "Asha_Rao");
        assert_eq!(sanitize_filename("../../etc"), "______etc");
        assert_eq!(sanitize_filename("???"), "customer");
    }
}
