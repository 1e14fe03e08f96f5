//! `rasoi-store` — invoice persistence, the append-only ledger, and the
//! consolidated summary report.

pub mod config;
pub mod error;
pub mod invoice_store;
pub mod ledger;
pub mod summary;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use invoice_store::InvoiceStore;
pub use ledger::LedgerRecord;
pub use summary::{Summary, SummaryAggregator, SummaryEntry};
