//! Storage location configuration.

use std::path::{Path, PathBuf};

const INVOICES_DIR: &str = "Invoices";
const LEDGER_FILE: &str = "InvoiceSummary.txt";
const SUMMARY_FILE: &str = "ConsolidatedSummary.txt";

/// Where invoices, the ledger, and the consolidated report live. All paths
/// derive from a single data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Read the data directory from `RASOI_DATA_DIR`, defaulting to the
    /// current directory.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("RASOI_DATA_DIR").unwrap_or_else(|_| {
            tracing::debug!("RASOI_DATA_DIR not set; using current directory");
            ".".to_string()
        });
        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory that holds one file per saved invoice.
    pub fn invoices_dir(&self) -> PathBuf {
        self.data_dir.join(INVOICES_DIR)
    }

    /// Append-only ledger file, one `customer|total` record per line.
    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(LEDGER_FILE)
    }

    /// Consolidated report, overwritten on each aggregation run.
    pub fn summary_path(&self) -> PathBuf {
        self.data_dir.join(SUMMARY_FILE)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_derive_from_the_data_dir() {
        let config = StoreConfig::new("/tmp/rasoi");
        assert_eq!(config.invoices_dir(), PathBuf::from("/tmp/rasoi/Invoices"));
        assert_eq!(
            config.ledger_path(),
            PathBuf::from("/tmp/rasoi/InvoiceSummary.txt")
        );
        assert_eq!(
            config.summary_path(),
            PathBuf::from("/tmp/rasoi/ConsolidatedSummary.txt")
        );
    }
}
