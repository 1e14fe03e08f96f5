//! Consolidation of the ledger into a per-customer summary report.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use rasoi_core::format_amount;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::ledger::LedgerRecord;

const RULE: &str = "---------------------------------------------";

/// Aggregated total for one customer across all their ledger records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub customer: String,
    pub total: f64,
}

/// Derived view over the ledger: per-customer totals in first-seen order,
/// plus the count of records included and the grand total.
///
/// The invoice count covers successfully parsed records only, so the sum of
/// per-customer totals always equals the grand total it is reported next to.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    entries: Vec<SummaryEntry>,
    invoice_count: usize,
    grand_total: f64,
}

impl Summary {
    /// Fold ledger lines into per-customer totals. Malformed lines are
    /// logged and skipped; a bad record never aborts the run.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut totals: IndexMap<String, f64> = IndexMap::new();
        let mut invoice_count = 0usize;

        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            match LedgerRecord::parse(line) {
                Ok(record) => {
                    *totals.entry(record.customer).or_insert(0.0) += record.total;
                    invoice_count += 1;
                }
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed ledger line");
                }
            }
        }

        let grand_total = totals.values().sum();
        let entries = totals
            .into_iter()
            .map(|(customer, total)| SummaryEntry { customer, total })
            .collect();
        Self {
            entries,
            invoice_count,
            grand_total,
        }
    }

    /// Per-customer entries, in first-seen order.
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    /// Number of ledger records included in the aggregate.
    pub fn invoice_count(&self) -> usize {
        self.invoice_count
    }

    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Render the consolidated report. The same text is shown on screen and
    /// written to the report file.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "====== Invoice Summary ======");
        let _ = writeln!(out, "Customer Name               Total ({})", rasoi_core::CURRENCY_TAG);
        let _ = writeln!(out, "{RULE}");
        for entry in &self.entries {
            let _ = writeln!(out, "{:<25} {}", entry.customer, format_amount(entry.total));
        }
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Total Invoices: {}", self.invoice_count);
        let _ = writeln!(out, "Total Sales: {}", format_amount(self.grand_total));
        out
    }
}

/// Reads the ledger and produces the consolidated report.
#[derive(Debug)]
pub struct SummaryAggregator {
    config: StoreConfig,
}

impl SummaryAggregator {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Aggregate the ledger. `Ok(None)` when no ledger exists yet — nothing
    /// has been saved, so no report is produced.
    pub fn aggregate(&self) -> StoreResult<Option<Summary>> {
        let path = self.config.ledger_path();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no ledger file; nothing to summarize");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let lines: Vec<String> = BufReader::new(file).lines().collect::<Result<_, _>>()?;
        Ok(Some(Summary::from_lines(lines)))
    }

    /// Overwrite the consolidated report with the rendered summary.
    pub fn write_report(&self, summary: &Summary) -> StoreResult<PathBuf> {
        let path = self.config.summary_path();
        fs::write(&path, summary.render())?;
        tracing::info!(path = %path.display(), invoices = summary.invoice_count(), "consolidated report written");
        Ok(path)
    }
}
