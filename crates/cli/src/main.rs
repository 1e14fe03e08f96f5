//! Interactive restaurant billing console.

mod commands;
mod prompt;

use anyhow::Result;

use rasoi_catalog::Catalog;
use rasoi_store::{InvoiceStore, StoreConfig, SummaryAggregator};

fn main() -> Result<()> {
    rasoi_observability::init();

    let config = StoreConfig::from_env();
    tracing::info!(data_dir = %config.data_dir().display(), "starting rasoi");

    let mut catalog = Catalog::with_defaults();
    let mut store = InvoiceStore::new(config.clone());
    let aggregator = SummaryAggregator::new(config);

    loop {
        println!("\n====== RASOI MAIN MENU ======");
        println!("1. Create Invoice");
        println!("2. Manage Item Catalog");
        println!("3. Generate Invoice Summary");
        println!("4. Exit");

        match prompt::read_line("Enter your choice: ")?.as_str() {
            "1" => commands::create_invoice(&catalog, &mut store)?,
            "2" => commands::manage_catalog(&mut catalog)?,
            "3" => commands::generate_summary(&aggregator)?,
            "4" => {
                println!("Exiting...");
                break;
            }
            other => println!("Invalid choice '{other}'. Try again."),
        }
    }

    Ok(())
}
