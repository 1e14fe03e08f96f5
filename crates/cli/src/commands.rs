//! The three top-level operations behind the main menu.

use std::io;

use rasoi_billing::{InvoiceBuilder, PriceBreakdown, render_bill};
use rasoi_catalog::{Catalog, Item};
use rasoi_core::{DomainError, format_amount};
use rasoi_store::{InvoiceStore, SummaryAggregator};

use crate::prompt;

/// Build an invoice interactively, show the bill, and optionally persist it.
pub fn create_invoice(catalog: &Catalog, store: &mut InvoiceStore) -> io::Result<()> {
    let customer = prompt::read_nonempty("Enter Customer Name: ")?;
    let mut builder = match InvoiceBuilder::new(customer) {
        Ok(builder) => builder,
        Err(err) => {
            println!("{err}");
            return prompt::press_enter_to_continue();
        }
    };

    loop {
        let code = prompt::read_nonempty("\nEnter Item Code (or '0' to end, 'L' to list items): ")?;
        if code == "0" {
            break;
        }
        if code.eq_ignore_ascii_case("l") {
            list_item_codes(catalog);
            continue;
        }

        let added = if let Some(item) = catalog.find_by_code(&code) {
            println!("Item: {}, Price: {}", item.name(), format_amount(item.price()));
            let quantity = prompt::read_u32("Enter Quantity: ")?;
            builder.add_catalog_item(catalog, &code, quantity).map(|_| ())
        } else {
            println!("Code '{code}' is not in the catalog; enter the item manually.");
            let name = prompt::read_nonempty("Enter item name: ")?;
            let price = prompt::read_amount("Enter Price (INR): ")?;
            let quantity = prompt::read_u32("Enter Quantity: ")?;
            builder.add_manual_item(code, name, price, quantity).map(|_| ())
        };

        match added {
            Ok(()) => println!("Running subtotal: {}", format_amount(builder.subtotal())),
            Err(err @ DomainError::CapacityExceeded { .. }) => {
                println!("{err}; closing the order.");
                break;
            }
            Err(err) => println!("{err}"),
        }
    }

    if builder.is_empty() {
        println!("Warning: this order has no lines.");
    }

    let order = builder.finish();
    let breakdown = PriceBreakdown::for_order(&order);
    let bill = render_bill(&order, &breakdown);
    print!("{bill}");

    if prompt::confirm("\nDo you want to save the invoice? (y/n): ")? {
        match store.save(&order, &bill) {
            Ok(path) => {
                println!("Invoice saved as {}", path.display());
                if let Err(err) = store.append_ledger(order.customer(), breakdown.grand_total) {
                    println!("Could not record the invoice in the ledger: {err}");
                }
            }
            Err(err) => println!("Could not save the invoice: {err}"),
        }
    }

    prompt::press_enter_to_continue()
}

/// Catalog maintenance sub-menu: list, add, update, delete.
pub fn manage_catalog(catalog: &mut Catalog) -> io::Result<()> {
    loop {
        println!("\n====== Item Catalog Management ======");
        println!("1. List Items");
        println!("2. Add New Item");
        println!("3. Update Existing Item");
        println!("4. Delete Item");
        println!("5. Back to Main Menu");

        match prompt::read_line("Enter your choice: ")?.as_str() {
            "1" => {
                list_items(catalog);
                prompt::press_enter_to_continue()?;
            }
            "2" => {
                add_item(catalog)?;
                prompt::press_enter_to_continue()?;
            }
            "3" => {
                update_item(catalog)?;
                prompt::press_enter_to_continue()?;
            }
            "4" => {
                delete_item(catalog)?;
                prompt::press_enter_to_continue()?;
            }
            "5" => return Ok(()),
            other => println!("Invalid choice '{other}'. Try again."),
        }
    }
}

/// Consolidate the ledger into the summary report.
pub fn generate_summary(aggregator: &SummaryAggregator) -> io::Result<()> {
    match aggregator.aggregate() {
        Ok(Some(summary)) => {
            print!("{}", summary.render());
            match aggregator.write_report(&summary) {
                Ok(path) => println!("\nConsolidated summary saved to {}", path.display()),
                Err(err) => println!("Could not write the consolidated summary: {err}"),
            }
        }
        Ok(None) => println!("No invoice summaries found."),
        Err(err) => println!("Could not read the ledger: {err}"),
    }
    prompt::press_enter_to_continue()
}

fn list_item_codes(catalog: &Catalog) {
    println!("\nAvailable Items (Code and Name):");
    println!("--------------------------------");
    for item in catalog.items() {
        println!("{:<8} {:<30}", item.code(), item.name());
    }
    println!("--------------------------------");
}

fn list_items(catalog: &Catalog) {
    println!("\nCurrent Items in Catalog:");
    println!("----------------------------------------------");
    println!("{:<8} {:<30} Price", "Code", "Item Name");
    println!("----------------------------------------------");
    for item in catalog.items() {
        println!(
            "{:<8} {:<30} {}",
            item.code(),
            item.name(),
            format_amount(item.price())
        );
    }
    println!("----------------------------------------------");
}

fn add_item(catalog: &mut Catalog) -> io::Result<()> {
    let code = prompt::read_nonempty("Enter new item code: ")?;
    if catalog.find_by_code(&code).is_some() {
        println!("Item with code {code} already exists.");
        return Ok(());
    }
    let name = prompt::read_nonempty("Enter item name: ")?;
    let price = prompt::read_amount("Enter item price (INR): ")?;

    match Item::new(code, name, price).and_then(|item| catalog.add(item)) {
        Ok(()) => println!("Item added successfully!"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn update_item(catalog: &mut Catalog) -> io::Result<()> {
    let code = prompt::read_nonempty("Enter item code to update: ")?;
    let Some(item) = catalog.find_by_code(&code) else {
        println!("Item with code {code} not found.");
        return Ok(());
    };
    println!(
        "Current name: {}, price: {}",
        item.name(),
        format_amount(item.price())
    );
    let name = prompt::read_nonempty("Enter new name: ")?;
    let price = prompt::read_amount("Enter new price (INR): ")?;

    match catalog.update(&code, name, price) {
        Ok(()) => println!("Item updated successfully!"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn delete_item(catalog: &mut Catalog) -> io::Result<()> {
    let code = prompt::read_nonempty("Enter item code to delete: ")?;
    match catalog.delete(&code) {
        Ok(removed) => println!("Item {} deleted successfully!", removed.code()),
        Err(err) => println!("{err}"),
    }
    Ok(())
}
