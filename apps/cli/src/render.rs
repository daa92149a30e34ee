//! # Table Rendering
//!
//! Turns repository rows into the tables each screen prints. Column
//! headings follow the screens' table headers.

use prettytable::format::{LinePosition, LineSeparator, TableFormat};
use prettytable::{row, Table};

use crate::config::AppConfig;
use stockroom_core::{Customer, Item, PurchaseHistoryEntry};

/// Timestamp layout in the history table.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn markdown_format() -> TableFormat {
    prettytable::format::FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(LinePosition::Title, LineSeparator::new('-', '|', '|', '|'))
        .padding(1, 1)
        .build()
}

fn markdown_style(table: &mut Table) {
    table.set_format(markdown_format());
}

/// Inventory table: ID, Item Name, Quantity, Price.
pub fn items_table(items: &[Item], config: &AppConfig) -> String {
    if items.is_empty() {
        return "No items in stock\n".to_string();
    }
    let mut table = Table::new();
    table.set_titles(row!["ID", "Item Name", "Quantity", "Price"]);
    for item in items {
        table.add_row(row![
            item.id,
            item.name,
            r->item.quantity,
            r->config.format_currency(item.price())
        ]);
    }
    markdown_style(&mut table);
    table.to_string()
}

/// Customer table: ID, Name, Email, Phone.
pub fn customers_table(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No customers\n".to_string();
    }
    let mut table = Table::new();
    table.set_titles(row!["ID", "Name", "Email", "Phone"]);
    for customer in customers {
        table.add_row(row![customer.id, customer.name, customer.email, customer.phone]);
    }
    markdown_style(&mut table);
    table.to_string()
}

/// Purchase history table, one row per purchase.
pub fn history_table(entries: &[PurchaseHistoryEntry], config: &AppConfig) -> String {
    if entries.is_empty() {
        return "No purchases yet\n".to_string();
    }
    let mut table = Table::new();
    table.set_titles(row![
        "Purchase ID",
        "Customer Name",
        "Item Name",
        "Quantity",
        "Total Price",
        "Purchase Date"
    ]);
    for entry in entries {
        table.add_row(row![
            entry.purchase_id,
            entry.customer_name,
            entry.item_name,
            r->entry.quantity,
            r->config.format_currency(entry.total_price()),
            entry.purchased_at.format(DATE_FORMAT).to_string()
        ]);
    }
    markdown_style(&mut table);
    table.to_string()
}
