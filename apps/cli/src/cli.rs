//! Command-line interface definitions.
//!
//! One subcommand per screen. Running `stockroom` with no subcommand
//! shows the home screen.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stockroom_core::Money;

/// Inventory, customers and purchases from the terminal
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version)]
pub struct Cli {
    /// Path to stockroom.toml (default: platform config dir)
    #[arg(short, long, global = true, env = "STOCKROOM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level screens.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inventory data view
    Items {
        #[command(subcommand)]
        action: Option<ItemCommand>,
    },

    /// Customer details view
    Customers {
        #[command(subcommand)]
        action: Option<CustomerCommand>,
    },

    /// Buy a product
    Purchase(PurchaseArgs),

    /// Purchase history view
    History,

    /// Show the effective configuration
    Config,
}

/// Subcommands for `stockroom items`. Without one, the table is listed.
#[derive(Subcommand, Debug)]
pub enum ItemCommand {
    /// List all items
    List,
    /// Add an item
    Add(AddItemArgs),
    /// Change an item; omitted fields keep their current value
    Update(UpdateItemArgs),
    /// Add stock to an item
    Restock(RestockArgs),
    /// Delete an item
    Delete(IdArg),
}

/// Subcommands for `stockroom customers`. Without one, the table is listed.
#[derive(Subcommand, Debug)]
pub enum CustomerCommand {
    /// List all customers
    List,
    /// Add a customer
    Add(AddCustomerArgs),
    /// Change a customer; omitted fields keep their current value
    Update(UpdateCustomerArgs),
    /// Delete a customer
    Delete(IdArg),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct IdArg {
    /// Row id as shown in the table
    pub id: i64,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddItemArgs {
    /// Item name
    #[arg(long)]
    pub name: String,

    /// Stock on hand
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,

    /// Unit price, e.g. 12.50
    #[arg(long, allow_negative_numbers = true)]
    pub price: Money,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct UpdateItemArgs {
    /// Item id
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<Money>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RestockArgs {
    /// Item id
    pub id: i64,

    /// Units to add
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddCustomerArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomerArgs {
    /// Customer id
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}

/// The purchase form.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseArgs {
    /// Customer id
    #[arg(long)]
    pub customer: i64,

    /// Item id
    #[arg(long)]
    pub item: i64,

    /// Units to buy
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_home() {
        let cli = parse(&["stockroom"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_items_without_action_lists() {
        let cli = parse(&["stockroom", "items"]);
        assert!(matches!(cli.command, Some(Commands::Items { action: None })));
    }

    #[test]
    fn test_items_add_parses_price() {
        let cli = parse(&[
            "stockroom", "items", "add", "--name", "Widget", "--quantity", "12", "--price", "19.99",
        ]);

        match cli.command {
            Some(Commands::Items {
                action: Some(ItemCommand::Add(args)),
            }) => {
                assert_eq!(args.name, "Widget");
                assert_eq!(args.quantity, 12);
                assert_eq!(args.price, Money::from_cents(1999));
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_bad_price_is_a_parse_error() {
        let result = Cli::try_parse_from([
            "stockroom", "items", "add", "--name", "W", "--quantity", "1", "--price", "1.999",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let cli = parse(&[
            "stockroom", "purchase", "--customer", "1", "--item", "2", "--quantity", "-3",
        ]);

        match cli.command {
            Some(Commands::Purchase(args)) => assert_eq!(args.quantity, -3),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_purchase_requires_every_field() {
        let result = Cli::try_parse_from(["stockroom", "purchase", "--customer", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_fields_are_optional() {
        let cli = parse(&["stockroom", "customers", "update", "4", "--email", "new@example.com"]);

        match cli.command {
            Some(Commands::Customers {
                action: Some(CustomerCommand::Update(args)),
            }) => {
                assert_eq!(args.id, 4);
                assert_eq!(args.email.as_deref(), Some("new@example.com"));
                assert!(args.name.is_none());
                assert!(args.phone.is_none());
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = parse(&["stockroom", "history", "--config", "/tmp/s.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.toml")));
        assert!(matches!(cli.command, Some(Commands::History)));
    }
}
