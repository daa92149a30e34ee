//! # Inventory Screen
//!
//! List, add, update, restock and delete items. Every mutation is
//! followed by a fresh load of the table.

use std::io::Write;
use tracing::{debug, info};

use crate::cli::{AddItemArgs, IdArg, ItemCommand, RestockArgs, UpdateItemArgs};
use crate::error::{CliError, CliResult};
use crate::render;
use crate::state::AppState;
use stockroom_core::validation::{validate_id, validate_new_item};
use stockroom_core::{NewItem, ValidationError};
use stockroom_db::DbError;

/// Runs an inventory action. No action lists the table.
pub async fn run<W: Write>(
    state: &AppState,
    action: Option<ItemCommand>,
    out: &mut W,
) -> CliResult<()> {
    match action.unwrap_or(ItemCommand::List) {
        ItemCommand::List => list(state, out).await,
        ItemCommand::Add(args) => add(state, args, out).await,
        ItemCommand::Update(args) => update(state, args, out).await,
        ItemCommand::Restock(args) => restock(state, args, out).await,
        ItemCommand::Delete(IdArg { id }) => delete(state, id, out).await,
    }
}

/// Loads and prints the inventory table.
pub async fn list<W: Write>(state: &AppState, out: &mut W) -> CliResult<()> {
    let items = state.db().items().list().await?;
    debug!(count = items.len(), "Rendering inventory");
    write!(out, "{}", render::items_table(&items, state.config()))?;
    Ok(())
}

pub async fn add<W: Write>(state: &AppState, args: AddItemArgs, out: &mut W) -> CliResult<()> {
    let item = NewItem::new(args.name.trim(), args.quantity, args.price);
    validate_new_item(&item)?;

    let stored = state.db().items().add(&item).await?;
    info!(id = stored.id, name = %stored.name, "Item added");

    writeln!(out, "Added item #{}: {}", stored.id, stored.name)?;
    list(state, out).await
}

/// Overwrites an item, keeping the stored value of any omitted field.
pub async fn update<W: Write>(
    state: &AppState,
    args: UpdateItemArgs,
    out: &mut W,
) -> CliResult<()> {
    validate_id("item_id", args.id)?;

    let current = state
        .db()
        .items()
        .get_by_id(args.id)
        .await?
        .ok_or_else(|| CliError::not_found("Item", args.id))?;

    let item = NewItem {
        name: args
            .name
            .map(|n| n.trim().to_string())
            .unwrap_or(current.name),
        quantity: args.quantity.unwrap_or(current.quantity),
        price_cents: args.price.map(|p| p.cents()).unwrap_or(current.price_cents),
    };
    validate_new_item(&item)?;

    state.db().items().update(args.id, &item).await?;
    info!(id = args.id, "Item updated");

    writeln!(out, "Updated item #{}", args.id)?;
    list(state, out).await
}

pub async fn restock<W: Write>(
    state: &AppState,
    args: RestockArgs,
    out: &mut W,
) -> CliResult<()> {
    validate_id("item_id", args.id)?;
    if args.quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into());
    }

    let quantity = match state.db().items().adjust_stock(args.id, args.quantity).await {
        Ok(quantity) => quantity,
        Err(DbError::StockOutOfRange { quantity, .. }) => {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: i64::MAX - quantity,
            }
            .into());
        }
        Err(e) => return Err(e.into()),
    };
    info!(id = args.id, added = args.quantity, quantity = quantity, "Item restocked");

    writeln!(
        out,
        "Restocked item #{}: +{} (now {})",
        args.id, args.quantity, quantity
    )?;
    list(state, out).await
}

pub async fn delete<W: Write>(state: &AppState, id: i64, out: &mut W) -> CliResult<()> {
    validate_id("item_id", id)?;

    match state.db().items().delete(id).await {
        Ok(()) => {}
        Err(DbError::ForeignKeyViolation { .. }) => {
            return Err(CliError::conflict(format!(
                "Item {} has purchases on record and cannot be deleted",
                id
            )));
        }
        Err(e) => return Err(e.into()),
    }
    info!(id = id, "Item deleted");

    writeln!(out, "Deleted item #{}", id)?;
    list(state, out).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::test_state;
    use stockroom_core::{Money, NewCustomer, PurchaseRequest};

    fn widget_args() -> AddItemArgs {
        AddItemArgs {
            name: "Widget".into(),
            quantity: 12,
            price: Money::from_cents(1999),
        }
    }

    fn output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_add_prints_confirmation_and_table() {
        let state = test_state().await;
        let mut out = Vec::new();

        add(&state, widget_args(), &mut out).await.unwrap();

        let text = output(out);
        assert!(text.starts_with("Added item #1: Widget"));
        assert!(text.contains("Item Name"));
        assert!(text.contains("$19.99"));
        assert_eq!(state.db().items().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_name_before_storage() {
        let state = test_state().await;
        let mut args = widget_args();
        args.name = "   ".into();

        let err = add(&state, args, &mut Vec::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.db().items().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_rejects_negative_quantity_and_price() {
        let state = test_state().await;

        let mut args = widget_args();
        args.quantity = -1;
        let err = add(&state, args, &mut Vec::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let mut args = widget_args();
        args.price = Money::from_cents(-5);
        let err = add(&state, args, &mut Vec::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_update_keeps_omitted_fields() {
        let state = test_state().await;
        add(&state, widget_args(), &mut Vec::new()).await.unwrap();

        let args = UpdateItemArgs {
            id: 1,
            name: None,
            quantity: Some(3),
            price: None,
        };
        update(&state, args, &mut Vec::new()).await.unwrap();

        let stored = state.db().items().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.name, "Widget");
        assert_eq!(stored.quantity, 3);
        assert_eq!(stored.price_cents, 1999);
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let state = test_state().await;
        let args = UpdateItemArgs {
            id: 9,
            name: Some("Ghost".into()),
            quantity: None,
            price: None,
        };

        let err = update(&state, args, &mut Vec::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_restock_adds_units() {
        let state = test_state().await;
        add(&state, widget_args(), &mut Vec::new()).await.unwrap();

        restock(&state, RestockArgs { id: 1, quantity: 8 }, &mut Vec::new())
            .await
            .unwrap();

        let stored = state.db().items().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 20);

        let err = restock(&state, RestockArgs { id: 1, quantity: 0 }, &mut Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_restock_past_max_is_validation_and_keeps_table() {
        let state = test_state().await;
        let mut args = widget_args();
        args.quantity = 10;
        add(&state, args, &mut Vec::new()).await.unwrap();

        let err = restock(
            &state,
            RestockArgs {
                id: 1,
                quantity: i64::MAX,
            },
            &mut Vec::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains(&(i64::MAX - 10).to_string()));

        let mut out = Vec::new();
        list(&state, &mut out).await.unwrap();
        assert!(output(out).contains(" 10 "));
        assert_eq!(state.db().items().get_by_id(1).await.unwrap().unwrap().quantity, 10);
    }

    #[tokio::test]
    async fn test_delete_refreshes_table() {
        let state = test_state().await;
        add(&state, widget_args(), &mut Vec::new()).await.unwrap();

        let mut out = Vec::new();
        delete(&state, 1, &mut out).await.unwrap();

        let text = output(out);
        assert!(text.starts_with("Deleted item #1"));
        assert!(text.contains("No items in stock"));
    }

    #[tokio::test]
    async fn test_delete_item_with_purchases_is_conflict() {
        let state = test_state().await;
        add(&state, widget_args(), &mut Vec::new()).await.unwrap();
        let customer = state
            .db()
            .customers()
            .add(&NewCustomer::new("Ada", "ada@example.com", "555-0100"))
            .await
            .unwrap();
        state
            .db()
            .purchases()
            .purchase(&PurchaseRequest {
                customer_id: customer.id,
                item_id: 1,
                quantity: 1,
            })
            .await
            .unwrap();

        let err = delete(&state, 1, &mut Vec::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(state.db().items().count().await.unwrap(), 1);
    }
}
