//! Purchase history screen.

use std::io::Write;

use crate::error::CliResult;
use crate::render;
use crate::state::AppState;

/// Loads and prints every purchase with its customer and item names.
pub async fn run<W: Write>(state: &AppState, out: &mut W) -> CliResult<()> {
    let entries = state.db().purchases().history().await?;
    write!(out, "{}", render::history_table(&entries, state.config()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use stockroom_core::{Money, NewCustomer, NewItem, PurchaseRequest};

    #[tokio::test]
    async fn test_history_joins_names() {
        let state = test_state().await;
        let item = state
            .db()
            .items()
            .add(&NewItem::new("Claw Hammer", 4, Money::from_cents(1899)))
            .await
            .unwrap();
        let customer = state
            .db()
            .customers()
            .add(&NewCustomer::new("Grace Hopper", "grace@example.com", "555-0102"))
            .await
            .unwrap();
        state
            .db()
            .purchases()
            .purchase(&PurchaseRequest {
                customer_id: customer.id,
                item_id: item.id,
                quantity: 2,
            })
            .await
            .unwrap();

        let mut out = Vec::new();
        run(&state, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Grace Hopper"));
        assert!(text.contains("Claw Hammer"));
        assert!(text.contains("$37.98"));
    }

    #[tokio::test]
    async fn test_empty_history() {
        let state = test_state().await;
        let mut out = Vec::new();

        run(&state, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No purchases yet\n");
    }
}
