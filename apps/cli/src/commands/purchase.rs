//! # Purchase Screen
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stockroom purchase --customer 1 --item 4 --quantity 2                  │
//! │       │                                                                 │
//! │       ├── ids positive, quantity positive?     no ──► ValidationError   │
//! │       ├── customer exists?                     no ──► NotFound          │
//! │       ▼                                                                 │
//! │  db.purchases().purchase(request)  (one transaction)                    │
//! │       ├── Completed ──► "Purchase successful!"                          │
//! │       └── Rejected  ──► "Insufficient stock or invalid item ID!"        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejection is an answer, not a failure: it prints the warning and the
//! process still exits 0.

use std::io::Write;
use tracing::{info, warn};

use crate::cli::PurchaseArgs;
use crate::error::{CliError, CliResult};
use crate::state::AppState;
use stockroom_core::validation::{validate_id, validate_purchase_quantity};
use stockroom_core::PurchaseRequest;
use stockroom_db::PurchaseOutcome;

/// Shown after a completed purchase.
pub const SUCCESS_MESSAGE: &str = "Purchase successful!";

/// Submits the purchase form.
pub async fn run<W: Write>(state: &AppState, args: PurchaseArgs, out: &mut W) -> CliResult<()> {
    validate_id("customer_id", args.customer)?;
    validate_id("item_id", args.item)?;
    validate_purchase_quantity(args.quantity)?;

    if state.db().customers().get_by_id(args.customer).await?.is_none() {
        return Err(CliError::not_found("Customer", args.customer));
    }

    let request = PurchaseRequest {
        customer_id: args.customer,
        item_id: args.item,
        quantity: args.quantity,
    };

    match state.db().purchases().purchase(&request).await? {
        PurchaseOutcome::Completed(purchase) => {
            info!(
                purchase_id = purchase.id,
                total_cents = purchase.total_price_cents,
                "Purchase recorded"
            );
            writeln!(out, "{}", SUCCESS_MESSAGE)?;
            writeln!(
                out,
                "Purchase #{}: {} x item #{} for {}",
                purchase.id,
                purchase.quantity,
                purchase.item_id,
                state.config().format_currency(purchase.total_price())
            )?;
        }
        PurchaseOutcome::Rejected(reason) => {
            warn!(reason = %reason, "Purchase rejected");
            writeln!(out, "{}", reason.user_message())?;
        }
    }

    Ok(())
}
