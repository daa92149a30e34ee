//! # Purchase Repository
//!
//! The purchase flow and the purchase history query.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BEGIN                                                                  │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  SELECT item (price, quantity)                                          │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  quote_purchase() ── rejected ──► ROLLBACK, Rejected(reason)            │
//! │    │ accepted                                                           │
//! │    ▼                                                                    │
//! │  INSERT purchase (total = price × quantity, frozen)                     │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  UPDATE items SET quantity = quantity - q                               │
//! │    WHERE id = ? AND quantity >= q ── 0 rows ──► ROLLBACK, Rejected      │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  COMMIT ──► Completed(purchase)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The read, the insert and the decrement share one transaction and the
//! decrement re-checks stock, so a rejected or failed purchase leaves
//! neither table changed and stock cannot go negative.
//!
//! Purchases are append-only: there is no update or delete.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use stockroom_core::{
    quote_purchase, Item, Purchase, PurchaseHistoryEntry, PurchaseRejection, PurchaseRequest,
};

/// Result of a purchase attempt that reached the database.
///
/// A rejection is a normal outcome, not an error: storage failures
/// (for example an unknown customer id) come back as `Err(DbError)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Completed(Purchase),
    Rejected(PurchaseRejection),
}

impl PurchaseOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, PurchaseOutcome::Completed(_))
    }
}

/// Repository for purchase database operations.
#[derive(Debug, Clone)]
pub struct PurchaseRepository {
    pool: SqlitePool,
}

impl PurchaseRepository {
    /// Creates a new PurchaseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PurchaseRepository { pool }
    }

    /// Runs the purchase flow for one request.
    pub async fn purchase(&self, request: &PurchaseRequest) -> DbResult<PurchaseOutcome> {
        debug!(
            customer_id = request.customer_id,
            item_id = request.item_id,
            quantity = request.quantity,
            "Processing purchase"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, quantity, price_cents
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(request.item_id)
        .fetch_optional(&mut *tx)
        .await?;

        let quote = match quote_purchase(item.as_ref(), request) {
            Ok(quote) => quote,
            Err(rejection) => {
                warn!(reason = %rejection, "Purchase rejected");
                tx.rollback()
                    .await
                    .map_err(|e| DbError::TransactionFailed(e.to_string()))?;
                return Ok(PurchaseOutcome::Rejected(rejection));
            }
        };

        let purchased_at = Utc::now();

        // A dangling customer_id fails here; dropping `tx` rolls back
        let inserted = sqlx::query(
            r#"
            INSERT INTO purchases (customer_id, item_id, quantity, total_price_cents, purchased_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(request.customer_id)
        .bind(quote.item_id)
        .bind(quote.quantity)
        .bind(quote.total.cents())
        .bind(purchased_at)
        .execute(&mut *tx)
        .await?;

        let decremented = sqlx::query(
            r#"
            UPDATE items
            SET quantity = quantity - ?2
            WHERE id = ?1 AND quantity >= ?2
            "#,
        )
        .bind(quote.item_id)
        .bind(quote.quantity)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            let rejection = PurchaseRejection::InsufficientStock {
                item_id: quote.item_id,
                available: quote.remaining_stock + quote.quantity,
                requested: quote.quantity,
            };
            warn!(reason = %rejection, "Stock changed during purchase, rolling back");
            tx.rollback()
                .await
                .map_err(|e| DbError::TransactionFailed(e.to_string()))?;
            return Ok(PurchaseOutcome::Rejected(rejection));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let purchase = Purchase {
            id: inserted.last_insert_rowid(),
            customer_id: request.customer_id,
            item_id: quote.item_id,
            quantity: quote.quantity,
            total_price_cents: quote.total.cents(),
            purchased_at,
        };

        info!(
            purchase_id = purchase.id,
            item_id = purchase.item_id,
            quantity = purchase.quantity,
            total = %quote.total,
            remaining_stock = quote.remaining_stock,
            "Purchase completed"
        );

        Ok(PurchaseOutcome::Completed(purchase))
    }

    /// Lists every purchase with its customer and item names.
    pub async fn history(&self) -> DbResult<Vec<PurchaseHistoryEntry>> {
        let entries = sqlx::query_as::<_, PurchaseHistoryEntry>(
            r#"
            SELECT
                p.id AS purchase_id,
                c.name AS customer_name,
                i.name AS item_name,
                p.quantity,
                p.total_price_cents,
                p.purchased_at
            FROM purchases p
            INNER JOIN customers c ON p.customer_id = c.id
            INNER JOIN items i ON p.item_id = i.id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = entries.len(), "Loaded purchase history");
        Ok(entries)
    }

    /// Gets a purchase by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Purchase>> {
        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT id, customer_id, item_id, quantity, total_price_cents, purchased_at
            FROM purchases
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(purchase)
    }

    /// Counts purchases.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM purchases")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
