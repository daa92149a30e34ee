//! # Item Repository
//!
//! Database operations for inventory items.
//!
//! ## Key Operations
//! - CRUD on the `items` table
//! - Stock adjustment (restocking)
//!
//! The purchase flow decrements stock itself, inside its own transaction
//! (see [`crate::repository::purchase`]).

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{Item, NewItem};

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let item = repo.add(&NewItem::new("Widget", 10, Money::from_cents(250))).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts an item and returns the stored row.
    pub async fn add(&self, item: &NewItem) -> DbResult<Item> {
        debug!(name = %item.name, quantity = item.quantity, price_cents = item.price_cents, "Adding item");

        let result = sqlx::query(
            r#"
            INSERT INTO items (name, quantity, price_cents)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.price_cents)
        .execute(&self.pool)
        .await?;

        Ok(Item {
            id: result.last_insert_rowid(),
            name: item.name.clone(),
            quantity: item.quantity,
            price_cents: item.price_cents,
        })
    }

    /// Overwrites every writable field of an item.
    pub async fn update(&self, id: i64, item: &NewItem) -> DbResult<()> {
        debug!(id = id, name = %item.name, "Updating item");

        let result = sqlx::query(
            r#"
            UPDATE items
            SET
                name = ?2,
                quantity = ?3,
                price_cents = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.price_cents)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Adds `delta` to an item's stock (negative to write stock off) and
    /// returns the new quantity.
    ///
    /// The sum is computed here, not in SQL: SQLite turns an overflowing
    /// INTEGER sum into a REAL, which the `items` table cannot hold.
    /// A result below zero or past `i64::MAX` fails with `StockOutOfRange`
    /// and leaves the row untouched.
    pub async fn adjust_stock(&self, id: i64, delta: i64) -> DbResult<i64> {
        debug!(id = id, delta = delta, "Adjusting stock");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let current: i64 = sqlx::query_scalar("SELECT quantity FROM items WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("Item", id))?;

        let Some(updated) = current.checked_add(delta).filter(|q| *q >= 0) else {
            return Err(DbError::StockOutOfRange {
                item_id: id,
                quantity: current,
                delta,
            });
        };

        // Compare-and-set against the value read above
        let result = sqlx::query(
            r#"
            UPDATE items
            SET quantity = ?2
            WHERE id = ?1 AND quantity = ?3
            "#,
        )
        .bind(id)
        .bind(updated)
        .bind(current)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::TransactionFailed(format!(
                "Stock of item {} changed during adjustment",
                id
            )));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(updated)
    }

    /// Deletes an item.
    ///
    /// Fails with `ForeignKeyViolation` while purchases still reference it.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting item");

        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Lists every item, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, quantity, price_cents
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Gets an item by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, quantity, price_cents
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Counts items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
