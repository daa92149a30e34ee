//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    Customer     │   │    Purchase     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  customer_id FK │       │
//! │  │  quantity       │   │  email (unique) │   │  item_id     FK │       │
//! │  │  price_cents    │   │  phone          │   │  quantity       │       │
//! │  └─────────────────┘   │  loyalty_points │   │  total_cents    │       │
//! │                        └─────────────────┘   │  purchased_at   │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  PurchaseHistoryEntry = Purchase ⋈ Customer.name ⋈ Item.name           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are generated by the database (`INTEGER PRIMARY KEY`), so the
//! `New*` types carry only the writable fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Generated identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Units on hand.
    pub quantity: i64,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl Item {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the stock on hand covers `quantity`.
    #[inline]
    pub fn has_stock_for(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }
}

/// The writable fields of an item, as submitted by the item form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub price_cents: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: i64, price: Money) -> Self {
        NewItem {
            name: name.into(),
            quantity,
            price_cents: price.cents(),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A buyer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    /// Unique across all customers.
    pub email: String,
    pub phone: String,
    /// Defaults to zero. No operation reads or changes it.
    pub loyalty_points: i64,
}

/// The writable fields of a customer, as submitted by the customer form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        NewCustomer {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

// =============================================================================
// Purchase
// =============================================================================

/// An immutable record of one sale.
///
/// `total_price_cents` is frozen at the time of purchase: later price
/// changes on the item do not touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Purchase {
    pub id: i64,
    pub customer_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    pub total_price_cents: i64,
    pub purchased_at: DateTime<Utc>,
}

impl Purchase {
    /// Returns the total price as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

/// What the purchase form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub customer_id: i64,
    pub item_id: i64,
    pub quantity: i64,
}

/// One row of the purchase history: a purchase joined with the names of
/// the customer and item it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PurchaseHistoryEntry {
    pub purchase_id: i64,
    pub customer_name: String,
    pub item_name: String,
    pub quantity: i64,
    pub total_price_cents: i64,
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseHistoryEntry {
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
