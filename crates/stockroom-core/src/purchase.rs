//! # Purchase Rule
//!
//! The stock check every purchase goes through, kept free of I/O so the
//! repository only has to fetch the item and apply the quote.
//!
//! ## Decision
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote_purchase(item, request)                                          │
//! │                                                                         │
//! │  quantity <= 0?          ──► Rejected(InvalidQuantity)                 │
//! │  item missing?           ──► Rejected(ItemNotFound)                    │
//! │  stock < quantity?       ──► Rejected(InsufficientStock)               │
//! │  otherwise               ──► Quote { total = price × quantity }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Money;
use crate::types::{Item, PurchaseRequest};

/// Message shown for every rejected purchase.
pub const REJECTION_MESSAGE: &str = "Insufficient stock or invalid item ID!";

/// An accepted purchase, priced at the item's current unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseQuote {
    pub item_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
    pub total: Money,
    /// Stock left on the item once the purchase is applied.
    pub remaining_stock: i64,
}

/// Why a purchase was turned down.
///
/// The variants are kept apart for logging; the user sees the same
/// warning for all of them (see [`PurchaseRejection::user_message`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum PurchaseRejection {
    #[error("item {item_id} does not exist")]
    ItemNotFound { item_id: i64 },

    #[error("item {item_id} has {available} in stock, {requested} requested")]
    InsufficientStock {
        item_id: i64,
        available: i64,
        requested: i64,
    },

    #[error("quantity {requested} is not a valid purchase quantity")]
    InvalidQuantity { requested: i64 },
}

impl PurchaseRejection {
    /// The single warning the purchase screen shows.
    pub fn user_message(&self) -> &'static str {
        REJECTION_MESSAGE
    }
}

/// Checks a purchase request against the item as currently stored.
///
/// ## Example
/// ```rust
/// use stockroom_core::{quote_purchase, Item, PurchaseRequest};
///
/// let item = Item { id: 1, name: "Widget".into(), quantity: 5, price_cents: 250 };
/// let request = PurchaseRequest { customer_id: 9, item_id: 1, quantity: 4 };
///
/// let quote = quote_purchase(Some(&item), &request).unwrap();
/// assert_eq!(quote.total.cents(), 1000);
/// assert_eq!(quote.remaining_stock, 1);
/// ```
pub fn quote_purchase(
    item: Option<&Item>,
    request: &PurchaseRequest,
) -> Result<PurchaseQuote, PurchaseRejection> {
    if request.quantity <= 0 {
        return Err(PurchaseRejection::InvalidQuantity {
            requested: request.quantity,
        });
    }

    let item = item.ok_or(PurchaseRejection::ItemNotFound {
        item_id: request.item_id,
    })?;

    if !item.has_stock_for(request.quantity) {
        return Err(PurchaseRejection::InsufficientStock {
            item_id: item.id,
            available: item.quantity,
            requested: request.quantity,
        });
    }

    let total = item
        .price()
        .checked_multiply_quantity(request.quantity)
        .ok_or(PurchaseRejection::InvalidQuantity {
            requested: request.quantity,
        })?;

    Ok(PurchaseQuote {
        item_id: item.id,
        quantity: request.quantity,
        unit_price: item.price(),
        total,
        remaining_stock: item.quantity - request.quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, price_cents: i64) -> Item {
        Item {
            id: 3,
            name: "Gadget".to_string(),
            quantity,
            price_cents,
        }
    }

    fn request(quantity: i64) -> PurchaseRequest {
        PurchaseRequest {
            customer_id: 1,
            item_id: 3,
            quantity,
        }
    }

    #[test]
    fn test_quote_within_stock() {
        let quote = quote_purchase(Some(&item(10, 199)), &request(3)).unwrap();
        assert_eq!(quote.total, Money::from_cents(597));
        assert_eq!(quote.unit_price, Money::from_cents(199));
        assert_eq!(quote.remaining_stock, 7);
    }

    #[test]
    fn test_quote_exact_stock_empties_item() {
        let quote = quote_purchase(Some(&item(4, 100)), &request(4)).unwrap();
        assert_eq!(quote.remaining_stock, 0);
    }

    #[test]
    fn test_rejects_over_stock() {
        let rejection = quote_purchase(Some(&item(2, 100)), &request(3)).unwrap_err();
        assert_eq!(
            rejection,
            PurchaseRejection::InsufficientStock {
                item_id: 3,
                available: 2,
                requested: 3
            }
        );
    }

    #[test]
    fn test_rejects_missing_item() {
        let rejection = quote_purchase(None, &request(1)).unwrap_err();
        assert_eq!(rejection, PurchaseRejection::ItemNotFound { item_id: 3 });
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        for qty in [0, -2] {
            let rejection = quote_purchase(Some(&item(5, 100)), &request(qty)).unwrap_err();
            assert_eq!(rejection, PurchaseRejection::InvalidQuantity { requested: qty });
        }
    }

    #[test]
    fn test_rejects_overflowing_total() {
        let rejection = quote_purchase(Some(&item(i64::MAX, i64::MAX)), &request(2)).unwrap_err();
        assert!(matches!(rejection, PurchaseRejection::InvalidQuantity { .. }));
    }

    #[test]
    fn test_all_rejections_share_user_message() {
        let rejections = [
            PurchaseRejection::ItemNotFound { item_id: 1 },
            PurchaseRejection::InvalidQuantity { requested: 0 },
        ];
        for rejection in rejections {
            assert_eq!(rejection.user_message(), REJECTION_MESSAGE);
        }
    }
}
