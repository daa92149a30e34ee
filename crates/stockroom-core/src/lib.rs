//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! Domain types, money arithmetic, input validation and the purchase rule.
//! Nothing in this crate touches a database, a file or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal Screens (apps/cli)                  │   │
//! │  │    Items ──► Customers ──► Purchase ──► History                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ purchase  │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │  quote    │  │   rules   │  │   │
//! │  │   │ Customer  │  │  parsing  │  │ rejection │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-db (Database Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Customer, Purchase, history rows)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`purchase`] - The stock check behind every purchase
//! - [`error`] - Domain error types
//! - [`validation`] - Form field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price: Money = "2.50".parse().unwrap();
//! assert_eq!(price.checked_multiply_quantity(4).map(|t| t.cents()), Some(1000));
//! ```

pub mod error;
pub mod money;
pub mod purchase;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use purchase::{quote_purchase, PurchaseQuote, PurchaseRejection};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Loyalty points a new customer starts with.
///
/// Stored on every customer row but not read or written by any operation.
pub const DEFAULT_LOYALTY_POINTS: i64 = 0;

/// Maximum length of an item or customer name.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of a phone number.
pub const MAX_PHONE_LEN: usize = 20;
