//! # Validation Module
//!
//! Form field validation for the item, customer and purchase screens.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Terminal screen                                               │
//! │  ├── Argument parsing (clap: integers, required fields)                 │
//! │  └── THIS MODULE: field rules                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repositories (no checks, bind and execute)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                        │
//! │  ├── NOT NULL constraints                                               │
//! │  ├── UNIQUE (customers.email)                                           │
//! │  └── Foreign keys (purchases → customers, items)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Email and phone are not format-checked, only required and bounded.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewCustomer, NewItem};
use crate::{MAX_NAME_LEN, MAX_PHONE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an item name.
///
/// ```rust
/// use stockroom_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Widget").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validates a customer name.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validates an email address: required, bounded, otherwise free-form.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required_text("email", email, MAX_NAME_LEN)
}

/// Validates a phone number: required, bounded, otherwise free-form.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_required_text("phone", phone, MAX_PHONE_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock level entered on the item form.
///
/// Zero is allowed (out of stock), negatives are not.
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a quantity entered on the purchase form.
pub fn validate_purchase_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// ```rust
/// use stockroom_core::money::Money;
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(0)).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a row id typed into a form.
pub fn validate_id(field: &str, id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates every field of the item form.
pub fn validate_new_item(item: &NewItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_stock_quantity(item.quantity)?;
    validate_price(Money::from_cents(item.price_cents))
}

/// Validates every field of the customer form.
pub fn validate_new_customer(customer: &NewCustomer) -> ValidationResult<()> {
    validate_customer_name(&customer.name)?;
    validate_email(&customer.email)?;
    validate_phone(&customer.phone)
}

// =============================================================================
// Unit Tests
// =============================================================================
