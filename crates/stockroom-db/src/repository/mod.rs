//! # Repository Module
//!
//! One repository per table, each holding a clone of the pool.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Terminal screen                                                        │
//! │       │                                                                 │
//! │       │  db.items().add(&new_item)                                      │
//! │       ▼                                                                 │
//! │  ItemRepository          CustomerRepository      PurchaseRepository     │
//! │  ├── add                 ├── add                 ├── purchase           │
//! │  ├── update              ├── update              ├── history            │
//! │  ├── adjust_stock        ├── delete              ├── get_by_id          │
//! │  ├── delete              ├── list                └── count              │
//! │  ├── list                ├── get_by_id                                  │
//! │  ├── get_by_id           └── count                                      │
//! │  └── count                                                              │
//! │       │                                                                 │
//! │       │  one parameterized statement per call                           │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes bind whatever they are given: form validation happens in the
//! screens, constraint enforcement in SQLite.

pub mod customer;
pub mod item;
pub mod purchase;
