//! # Customer Repository
//!
//! Database operations for customers. Email is unique at the storage
//! layer; a duplicate comes back as [`DbError::UniqueViolation`].

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{Customer, NewCustomer, DEFAULT_LOYALTY_POINTS};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a customer with the default loyalty balance.
    pub async fn add(&self, customer: &NewCustomer) -> DbResult<Customer> {
        debug!(email = %customer.email, "Adding customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, email, phone, loyalty_points)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(DEFAULT_LOYALTY_POINTS)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_duplicate_value(&customer.email))?;

        Ok(Customer {
            id: result.last_insert_rowid(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            loyalty_points: DEFAULT_LOYALTY_POINTS,
        })
    }

    /// Overwrites name, email and phone. Loyalty points are left alone.
    pub async fn update(&self, id: i64, customer: &NewCustomer) -> DbResult<()> {
        debug!(id = id, email = %customer.email, "Updating customer");

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET
                name = ?2,
                email = ?3,
                phone = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_duplicate_value(&customer.email))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Deletes a customer.
    ///
    /// Fails with `ForeignKeyViolation` while purchases still reference it.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Lists every customer, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, loyalty_points
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Gets a customer by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, loyalty_points
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Counts customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
