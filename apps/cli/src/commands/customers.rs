//! # Customer Screen
//!
//! List, add, update and delete customers. Email uniqueness is left to
//! the database; a clash comes back as a conflict.

use std::io::Write;
use tracing::info;

use crate::cli::{AddCustomerArgs, CustomerCommand, IdArg, UpdateCustomerArgs};
use crate::error::{CliError, CliResult};
use crate::render;
use crate::state::AppState;
use stockroom_core::validation::{validate_id, validate_new_customer};
use stockroom_core::NewCustomer;
use stockroom_db::DbError;

/// Runs a customer action. No action lists the table.
pub async fn run<W: Write>(
    state: &AppState,
    action: Option<CustomerCommand>,
    out: &mut W,
) -> CliResult<()> {
    match action.unwrap_or(CustomerCommand::List) {
        CustomerCommand::List => list(state, out).await,
        CustomerCommand::Add(args) => add(state, args, out).await,
        CustomerCommand::Update(args) => update(state, args, out).await,
        CustomerCommand::Delete(IdArg { id }) => delete(state, id, out).await,
    }
}

/// Loads and prints the customer table.
pub async fn list<W: Write>(state: &AppState, out: &mut W) -> CliResult<()> {
    let customers = state.db().customers().list().await?;
    write!(out, "{}", render::customers_table(&customers))?;
    Ok(())
}

pub async fn add<W: Write>(
    state: &AppState,
    args: AddCustomerArgs,
    out: &mut W,
) -> CliResult<()> {
    let customer = NewCustomer::new(args.name.trim(), args.email.trim(), args.phone.trim());
    validate_new_customer(&customer)?;

    let stored = state.db().customers().add(&customer).await?;
    info!(id = stored.id, email = %stored.email, "Customer added");

    writeln!(out, "Added customer #{}: {}", stored.id, stored.name)?;
    list(state, out).await
}

/// Overwrites a customer, keeping the stored value of any omitted field.
pub async fn update<W: Write>(
    state: &AppState,
    args: UpdateCustomerArgs,
    out: &mut W,
) -> CliResult<()> {
    validate_id("customer_id", args.id)?;

    let current = state
        .db()
        .customers()
        .get_by_id(args.id)
        .await?
        .ok_or_else(|| CliError::not_found("Customer", args.id))?;

    let pick = |new: Option<String>, old: String| new.map(|v| v.trim().to_string()).unwrap_or(old);
    let customer = NewCustomer {
        name: pick(args.name, current.name),
        email: pick(args.email, current.email),
        phone: pick(args.phone, current.phone),
    };
    validate_new_customer(&customer)?;

    state.db().customers().update(args.id, &customer).await?;
    info!(id = args.id, "Customer updated");

    writeln!(out, "Updated customer #{}", args.id)?;
    list(state, out).await
}

pub async fn delete<W: Write>(state: &AppState, id: i64, out: &mut W) -> CliResult<()> {
    validate_id("customer_id", id)?;

    match state.db().customers().delete(id).await {
        Ok(()) => {}
        Err(DbError::ForeignKeyViolation { .. }) => {
            return Err(CliError::conflict(format!(
                "Customer {} has purchases on record and cannot be deleted",
                id
            )));
        }
        Err(e) => return Err(e.into()),
    }
    info!(id = id, "Customer deleted");

    writeln!(out, "Deleted customer #{}", id)?;
    list(state, out).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::test_state;

    fn ada() -> AddCustomerArgs {
        AddCustomerArgs {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
        }
    }

    #[tokio::test]
    async fn test_add_prints_table() {
        let state = test_state().await;
        let mut out = Vec::new();

        add(&state, ada(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Added customer #1: Ada Lovelace"));
        assert!(text.contains("ada@example.com"));
    }

    #[tokio::test]
    async fn test_add_trims_fields() {
        let state = test_state().await;
        let mut args = ada();
        args.email = "  ada@example.com ".into();

        add(&state, args, &mut Vec::new()).await.unwrap();

        let stored = state.db().customers().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_missing_email_is_validation_error() {
        let state = test_state().await;
        let mut args = ada();
        args.email = String::new();

        let err = add(&state, args, &mut Vec::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.db().customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let state = test_state().await;
        add(&state, ada(), &mut Vec::new()).await.unwrap();

        let mut twin = ada();
        twin.name = "Someone Else".into();
        let err = add(&state, twin, &mut Vec::new()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(state.db().customers().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let state = test_state().await;
        add(&state, ada(), &mut Vec::new()).await.unwrap();

        let args = UpdateCustomerArgs {
            id: 1,
            name: None,
            email: None,
            phone: Some("555-9999".into()),
        };
        update(&state, args, &mut Vec::new()).await.unwrap();

        let stored = state.db().customers().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.name, "Ada Lovelace");
        assert_eq!(stored.email, "ada@example.com");
        assert_eq!(stored.phone, "555-9999");
    }

    #[tokio::test]
    async fn test_delete_missing_customer_is_not_found() {
        let state = test_state().await;

        let err = delete(&state, 5, &mut Vec::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
