//! The customer screen: list with a free-text filter, edit, delete.
//!
//! Customers are created through the registration batch or the quick-add
//! path while editing an animal; there is no standalone create here.

use crate::commands::{helpers, CmdMessage, CmdResult, Table};
use crate::error::Result;
use crate::model::{Person, PersonFields};
use crate::ownership;
use crate::store::Store;
use crate::validate;

const COLUMNS: [&str; 6] = ["Name", "Gender", "Email", "Phone", "National ID", "Postal code"];

fn row(customer: &Person) -> Vec<String> {
    vec![
        customer.name.clone(),
        customer.gender.to_string(),
        customer.email.clone().unwrap_or_default(),
        customer.phone.clone().unwrap_or_default(),
        customer.national_id.clone().unwrap_or_default(),
        customer.postal_code.clone().unwrap_or_default(),
    ]
}

fn matches(customer: &Person, filter: &str) -> bool {
    row(customer)
        .iter()
        .any(|cell| helpers::contains_ci(cell, filter))
}

/// Lists customers, optionally narrowed by a case-insensitive filter matched
/// against every displayed column.
pub fn list(store: &Store, filter: Option<&str>) -> Result<CmdResult> {
    let rows = store
        .customers
        .iter()
        .filter(|c| filter.is_none_or(|f| matches(c, f)))
        .map(row)
        .collect();
    Ok(CmdResult::default().with_table(Table {
        header: COLUMNS.to_vec(),
        rows,
    }))
}

/// Replaces a customer's fields after validating the full set. The record
/// keeps its own name and ID past the uniqueness checks.
pub fn edit(store: &mut Store, name: &str, fields: PersonFields) -> Result<CmdResult> {
    let index = helpers::customer_index(store, name)?;
    let id = store.customers[index].id;
    validate::person(&fields, &store.customers, Some(id))?;

    store.customers[index].apply(fields);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer updated: {}",
        store.customers[index].name
    )));
    Ok(result)
}

/// Deletes a customer and detaches it from every animal. Animals left
/// without owners go up for adoption.
pub fn delete(store: &mut Store, name: &str) -> Result<CmdResult> {
    let index = helpers::customer_index(store, name)?;
    let customer = store.customers.remove(index);
    ownership::on_customer_deleted(store, customer.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer deleted: {}",
        customer.name
    )));
    Ok(result)
}
