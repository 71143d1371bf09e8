use crate::error::{PatasError, Result};
use crate::store::Store;
use crate::validate::eq_ci;

/// Case-insensitive substring match used by every list filter.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Finds a customer by its (unique, case-insensitive) name.
pub fn customer_index(store: &Store, name: &str) -> Result<usize> {
    store
        .customers
        .iter()
        .position(|c| eq_ci(&c.name, name))
        .ok_or_else(|| PatasError::NotFound(format!("customer {}", name)))
}

/// Finds an employee by its (unique, case-insensitive) name.
pub fn employee_index(store: &Store, name: &str) -> Result<usize> {
    store
        .employees
        .iter()
        .position(|e| eq_ci(&e.name, name))
        .ok_or_else(|| PatasError::NotFound(format!("employee {}", name)))
}

/// Resolves a 1-based list position, the way rows are numbered by `list`.
/// Animal names are not unique, so positions are the only stable handle.
pub fn animal_index(store: &Store, position: usize) -> Result<usize> {
    if position == 0 || position > store.animals.len() {
        return Err(PatasError::NotFound(format!("animal #{}", position)));
    }
    Ok(position - 1)
}

/// Resolves a 1-based appointment position.
pub fn appointment_index(store: &Store, position: usize) -> Result<usize> {
    if position == 0 || position > store.appointments.len() {
        return Err(PatasError::NotFound(format!("appointment #{}", position)));
    }
    Ok(position - 1)
}
