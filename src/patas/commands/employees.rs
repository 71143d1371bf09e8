//! The employee screen: create, list with a free-text filter, edit, delete.
//!
//! Employees share the customer record shape but live in their own
//! collection; name and national-ID uniqueness are scoped to employees only,
//! so a customer and an employee may share both. Deleting an employee has no
//! cascade: employees own nothing.

use crate::commands::{helpers, CmdMessage, CmdResult, Table};
use crate::error::Result;
use crate::model::{Person, PersonFields};
use crate::store::Store;
use crate::validate;

const COLUMNS: [&str; 6] = ["Name", "Gender", "Email", "Phone", "National ID", "Postal code"];

fn row(employee: &Person) -> Vec<String> {
    vec![
        employee.name.clone(),
        employee.gender.to_string(),
        employee.email.clone().unwrap_or_default(),
        employee.phone.clone().unwrap_or_default(),
        employee.national_id.clone().unwrap_or_default(),
        employee.postal_code.clone().unwrap_or_default(),
    ]
}

fn matches(employee: &Person, filter: &str) -> bool {
    row(employee)
        .iter()
        .any(|cell| helpers::contains_ci(cell, filter))
}

pub fn add(store: &mut Store, fields: PersonFields) -> Result<CmdResult> {
    validate::person(&fields, &store.employees, None)?;
    let employee = Person::new(fields);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee registered: {}",
        employee.name
    )));
    store.employees.push(employee);
    Ok(result)
}

pub fn list(store: &Store, filter: Option<&str>) -> Result<CmdResult> {
    let rows = store
        .employees
        .iter()
        .filter(|e| filter.is_none_or(|f| matches(e, f)))
        .map(row)
        .collect();
    Ok(CmdResult::default().with_table(Table {
        header: COLUMNS.to_vec(),
        rows,
    }))
}

pub fn edit(store: &mut Store, name: &str, fields: PersonFields) -> Result<CmdResult> {
    let index = helpers::employee_index(store, name)?;
    let id = store.employees[index].id;
    validate::person(&fields, &store.employees, Some(id))?;

    store.employees[index].apply(fields);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee updated: {}",
        store.employees[index].name
    )));
    Ok(result)
}

pub fn delete(store: &mut Store, name: &str) -> Result<CmdResult> {
    let index = helpers::employee_index(store, name)?;
    let employee = store.employees.remove(index);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee deleted: {}",
        employee.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use crate::validate::ValidationError;

    fn fields(name: &str) -> PersonFields {
        PersonFields {
            name: name.to_string(),
            email: None,
            phone: None,
            national_id: None,
            postal_code: None,
            gender: Gender::PreferNotToSay,
        }
    }

    #[test]
    fn uniqueness_is_scoped_to_the_employee_collection() {
        let mut store = Store::default();
        let mut shared = fields("Ana Silva");
        shared.national_id = Some("12345678901".to_string());
        store.customers.push(Person::new(shared.clone()));

        // Same name and ID as an existing customer: allowed for an employee.
        add(&mut store, shared.clone()).unwrap();
        assert_eq!(store.employees.len(), 1);

        // But a second employee with those values is rejected.
        let err = add(&mut store, shared).unwrap_err();
        assert!(matches!(
            err,
            crate::error::PatasError::Validation(ValidationError::DuplicateName(_))
        ));
        assert_eq!(store.employees.len(), 1);
    }

    #[test]
    fn edit_validates_against_employees_only() {
        let mut store = Store::default();
        add(&mut store, fields("Ana Silva")).unwrap();
        add(&mut store, fields("Bruno Costa")).unwrap();

        assert!(edit(&mut store, "Bruno Costa", fields("Ana Silva")).is_err());
        assert!(edit(&mut store, "Bruno Costa", fields("Bruno C Costa")).is_ok());
    }

    #[test]
    fn delete_removes_only_the_employee() {
        let mut store = Store::default();
        store.customers.push(Person::new(fields("Ana Silva")));
        add(&mut store, fields("Ana Silva")).unwrap();

        delete(&mut store, "ana silva").unwrap();
        assert!(store.employees.is_empty());
        assert_eq!(store.customers.len(), 1);
    }

    #[test]
    fn filter_matches_any_column() {
        let mut store = Store::default();
        let mut ana = fields("Ana Silva");
        ana.phone = Some("11999990000".to_string());
        add(&mut store, ana).unwrap();
        add(&mut store, fields("Bruno Costa")).unwrap();

        let by_phone = list(&store, Some("9999")).unwrap();
        assert_eq!(by_phone.table.unwrap().rows.len(), 1);
    }
}
