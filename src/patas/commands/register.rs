//! Bulk registration: one submission can create several customers and
//! several animals at once. Unless the batch is flagged ownerless, every new
//! animal is associated with every new customer in the batch.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Animal, AnimalSex, Person, PersonFields, Species};
use crate::ownership;
use crate::store::Store;
use crate::validate;

/// One animal row in a registration batch. The shared batch note is applied
/// to each created animal.
#[derive(Debug, Clone)]
pub struct AnimalEntry {
    pub name: String,
    pub species: Species,
    pub sex: AnimalSex,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationBatch {
    pub customers: Vec<PersonFields>,
    pub animals: Vec<AnimalEntry>,
    /// Create the animals without owners, up for adoption. Customers present
    /// in an ownerless submission are ignored.
    pub ownerless: bool,
    /// Note applied to every animal in the batch.
    pub note: String,
}

impl Default for AnimalEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: Species::Dog,
            sex: AnimalSex::Male,
        }
    }
}

/// Runs a registration batch. Validation is all-or-nothing: the first
/// failing field anywhere in the batch aborts the whole submission and the
/// store is left untouched. Uniqueness is checked against the store and
/// against earlier members of the same batch.
pub fn run(store: &mut Store, batch: RegistrationBatch) -> Result<CmdResult> {
    let mut staged_customers: Vec<Person> = Vec::new();
    if !batch.ownerless {
        for fields in &batch.customers {
            validate::person(fields, &store.customers, None)?;
            validate::person(fields, &staged_customers, None)?;
            staged_customers.push(Person::new(fields.clone()));
        }
    }

    let mut staged_animals: Vec<Animal> = Vec::new();
    for entry in &batch.animals {
        validate::animal(&entry.name, &entry.species)?;
        staged_animals.push(Animal::new(
            entry.name.clone(),
            batch.note.clone(),
            entry.species.clone(),
            entry.sex,
        ));
    }

    if !batch.ownerless {
        for animal in &mut staged_animals {
            for customer in &staged_customers {
                ownership::add_owner(animal, customer.id);
            }
        }
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Registered {} customer(s) and {} animal(s)",
        staged_customers.len(),
        staged_animals.len()
    )));
    store.customers.extend(staged_customers);
    store.animals.extend(staged_animals);
    Ok(result)
}
