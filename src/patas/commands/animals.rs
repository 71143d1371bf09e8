//! The animal screen: list with free-text and adoption-only filters, edit,
//! delete, and the three owner operations (associate an existing customer,
//! detach one, quick-add a brand-new customer as owner).

use crate::commands::{helpers, CmdMessage, CmdResult, Table};
use crate::error::Result;
use crate::model::{Animal, AnimalSex, Gender, Person, PersonFields, Species};
use crate::ownership;
use crate::store::Store;
use crate::validate::{self, ValidationError};

const COLUMNS: [&str; 6] = ["#", "Name", "Owners", "Note", "Species", "Sex"];

/// The field set an animal edit submits. Owners are managed separately.
#[derive(Debug, Clone)]
pub struct AnimalUpdate {
    pub name: String,
    pub species: Species,
    pub sex: AnimalSex,
    pub note: String,
    pub ownerless: bool,
}

fn row(store: &Store, position: usize, animal: &Animal) -> Vec<String> {
    vec![
        format!("{}", position + 1),
        animal.name.clone(),
        ownership::owner_summary(animal, &store.customers),
        animal.note.clone(),
        animal.species.to_string(),
        animal.sex.to_string(),
    ]
}

// The note column is displayed but, as in the original screen, does not
// participate in the filter.
fn matches(store: &Store, animal: &Animal, filter: &str) -> bool {
    helpers::contains_ci(&animal.name, filter)
        || helpers::contains_ci(&ownership::owner_summary(animal, &store.customers), filter)
        || helpers::contains_ci(&animal.species.to_string(), filter)
        || helpers::contains_ci(&animal.sex.to_string(), filter)
}

/// Lists animals with their 1-based positions. Positions are assigned before
/// filtering so a filtered row can still be addressed.
pub fn list(store: &Store, filter: Option<&str>, adoption_only: bool) -> Result<CmdResult> {
    let rows = store
        .animals
        .iter()
        .enumerate()
        .filter(|(_, a)| !adoption_only || a.available_for_adoption)
        .filter(|(_, a)| filter.is_none_or(|f| matches(store, a, f)))
        .map(|(i, a)| row(store, i, a))
        .collect();
    Ok(CmdResult::default().with_table(Table {
        header: COLUMNS.to_vec(),
        rows,
    }))
}

/// Replaces an animal's fields. Marking an animal ownerless while it still
/// has owners is rejected; the adoption flags always follow the owner list.
pub fn edit(store: &mut Store, position: usize, update: AnimalUpdate) -> Result<CmdResult> {
    let index = helpers::animal_index(store, position)?;
    validate::animal(&update.name, &update.species)?;
    if update.ownerless && !store.animals[index].owners.is_empty() {
        return Err(ValidationError::OwnerlessWithOwners.into());
    }

    let animal = &mut store.animals[index];
    animal.name = update.name;
    animal.species = update.species;
    animal.sex = update.sex;
    animal.note = update.note;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Animal updated: {}",
        animal.name
    )));
    Ok(result)
}

/// Deletes an animal. Appointments keep their non-owning reference and
/// render the animal as removed.
pub fn delete(store: &mut Store, position: usize) -> Result<CmdResult> {
    let index = helpers::animal_index(store, position)?;
    let animal = store.animals.remove(index);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Animal deleted: {}",
        animal.name
    )));
    Ok(result)
}

/// Associates an existing customer with an animal.
pub fn add_owner(store: &mut Store, position: usize, customer_name: &str) -> Result<CmdResult> {
    let animal_index = helpers::animal_index(store, position)?;
    let customer_index = helpers::customer_index(store, customer_name)?;
    let customer_id = store.customers[customer_index].id;
    let customer_name = store.customers[customer_index].name.clone();

    let animal = &mut store.animals[animal_index];
    let mut result = CmdResult::default();
    if animal.owners.contains(&customer_id) {
        result.add_message(CmdMessage::info(format!(
            "{} is already an owner of {}",
            customer_name, animal.name
        )));
    } else {
        ownership::add_owner(animal, customer_id);
        result.add_message(CmdMessage::success(format!(
            "Owner added: {} now belongs to {}",
            animal.name, customer_name
        )));
    }
    Ok(result)
}

/// Detaches a customer from an animal. An animal left without owners goes
/// back up for adoption.
pub fn remove_owner(store: &mut Store, position: usize, customer_name: &str) -> Result<CmdResult> {
    let animal_index = helpers::animal_index(store, position)?;
    let customer_index = helpers::customer_index(store, customer_name)?;
    let customer_id = store.customers[customer_index].id;
    let customer_name = store.customers[customer_index].name.clone();

    let animal = &mut store.animals[animal_index];
    let mut result = CmdResult::default();
    if animal.owners.contains(&customer_id) {
        ownership::remove_owner(animal, customer_id);
        result.add_message(CmdMessage::success(format!(
            "Owner removed: {} from {}",
            customer_name, animal.name
        )));
        if animal.available_for_adoption {
            result.add_message(CmdMessage::info(format!(
                "{} is now up for adoption",
                animal.name
            )));
        }
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} is not an owner of {}",
            customer_name, animal.name
        )));
    }
    Ok(result)
}

/// Creates a customer from just a name and attaches it to the animal being
/// edited. The name passes the standalone registration rules; when a
/// same-name customer already exists the quick-add is skipped without error
/// and the animal is left untouched.
pub fn quick_add_owner(store: &mut Store, position: usize, name: &str) -> Result<CmdResult> {
    let animal_index = helpers::animal_index(store, position)?;
    let fields = PersonFields {
        name: name.trim().to_string(),
        email: None,
        phone: None,
        national_id: None,
        postal_code: None,
        gender: Gender::PreferNotToSay,
    };

    let mut result = CmdResult::default();
    match validate::person(&fields, &store.customers, None) {
        Err(ValidationError::DuplicateName(existing)) => {
            result.add_message(CmdMessage::warning(format!(
                "Customer already exists, nothing added: {}",
                existing
            )));
            return Ok(result);
        }
        other => other?,
    }

    let customer = Person::new(fields);
    let customer_id = customer.id;
    let customer_name = customer.name.clone();
    store.customers.push(customer);

    let animal = &mut store.animals[animal_index];
    ownership::add_owner(animal, customer_id);
    result.add_message(CmdMessage::success(format!(
        "Customer created and added as owner of {}: {}",
        animal.name, customer_name
    )));
    Ok(result)
}
