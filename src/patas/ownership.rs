//! The ownership relation between customers and animals.
//!
//! Animals reference their owners by customer id, in association order, and
//! carry two derived flags: an animal is without an owner, and up for
//! adoption, exactly when its owner list is empty. Every operation here
//! restores that equality before returning.

use uuid::Uuid;

use crate::model::{Animal, Person};
use crate::store::Store;

/// Shown wherever an animal without owners is displayed.
pub const UP_FOR_ADOPTION: &str = "No owner (Up for adoption)";

/// Associates a customer with an animal. Adding an owner that is already
/// present is a no-op; the owner list stays duplicate-free.
pub fn add_owner(animal: &mut Animal, customer: Uuid) {
    if !animal.owners.contains(&customer) {
        animal.owners.push(customer);
        animal.without_owner = false;
        animal.available_for_adoption = false;
    }
}

/// Removes a customer from an animal's owner list, if present. An animal
/// left with no owners goes back up for adoption.
pub fn remove_owner(animal: &mut Animal, customer: Uuid) {
    animal.owners.retain(|id| *id != customer);
    if animal.owners.is_empty() {
        animal.without_owner = true;
        animal.available_for_adoption = true;
    }
}

/// Clears a deleted customer out of every animal in the store. No animal may
/// keep a dangling reference.
pub fn on_customer_deleted(store: &mut Store, customer: Uuid) {
    for animal in &mut store.animals {
        remove_owner(animal, customer);
    }
}

/// Display string for an animal's owners, in association order. Each owner
/// renders through [`Person::label`].
pub fn owner_summary(animal: &Animal, customers: &[Person]) -> String {
    if animal.owners.is_empty() {
        return UP_FOR_ADOPTION.to_string();
    }
    animal
        .owners
        .iter()
        .filter_map(|id| customers.iter().find(|c| c.id == *id))
        .map(Person::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnimalSex, Gender, PersonFields, Species};

    fn customer(name: &str, national_id: Option<&str>) -> Person {
        Person::new(PersonFields {
            name: name.to_string(),
            email: None,
            phone: None,
            national_id: national_id.map(str::to_string),
            postal_code: None,
            gender: Gender::PreferNotToSay,
        })
    }

    fn animal(name: &str) -> Animal {
        Animal::new(name.to_string(), String::new(), Species::Dog, AnimalSex::Male)
    }

    #[test]
    fn flags_track_owner_list_through_every_operation() {
        let ana = customer("Ana Silva", None);
        let mut rex = animal("Rex");
        assert!(rex.available_for_adoption);
        assert!(rex.without_owner);

        add_owner(&mut rex, ana.id);
        assert_eq!(rex.available_for_adoption, rex.owners.is_empty());
        assert!(!rex.available_for_adoption);
        assert!(!rex.without_owner);

        remove_owner(&mut rex, ana.id);
        assert_eq!(rex.available_for_adoption, rex.owners.is_empty());
        assert!(rex.available_for_adoption);
        assert!(rex.without_owner);
    }

    #[test]
    fn add_owner_is_idempotent() {
        let ana = customer("Ana Silva", None);
        let mut rex = animal("Rex");

        add_owner(&mut rex, ana.id);
        add_owner(&mut rex, ana.id);
        assert_eq!(rex.owners, vec![ana.id]);
    }

    #[test]
    fn owners_keep_association_order() {
        let ana = customer("Ana Silva", None);
        let bruno = customer("Bruno Costa", None);
        let mut rex = animal("Rex");

        add_owner(&mut rex, ana.id);
        add_owner(&mut rex, bruno.id);
        assert_eq!(rex.owners, vec![ana.id, bruno.id]);
    }

    #[test]
    fn removing_one_of_two_owners_keeps_flags_off() {
        let ana = customer("Ana Silva", None);
        let bruno = customer("Bruno Costa", None);
        let mut rex = animal("Rex");
        add_owner(&mut rex, ana.id);
        add_owner(&mut rex, bruno.id);

        remove_owner(&mut rex, ana.id);
        assert_eq!(rex.owners, vec![bruno.id]);
        assert!(!rex.available_for_adoption);
        assert!(!rex.without_owner);
    }

    #[test]
    fn removing_an_absent_owner_is_a_noop() {
        let ana = customer("Ana Silva", None);
        let bruno = customer("Bruno Costa", None);
        let mut rex = animal("Rex");
        add_owner(&mut rex, ana.id);

        remove_owner(&mut rex, bruno.id);
        assert_eq!(rex.owners, vec![ana.id]);
        assert!(!rex.available_for_adoption);
    }

    #[test]
    fn deleting_a_customer_clears_it_from_every_animal() {
        let ana = customer("Ana Silva", None);
        let bruno = customer("Bruno Costa", None);
        let mut store = Store::default();

        let mut rex = animal("Rex");
        add_owner(&mut rex, ana.id);
        add_owner(&mut rex, bruno.id);
        let mut mimi = animal("Mimi");
        add_owner(&mut mimi, ana.id);
        store.animals = vec![rex, mimi];
        store.customers = vec![ana.clone(), bruno];

        on_customer_deleted(&mut store, ana.id);

        for a in &store.animals {
            assert!(!a.owners.contains(&ana.id));
            assert_eq!(a.available_for_adoption, a.owners.is_empty());
        }
        // Mimi had only Ana, so she is back up for adoption.
        assert!(store.animals[1].available_for_adoption);
        assert!(!store.animals[0].available_for_adoption);
    }

    #[test]
    fn summary_for_ownerless_animal() {
        let rex = animal("Rex");
        assert_eq!(owner_summary(&rex, &[]), UP_FOR_ADOPTION);
    }

    #[test]
    fn summary_joins_owners_in_association_order() {
        let ana = customer("Ana Silva", Some("12345678901"));
        let bruno = customer("Bruno Costa", None);
        let mut rex = animal("Rex");
        add_owner(&mut rex, bruno.id);
        add_owner(&mut rex, ana.id);

        let customers = vec![ana, bruno];
        assert_eq!(
            owner_summary(&rex, &customers),
            "Bruno Costa, Ana Silva (ID: 12345678901)"
        );
    }
}
