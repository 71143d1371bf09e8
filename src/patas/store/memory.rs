use super::{Persister, Snapshot, Store};
use crate::error::{PatasError, Result};

/// In-memory persistence for tests: round-trips the snapshot through JSON
/// without touching the filesystem, so serialization bugs still surface.
#[derive(Default)]
pub struct MemoryPersister {
    snapshot: Option<String>,
}

impl MemoryPersister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}

impl Persister for MemoryPersister {
    fn load(&self) -> Result<Store> {
        match &self.snapshot {
            Some(content) => {
                let snapshot: Snapshot =
                    serde_json::from_str(content).map_err(PatasError::Serialization)?;
                snapshot.into_store()
            }
            None => Ok(Store::default()),
        }
    }

    fn save(&mut self, store: &Store) -> Result<()> {
        let content =
            serde_json::to_string(&Snapshot::of(store)).map_err(PatasError::Serialization)?;
        self.snapshot = Some(content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Animal, AnimalSex, Gender, Person, PersonFields, Species};
    use crate::ownership;

    #[test]
    fn empty_persister_loads_an_empty_store() {
        let persister = MemoryPersister::new();
        let store = persister.load().unwrap();
        assert!(store.customers.is_empty());
        assert!(store.animals.is_empty());
    }

    #[test]
    fn snapshot_round_trips_records_and_ownership_edges() {
        let mut store = Store::default();
        let ana = Person::new(PersonFields {
            name: "Ana Silva".to_string(),
            email: Some("ana@example.com".to_string()),
            phone: None,
            national_id: Some("12345678901".to_string()),
            postal_code: None,
            gender: Gender::Female,
        });
        let mut rex = Animal::new(
            "Rex".to_string(),
            "Bites the mailman".to_string(),
            Species::Dog,
            AnimalSex::Male,
        );
        ownership::add_owner(&mut rex, ana.id);
        store.customers.push(ana);
        store.animals.push(rex);

        let mut persister = MemoryPersister::new();
        persister.save(&store).unwrap();
        let loaded = persister.load().unwrap();

        assert_eq!(loaded.customers, store.customers);
        assert_eq!(loaded.animals, store.animals);
    }

    #[test]
    fn scratch_logs_do_not_survive_a_save() {
        let mut store = Store::default();
        store.products.push("Dog shampoo".to_string());
        store.sales.push("Dog shampoo, Ana Silva".to_string());

        let mut persister = MemoryPersister::new();
        persister.save(&store).unwrap();
        let loaded = persister.load().unwrap();

        assert!(loaded.products.is_empty());
        assert!(loaded.sales.is_empty());
    }

    #[test]
    fn unsupported_snapshot_version_is_a_store_error() {
        let persister = MemoryPersister {
            snapshot: Some(
                r#"{"version":99,"customers":[],"animals":[],"appointments":[],"employees":[]}"#
                    .to_string(),
            ),
        };
        assert!(matches!(
            persister.load(),
            Err(crate::error::PatasError::Store(_))
        ));
    }
}
