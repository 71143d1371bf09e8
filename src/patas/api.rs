//! # API facade
//!
//! The single entry point for every operation, regardless of shell. The
//! facade owns the [`Store`] and a [`Persister`], dispatches to the command
//! layer, and performs a full save of the store after every successful
//! mutation.
//!
//! A failed save does not fail the operation: the in-memory store stays
//! authoritative and the failure is attached to the result as an error-level
//! message, so the shell can warn that changes since the last successful
//! save are at risk.
//!
//! The product and sale logs are the one exception to save-on-mutation:
//! they are session-scoped and never persisted.

use chrono::{NaiveDate, NaiveTime};

use crate::commands::animals::AnimalUpdate;
use crate::commands::register::RegistrationBatch;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{PatasError, Result};
use crate::model::PersonFields;
use crate::store::{Persister, Store};

pub struct PatasApi<P: Persister> {
    store: Store,
    persister: P,
}

impl<P: Persister> PatasApi<P> {
    /// Loads the store from the persister. On a load failure the API starts
    /// with empty collections and hands the error back for reporting, as a
    /// first run does when the data file does not exist yet.
    pub fn open(persister: P) -> (Self, Option<PatasError>) {
        match persister.load() {
            Ok(store) => (Self { store, persister }, None),
            Err(e) => (
                Self {
                    store: Store::default(),
                    persister,
                },
                Some(e),
            ),
        }
    }

    /// Starts from an explicit store. Used by tests and by shells that
    /// manage loading themselves.
    pub fn new(store: Store, persister: P) -> Self {
        Self { store, persister }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    fn save_after(&mut self, mut result: CmdResult) -> CmdResult {
        if let Err(e) = self.persister.save(&self.store) {
            result.add_message(CmdMessage::error(format!("Failed to save data: {}", e)));
        }
        result
    }

    pub fn register(&mut self, batch: RegistrationBatch) -> Result<CmdResult> {
        let result = commands::register::run(&mut self.store, batch)?;
        Ok(self.save_after(result))
    }

    pub fn customers(&self, filter: Option<&str>) -> Result<CmdResult> {
        commands::customers::list(&self.store, filter)
    }

    pub fn edit_customer(&mut self, name: &str, fields: PersonFields) -> Result<CmdResult> {
        let result = commands::customers::edit(&mut self.store, name, fields)?;
        Ok(self.save_after(result))
    }

    pub fn delete_customer(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::customers::delete(&mut self.store, name)?;
        Ok(self.save_after(result))
    }

    pub fn animals(&self, filter: Option<&str>, adoption_only: bool) -> Result<CmdResult> {
        commands::animals::list(&self.store, filter, adoption_only)
    }

    pub fn edit_animal(&mut self, position: usize, update: AnimalUpdate) -> Result<CmdResult> {
        let result = commands::animals::edit(&mut self.store, position, update)?;
        Ok(self.save_after(result))
    }

    pub fn delete_animal(&mut self, position: usize) -> Result<CmdResult> {
        let result = commands::animals::delete(&mut self.store, position)?;
        Ok(self.save_after(result))
    }

    pub fn add_owner(&mut self, position: usize, customer_name: &str) -> Result<CmdResult> {
        let result = commands::animals::add_owner(&mut self.store, position, customer_name)?;
        Ok(self.save_after(result))
    }

    pub fn remove_owner(&mut self, position: usize, customer_name: &str) -> Result<CmdResult> {
        let result = commands::animals::remove_owner(&mut self.store, position, customer_name)?;
        Ok(self.save_after(result))
    }

    pub fn quick_add_owner(&mut self, position: usize, name: &str) -> Result<CmdResult> {
        let result = commands::animals::quick_add_owner(&mut self.store, position, name)?;
        Ok(self.save_after(result))
    }

    pub fn book_appointment(
        &mut self,
        animal_position: usize,
        date: NaiveDate,
        time: NaiveTime,
        details: &str,
    ) -> Result<CmdResult> {
        let result =
            commands::appointments::create(&mut self.store, animal_position, date, time, details)?;
        Ok(self.save_after(result))
    }

    pub fn appointments(&self, filter: Option<&str>) -> Result<CmdResult> {
        commands::appointments::list(&self.store, filter)
    }

    pub fn edit_appointment(
        &mut self,
        position: usize,
        animal_position: usize,
        date: NaiveDate,
        time: NaiveTime,
        details: &str,
    ) -> Result<CmdResult> {
        let result = commands::appointments::edit(
            &mut self.store,
            position,
            animal_position,
            date,
            time,
            details,
        )?;
        Ok(self.save_after(result))
    }

    pub fn delete_appointment(&mut self, position: usize) -> Result<CmdResult> {
        let result = commands::appointments::delete(&mut self.store, position)?;
        Ok(self.save_after(result))
    }

    pub fn add_employee(&mut self, fields: PersonFields) -> Result<CmdResult> {
        let result = commands::employees::add(&mut self.store, fields)?;
        Ok(self.save_after(result))
    }

    pub fn employees(&self, filter: Option<&str>) -> Result<CmdResult> {
        commands::employees::list(&self.store, filter)
    }

    pub fn edit_employee(&mut self, name: &str, fields: PersonFields) -> Result<CmdResult> {
        let result = commands::employees::edit(&mut self.store, name, fields)?;
        Ok(self.save_after(result))
    }

    pub fn delete_employee(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::employees::delete(&mut self.store, name)?;
        Ok(self.save_after(result))
    }

    pub fn add_product(&mut self, text: &str) -> Result<CmdResult> {
        commands::inventory::add_product(&mut self.store, text)
    }

    pub fn products(&self) -> Result<CmdResult> {
        commands::inventory::list_products(&self.store)
    }

    pub fn add_sale(&mut self, text: &str) -> Result<CmdResult> {
        commands::inventory::add_sale(&mut self.store, text)
    }

    pub fn sales(&self) -> Result<CmdResult> {
        commands::inventory::list_sales(&self.store)
    }

    pub fn report(&self) -> Result<CmdResult> {
        commands::report::run(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register::AnimalEntry;
    use crate::commands::MessageLevel;
    use crate::model::Gender;
    use crate::store::memory::MemoryPersister;

    struct FailingPersister;

    impl Persister for FailingPersister {
        fn load(&self) -> Result<Store> {
            Err(PatasError::Store("backing store is gone".to_string()))
        }

        fn save(&mut self, _store: &Store) -> Result<()> {
            Err(PatasError::Store("backing store is gone".to_string()))
        }
    }

    fn batch() -> RegistrationBatch {
        RegistrationBatch {
            customers: vec![PersonFields {
                name: "Ana Silva".to_string(),
                email: None,
                phone: None,
                national_id: None,
                postal_code: None,
                gender: Gender::Female,
            }],
            animals: vec![AnimalEntry {
                name: "Rex".to_string(),
                ..AnimalEntry::default()
            }],
            ownerless: false,
            note: String::new(),
        }
    }

    #[test]
    fn mutations_are_saved_through_the_persister() {
        let (mut api, load_error) = PatasApi::open(MemoryPersister::new());
        assert!(load_error.is_none());

        api.register(batch()).unwrap();
        assert!(api.persister.has_snapshot());
    }

    #[test]
    fn a_failed_save_keeps_the_mutation_and_reports_it() {
        let mut api = PatasApi::new(Store::default(), FailingPersister);

        let result = api.register(batch()).unwrap();
        assert_eq!(api.store().customers.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error) && m.content.contains("save")));
    }

    #[test]
    fn a_failed_load_starts_empty_and_surfaces_the_error() {
        let (api, load_error) = PatasApi::open(FailingPersister);
        assert!(load_error.is_some());
        assert!(api.store().customers.is_empty());
    }

    #[test]
    fn inventory_is_not_persisted() {
        let (mut api, _) = PatasApi::open(MemoryPersister::new());
        api.add_product("Dog shampoo").unwrap();
        assert!(!api.persister.has_snapshot());
    }
}
