//! # Storage layer
//!
//! [`Store`] owns every collection in the system and is handed by reference
//! to commands; nothing else holds state. The [`Persister`] trait abstracts
//! where snapshots go:
//!
//! - [`fs::FilePersister`]: production persistence, the whole store as one
//!   JSON file
//! - [`memory::MemoryPersister`]: in-memory snapshots for tests
//!
//! A snapshot covers customers, animals, appointments and employees, in that
//! order, and is versioned so a future schema change can be detected on load.
//! Ownership edges and appointment references are stored as stable record
//! ids, never as embedded copies. The product and sale logs are scratch
//! lists: they are never written and last only as long as the process.

use serde::{Deserialize, Serialize};

use crate::error::{PatasError, Result};
use crate::model::{Animal, Appointment, Person};

pub mod fs;
pub mod memory;

pub(crate) const SNAPSHOT_VERSION: u32 = 1;

/// Every collection in the system. Commands receive `&mut Store`.
#[derive(Debug, Default, Clone)]
pub struct Store {
    pub customers: Vec<Person>,
    pub animals: Vec<Animal>,
    pub appointments: Vec<Appointment>,
    pub employees: Vec<Person>,
    /// Session-scoped scratch log, never persisted.
    pub products: Vec<String>,
    /// Session-scoped scratch log, never persisted.
    pub sales: Vec<String>,
}

/// On-disk shape of the store.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Snapshot {
    pub version: u32,
    pub customers: Vec<Person>,
    pub animals: Vec<Animal>,
    pub appointments: Vec<Appointment>,
    pub employees: Vec<Person>,
}

impl Snapshot {
    pub fn of(store: &Store) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            customers: store.customers.clone(),
            animals: store.animals.clone(),
            appointments: store.appointments.clone(),
            employees: store.employees.clone(),
        }
    }

    pub fn into_store(self) -> Result<Store> {
        if self.version != SNAPSHOT_VERSION {
            return Err(PatasError::Store(format!(
                "unsupported snapshot version: {}",
                self.version
            )));
        }
        Ok(Store {
            customers: self.customers,
            animals: self.animals,
            appointments: self.appointments,
            employees: self.employees,
            products: Vec::new(),
            sales: Vec::new(),
        })
    }
}

/// Abstract persistence seam for the store.
pub trait Persister {
    /// Load the full store. A missing backing file yields an empty store.
    fn load(&self) -> Result<Store>;

    /// Save the full store. Called after every successful mutation.
    fn save(&mut self, store: &Store) -> Result<()>;
}
