//! The on-demand report: plain totals over every collection, recomputed each
//! time. The original system computed the employee total but only wrote it
//! to an internal log; here it is part of the rendered report.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Store;

pub fn run(store: &Store) -> Result<CmdResult> {
    let adoptable = store
        .animals
        .iter()
        .filter(|a| a.available_for_adoption)
        .count();
    let lines = vec![
        "Pet shop report".to_string(),
        String::new(),
        format!("Total customers: {}", store.customers.len()),
        format!("Total animals: {}", store.animals.len()),
        format!("Animals up for adoption: {}", adoptable),
        format!("Total appointments: {}", store.appointments.len()),
        format!("Total products: {}", store.products.len()),
        format!("Total sales: {}", store.sales.len()),
        format!("Total employees: {}", store.employees.len()),
    ];
    Ok(CmdResult::default().with_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register::{self, AnimalEntry, RegistrationBatch};

    #[test]
    fn totals_cover_every_collection() {
        let mut store = Store::default();
        register::run(
            &mut store,
            RegistrationBatch {
                animals: vec![
                    AnimalEntry {
                        name: "Rex".to_string(),
                        ..AnimalEntry::default()
                    },
                    AnimalEntry {
                        name: "Mimi".to_string(),
                        ..AnimalEntry::default()
                    },
                ],
                ownerless: true,
                ..RegistrationBatch::default()
            },
        )
        .unwrap();
        store.products.push("Dog shampoo".to_string());

        let result = run(&store).unwrap();
        assert!(result.lines.contains(&"Total customers: 0".to_string()));
        assert!(result.lines.contains(&"Total animals: 2".to_string()));
        assert!(result
            .lines
            .contains(&"Animals up for adoption: 2".to_string()));
        assert!(result.lines.contains(&"Total products: 1".to_string()));
        assert!(result.lines.contains(&"Total employees: 0".to_string()));
    }
}
