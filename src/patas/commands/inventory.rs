//! Product and sale scratch logs: unvalidated append-only string lists.
//!
//! The logs are session-scoped. The original system never persisted them
//! either, losing both on application exit; here they last for one process.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Store;

fn log_lines(title: &str, entries: &[String]) -> Vec<String> {
    let mut lines = vec![format!("{}:", title)];
    lines.extend(entries.iter().cloned());
    lines
}

pub fn add_product(store: &mut Store, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    let mut result = CmdResult::default();
    if text.is_empty() {
        result.add_message(CmdMessage::warning("Nothing to add"));
        return Ok(result);
    }
    store.products.push(text.to_string());
    Ok(result.with_lines(log_lines("Products", &store.products)))
}

pub fn list_products(store: &Store) -> Result<CmdResult> {
    Ok(CmdResult::default().with_lines(log_lines("Products", &store.products)))
}

pub fn add_sale(store: &mut Store, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    let mut result = CmdResult::default();
    if text.is_empty() {
        result.add_message(CmdMessage::warning("Nothing to add"));
        return Ok(result);
    }
    store.sales.push(text.to_string());
    Ok(result.with_lines(log_lines("Sales", &store.sales)))
}

pub fn list_sales(store: &Store) -> Result<CmdResult> {
    Ok(CmdResult::default().with_lines(log_lines("Sales", &store.sales)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_append_in_order_and_echo_the_full_list() {
        let mut store = Store::default();
        add_product(&mut store, "Dog shampoo").unwrap();
        let result = add_product(&mut store, "Cat litter").unwrap();

        assert_eq!(store.products, vec!["Dog shampoo", "Cat litter"]);
        assert_eq!(result.lines, vec!["Products:", "Dog shampoo", "Cat litter"]);
    }

    #[test]
    fn blank_entries_are_ignored_with_a_warning() {
        let mut store = Store::default();
        let result = add_sale(&mut store, "  ").unwrap();
        assert!(store.sales.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
