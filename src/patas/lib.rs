//! # Patas
//!
//! Patas is a record keeper for small pet shops: customers, animals,
//! appointments and employees, plus session-scoped product and sale logs and
//! an on-demand totals report. All state lives in an in-memory [`store::Store`]
//! that is saved in full to a single JSON file after every successful
//! mutation and loaded in full at startup.
//!
//! It is a **UI-agnostic library** with a CLI client, layered so the same
//! core could sit behind any shell:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, renders tables, prints messages        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Saves the store after every successful mutation          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                              │
//! │  - Pure business logic over the in-memory store             │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage layer (store/)                                     │
//! │  - Store: the collections; Persister: the snapshot seam     │
//! │  - FilePersister (production), MemoryPersister (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principle: no I/O assumptions in core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, and never calls
//! `std::process::exit`.
//!
//! ## Module overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic for each screen of the system
//! - [`ownership`]: the customer↔animal relation and adoption status
//! - [`validate`]: field validation shared by every form
//! - [`store`]: the record store and persistence backends
//! - [`model`]: record types (`Person`, `Animal`, `Appointment`)
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod ownership;
pub mod store;
pub mod validate;
