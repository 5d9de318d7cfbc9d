//! # Open Wide Architecture
//!
//! Open Wide is an in-memory appointment registry for a dental clinic. The
//! registry is a library; the text menu in the binary is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, flags, coloured output               │
//! │  - The ONLY place that reads stdin or writes stdout/stderr  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ClinicApi owns the registry and the clock                │
//! │  - One method per operation, returns Result<CmdResult>      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, conflict detection, not-found reporting      │
//! │  - Takes "now" as a value, never reads the clock itself     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - AppointmentStore trait, InMemoryStore (ordered Vec)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registry Rules
//!
//! - Insertion order is the registry order, for listing and for searching.
//! - No two appointments share a [`slot::Slot`]. This is checked when adding
//!   and when an update changes the date or time.
//! - New and rescheduled slots must start strictly after "now".
//! - Cancel and update act on the *first* appointment booked under a patient ID.
//! - Updates are all-or-nothing.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per registry operation
//! - [`store`]: Storage abstraction and the in-memory registry
//! - [`model`]: `Patient`, `Appointment`
//! - [`slot`]: Date and time parsing, formatting, and the `Slot` type
//! - [`clock`]: Wall clock abstraction
//! - [`config`]: Menu presentation settings
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod slot;
pub mod store;
