//! # Storage Layer
//!
//! The [`AppointmentStore`] trait is the registry's storage seam: an ordered
//! sequence of appointments addressed by 0-based position. Insertion order is
//! the registry order and must be preserved by every implementation.
//!
//! The store enforces nothing about slots or patient IDs. Conflict and
//! past-date rules live in the command layer, so a store can be filled with
//! arbitrary fixtures in tests.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec` owned for the lifetime of the process.
//!   Appointments are never written to disk.

use crate::error::Result;
use crate::model::Appointment;

pub mod memory;

pub trait AppointmentStore {
    /// Append to the end of the registry
    fn push(&mut self, appointment: Appointment) -> Result<()>;

    /// All appointments in registry order
    fn list(&self) -> Result<Vec<Appointment>>;

    fn get(&self, position: usize) -> Result<Appointment>;

    /// Overwrite the appointment at `position`, keeping its place in the order
    fn replace(&mut self, position: usize, appointment: Appointment) -> Result<()>;

    /// Remove and return the appointment at `position`; later entries shift down
    fn remove(&mut self, position: usize) -> Result<Appointment>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
