//! # API Facade
//!
//! [`ClinicApi`] is the single entry point for registry operations, whatever
//! the UI. It owns the registry (the store) and the clock, dispatches to the
//! command modules, and returns structured `Result<CmdResult>` values.
//!
//! It holds no business logic and performs no I/O. The menu in `cli/` is one
//! client; a test harness is another.
//!
//! ## Generic Over Store and Clock
//!
//! - Production: `ClinicApi<InMemoryStore, SystemClock>`
//! - Testing: `ClinicApi<InMemoryStore, FixedClock>`

use crate::clock::Clock;
use crate::commands;
use crate::error::Result;
use crate::store::AppointmentStore;

pub struct ClinicApi<S: AppointmentStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: AppointmentStore, C: Clock> ClinicApi<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn add_appointment(&mut self, request: NewAppointment) -> Result<CmdResult> {
        commands::add::run(&mut self.store, self.clock.now(), request)
    }

    pub fn cancel_appointment(&mut self, patient_id: &str) -> Result<CmdResult> {
        commands::cancel::run(&mut self.store, patient_id)
    }

    pub fn update_appointment(
        &mut self,
        patient_id: &str,
        update: AppointmentUpdate,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, self.clock.now(), patient_id, update)
    }

    pub fn list_appointments(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_by_date(&self, date: &str) -> Result<CmdResult> {
        commands::search::by_date(&self.store, date)
    }

    /// The appointment that `update_appointment` would edit, without editing it.
    pub fn find_appointment(&self, patient_id: &str) -> Result<ListedAppointment> {
        let position = commands::helpers::position_of(&self.store, patient_id)?;
        Ok(ListedAppointment {
            number: position + 1,
            appointment: self.store.get(position)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

pub use crate::commands::{AppointmentUpdate, CmdMessage, CmdResult, MessageLevel, NewAppointment};
pub use crate::model::ListedAppointment;
