use crate::commands::{AppointmentUpdate, CmdMessage, CmdResult};
use crate::error::Result;
use crate::slot::{parse_date, parse_time, Slot};
use crate::store::AppointmentStore;
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use super::helpers::{ensure_bookable, position_of};

/// Applies `update` to the first appointment booked under `patient_id`.
///
/// The edit is all-or-nothing: every field is applied to a copy, the copy is
/// validated, and only a fully valid copy replaces the original. Whenever the
/// date or the time changes, the resulting slot must lie in the future and
/// must not collide with any other appointment.
pub fn run<S: AppointmentStore>(
    store: &mut S,
    now: NaiveDateTime,
    patient_id: &str,
    update: AppointmentUpdate,
) -> Result<CmdResult> {
    debug!(%patient_id, ?update, "update");

    let position = position_of(store, patient_id)?;
    let original = store.get(position)?;

    if update.is_empty() {
        let mut result = CmdResult::default().with_affected_appointments(vec![original]);
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let mut edited = original.clone();
    let touches_slot = update.touches_slot();

    if let Some(name) = update.name {
        edited.patient.name = name;
    }
    if let Some(age) = update.age {
        edited.patient.age = age;
    }
    if let Some(new_id) = update.patient_id {
        edited.patient.patient_id = new_id;
    }

    let date = match update.date {
        Some(raw) => parse_date(&raw)?,
        None => original.slot.date,
    };
    let time = match update.time {
        Some(raw) => parse_time(&raw)?,
        None => original.slot.time,
    };
    edited.slot = Slot::new(date, time);

    if touches_slot {
        if let Err(e) = ensure_bookable(store, &edited.slot, now, Some(position)) {
            warn!(%patient_id, slot = %edited.slot, error = %e, "update rejected");
            return Err(e);
        }
    }

    store.replace(position, edited.clone())?;
    info!(%patient_id, slot = %edited.slot, "appointment updated");

    let mut result = CmdResult::default().with_affected_appointments(vec![edited]);
    result.add_message(CmdMessage::success("Appointment updated successfully!"));
    Ok(result)
}
