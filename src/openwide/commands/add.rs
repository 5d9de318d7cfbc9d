use crate::commands::{CmdMessage, CmdResult, NewAppointment};
use crate::error::Result;
use crate::model::{Appointment, Patient};
use crate::slot::Slot;
use crate::store::AppointmentStore;
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use super::helpers::ensure_bookable;

pub fn run<S: AppointmentStore>(
    store: &mut S,
    now: NaiveDateTime,
    request: NewAppointment,
) -> Result<CmdResult> {
    debug!(patient_id = %request.patient_id, date = %request.date, time = %request.time, "add");

    let slot = Slot::parse(&request.date, &request.time)?;
    if let Err(e) = ensure_bookable(store, &slot, now, None) {
        warn!(%slot, error = %e, "add rejected");
        return Err(e);
    }

    let shared_id = store
        .list()?
        .iter()
        .any(|a| a.belongs_to(&request.patient_id));

    let patient = Patient::new(request.name, request.age, request.patient_id);
    let appointment = Appointment::new(patient, slot);
    store.push(appointment.clone())?;
    info!(patient_id = %appointment.patient.patient_id, %slot, "appointment added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Appointment added successfully!"));
    if shared_id {
        result.add_message(CmdMessage::warning(format!(
            "Patient ID {} already had an appointment. Cancel and update act on the earliest one.",
            appointment.patient.patient_id
        )));
    }
    Ok(result.with_affected_appointments(vec![appointment]))
}
