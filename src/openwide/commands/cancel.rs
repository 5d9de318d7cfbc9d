use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AppointmentStore;
use tracing::{debug, info};

use super::helpers::position_of;

/// Removes the first appointment booked under `patient_id`.
pub fn run<S: AppointmentStore>(store: &mut S, patient_id: &str) -> Result<CmdResult> {
    debug!(%patient_id, "cancel");

    let position = position_of(store, patient_id)?;
    let removed = store.remove(position)?;
    info!(%patient_id, slot = %removed.slot, "appointment canceled");

    let mut result = CmdResult::default().with_affected_appointments(vec![removed]);
    result.add_message(CmdMessage::success("Appointment canceled successfully!"));
    Ok(result)
}
