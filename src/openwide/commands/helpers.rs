use crate::error::{ClinicError, Result};
use crate::model::ListedAppointment;
use crate::slot::Slot;
use crate::store::AppointmentStore;
use chrono::NaiveDateTime;

pub fn listed_appointments<S: AppointmentStore>(store: &S) -> Result<Vec<ListedAppointment>> {
    Ok(store
        .list()?
        .into_iter()
        .enumerate()
        .map(|(i, appointment)| ListedAppointment {
            number: i + 1,
            appointment,
        })
        .collect())
}

/// 0-based position of the first appointment booked under `patient_id`.
pub fn position_of<S: AppointmentStore>(store: &S, patient_id: &str) -> Result<usize> {
    store
        .list()?
        .iter()
        .position(|a| a.belongs_to(patient_id))
        .ok_or_else(|| ClinicError::NotFound(patient_id.to_string()))
}

pub fn ensure_future(slot: &Slot, now: NaiveDateTime) -> Result<()> {
    if slot.is_after(now) {
        Ok(())
    } else {
        Err(ClinicError::PastDateTime)
    }
}

/// Fails if any appointment other than the one at `except` already holds `slot`.
pub fn ensure_free<S: AppointmentStore>(
    store: &S,
    slot: &Slot,
    except: Option<usize>,
) -> Result<()> {
    let taken = store
        .list()?
        .iter()
        .enumerate()
        .any(|(i, a)| Some(i) != except && a.slot == *slot);

    if taken {
        Err(ClinicError::Conflict { slot: *slot })
    } else {
        Ok(())
    }
}

/// A slot can be booked when it lies in the future and nobody else (other
/// than the appointment at `except`) holds it.
pub fn ensure_bookable<S: AppointmentStore>(
    store: &S,
    slot: &Slot,
    now: NaiveDateTime,
    except: Option<usize>,
) -> Result<()> {
    ensure_future(slot, now)?;
    ensure_free(store, slot, except)
}

/// Noon on 2026-10-18, the instant command tests treat as "now".
#[cfg(test)]
pub(crate) fn test_now() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}
