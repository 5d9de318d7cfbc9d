use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::slot::parse_date;
use crate::store::AppointmentStore;
use tracing::debug;

use super::helpers::listed_appointments;

/// Appointments on `date`, in registry order. Numbers stay the registry positions.
pub fn by_date<S: AppointmentStore>(store: &S, date: &str) -> Result<CmdResult> {
    let date = parse_date(date)?;

    let matches: Vec<_> = listed_appointments(store)?
        .into_iter()
        .filter(|l| l.appointment.slot.date == date)
        .collect();
    debug!(%date, found = matches.len(), "search by date");

    let empty = matches.is_empty();
    let mut result = CmdResult::default().with_listed_appointments(matches);
    if empty {
        result.add_message(CmdMessage::info("No appointments found for the given date."));
    }
    Ok(result)
}
