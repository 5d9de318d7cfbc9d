use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AppointmentStore;

use super::helpers::listed_appointments;

pub fn run<S: AppointmentStore>(store: &S) -> Result<CmdResult> {
    let listed = listed_appointments(store)?;
    let empty = listed.is_empty();

    let mut result = CmdResult::default().with_listed_appointments(listed);
    if empty {
        result.add_message(CmdMessage::info("No appointments available."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_everything_in_insertion_order() {
        let store = StoreFixture::new().with_appointments(3).store;
        let result = run(&store).unwrap();

        let ids: Vec<_> = result
            .listed_appointments
            .iter()
            .map(|l| (l.number, l.appointment.patient.patient_id.as_str()))
            .collect();
        assert_eq!(ids, vec![(1, "P1"), (2, "P2"), (3, "P3")]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_registry_says_so() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_appointments.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
