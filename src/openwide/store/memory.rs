use super::AppointmentStore;
use crate::error::{ClinicError, Result};
use crate::model::Appointment;

/// In-memory registry. Lives as long as the process and is never persisted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    appointments: Vec<Appointment>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn out_of_range(&self, position: usize) -> ClinicError {
        ClinicError::Store(format!(
            "Position {} is out of range ({} appointments)",
            position,
            self.appointments.len()
        ))
    }
}

impl AppointmentStore for InMemoryStore {
    fn push(&mut self, appointment: Appointment) -> Result<()> {
        self.appointments.push(appointment);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Appointment>> {
        Ok(self.appointments.clone())
    }

    fn get(&self, position: usize) -> Result<Appointment> {
        self.appointments
            .get(position)
            .cloned()
            .ok_or_else(|| self.out_of_range(position))
    }

    fn replace(&mut self, position: usize, appointment: Appointment) -> Result<()> {
        if position >= self.appointments.len() {
            return Err(self.out_of_range(position));
        }
        self.appointments[position] = appointment;
        Ok(())
    }

    fn remove(&mut self, position: usize) -> Result<Appointment> {
        if position >= self.appointments.len() {
            return Err(self.out_of_range(position));
        }
        Ok(self.appointments.remove(position))
    }

    fn len(&self) -> usize {
        self.appointments.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Patient;
    use crate::slot::Slot;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Inserts directly, bypassing validation.
        pub fn with_appointment(
            mut self,
            name: &str,
            patient_id: &str,
            date: &str,
            time: &str,
        ) -> Self {
            let slot = Slot::parse(date, time).unwrap();
            let appointment = Appointment::new(Patient::new(name, 30, patient_id), slot);
            self.store.push(appointment).unwrap();
            self
        }

        /// `count` appointments on consecutive days of January 2099 at 10:00 AM.
        pub fn with_appointments(mut self, count: usize) -> Self {
            for i in 0..count {
                let date = format!("2099-01-{:02}", i + 1);
                self = self.with_appointment(
                    &format!("Patient {}", i + 1),
                    &format!("P{}", i + 1),
                    &date,
                    "10:00 AM",
                );
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let store = StoreFixture::new().with_appointments(3).store;
        let ids: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|a| a.patient.patient_id)
            .collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn remove_shifts_later_entries() {
        let mut store = StoreFixture::new().with_appointments(3).store;
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.patient.patient_id, "P2");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().patient.patient_id, "P3");
    }

    #[test]
    fn out_of_range_is_a_store_error() {
        let mut store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(matches!(store.get(0), Err(ClinicError::Store(_))));
        assert!(matches!(store.remove(0), Err(ClinicError::Store(_))));
    }
}
