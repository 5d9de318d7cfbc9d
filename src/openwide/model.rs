use crate::slot::Slot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub age: u32,
    // Clinic-assigned; nothing enforces uniqueness
    pub patient_id: String,
}

impl Patient {
    pub fn new(name: impl Into<String>, age: u32, patient_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            patient_id: patient_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub patient: Patient,
    pub slot: Slot,
}

impl Appointment {
    pub fn new(patient: Patient, slot: Slot) -> Self {
        Self { patient, slot }
    }

    pub fn belongs_to(&self, patient_id: &str) -> bool {
        self.patient.patient_id == patient_id
    }
}

/// An appointment paired with its 1-based position in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedAppointment {
    pub number: usize,
    pub appointment: Appointment,
}
