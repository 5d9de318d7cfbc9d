use crate::model::{Appointment, ListedAppointment};

pub mod add;
pub mod cancel;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_appointments: Vec<Appointment>,
    pub listed_appointments: Vec<ListedAppointment>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_appointments(mut self, appointments: Vec<Appointment>) -> Self {
        self.affected_appointments = appointments;
        self
    }

    pub fn with_listed_appointments(mut self, appointments: Vec<ListedAppointment>) -> Self {
        self.listed_appointments = appointments;
        self
    }
}

/// Raw operator input for a new appointment. Date and time are validated by `add`.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub name: String,
    pub age: u32,
    pub patient_id: String,
    pub date: String,
    pub time: String,
}

impl NewAppointment {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        patient_id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            patient_id: patient_id.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}

/// Field changes for an existing appointment. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct AppointmentUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub patient_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl AppointmentUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.patient_id.is_none()
            && self.date.is_none()
            && self.time.is_none()
    }

    pub fn touches_slot(&self) -> bool {
        self.date.is_some() || self.time.is_some()
    }
}
