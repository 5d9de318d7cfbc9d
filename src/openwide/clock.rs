use chrono::{Local, NaiveDateTime};

/// Source of the current wall-clock time, used to reject appointments in the past.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local time. Appointment slots carry no timezone, so they are
/// compared against local time as the operator sees it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
