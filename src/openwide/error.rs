use crate::slot::Slot;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Invalid date format. Please use YYYY-MM-DD. (got '{0}')")]
    InvalidDate(String),

    #[error("Invalid time format. Please use HH:MM AM/PM. (got '{0}')")]
    InvalidTime(String),

    #[error("Invalid age: '{0}'. Please enter a whole number.")]
    InvalidAge(String),

    #[error("Cannot schedule an appointment in the past.")]
    PastDateTime,

    #[error("Conflict: Another appointment is scheduled at {slot}.")]
    Conflict { slot: Slot },

    #[error("No appointment found with the given Patient ID: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClinicError>;
