//! # Appointment Slots
//!
//! A [`Slot`] is the (date, time) pair an appointment occupies. Two appointments
//! conflict exactly when their slots are equal.
//!
//! ## Accepted Input
//!
//! - Dates: `YYYY-MM-DD`, four-digit year, two-digit month and day, and the
//!   result must be a real calendar date (`2099-02-30` is rejected).
//! - Times: `HH:MM AM` or `HH:MM PM`. The hour may have one or two digits and
//!   ranges over `0`–`23`; the minute is always two digits.
//!
//! ## Hour Normalization
//!
//! | input hour | AM        | PM        |
//! |------------|-----------|-----------|
//! | `0`        | `00`      | `12`      |
//! | `1`–`11`   | unchanged | `+12`     |
//! | `12`       | `00`      | `12`      |
//! | `13`–`23`  | unchanged | unchanged |
//!
//! Slots are stored as typed `chrono` values, so `9:00 AM` and `09:00 AM`
//! are the same slot. Rendering always uses the canonical `hh:mm AM` form.

use crate::error::{ClinicError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_DISPLAY_FORMAT: &str = "%I:%M %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Slot {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parses both halves, date first, so a bad date is reported before a bad time.
    pub fn parse(date: &str, time: &str) -> Result<Self> {
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        Ok(Self::new(date, time))
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// True when the slot starts strictly after `now`.
    pub fn is_after(&self, now: NaiveDateTime) -> bool {
        self.starts_at() > now
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_date(self.date), format_time(self.time))
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if !has_date_shape(input) {
        return Err(ClinicError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ClinicError::InvalidDate(input.to_string()))
}

pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let invalid = || ClinicError::InvalidTime(input.to_string());

    let (clock, designator) = input.split_once(' ').ok_or_else(invalid)?;
    let is_pm = match designator {
        "AM" => false,
        "PM" => true,
        _ => return Err(invalid()),
    };

    let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
    if hour.is_empty() || hour.len() > 2 || !all_digits(hour) {
        return Err(invalid());
    }
    if minute.len() != 2 || !all_digits(minute) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (0..=11, true) => hour + 12,
        _ => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_DISPLAY_FORMAT).to_string()
}

fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
