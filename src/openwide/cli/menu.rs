//! The interactive menu loop.
//!
//! [`Session`] is generic over its input and output so the whole dialogue can
//! be driven from a byte buffer in tests. Every prompt reads one line; end of
//! input at any prompt abandons the current operation, and end of input at the
//! menu prompt ends the session as if Exit had been chosen.
//!
//! An operation reads all of its prompts before validating any of them, so a
//! bad field never leaves later answers to be read as menu choices.

use super::print::{
    print_appointments, print_banner, print_details, print_error, print_header, print_menu,
    print_messages,
};
use super::setup::MenuChoice;
use openwide::api::{AppointmentUpdate, ClinicApi, CmdResult, NewAppointment};
use openwide::clock::Clock;
use openwide::config::ClinicConfig;
use openwide::error::{ClinicError, Result};
use openwide::store::AppointmentStore;
use std::io::{BufRead, Write};
use tracing::debug;

const AGE_SENTINEL: &str = "-1";

pub struct Session<S: AppointmentStore, C: Clock, R: BufRead, W: Write> {
    api: ClinicApi<S, C>,
    config: ClinicConfig,
    input: R,
    out: W,
}

impl<S: AppointmentStore, C: Clock, R: BufRead, W: Write> Session<S, C, R, W> {
    pub fn new(api: ClinicApi<S, C>, config: ClinicConfig, input: R, out: W) -> Self {
        Self {
            api,
            config,
            input,
            out,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.config.show_banner {
                print_banner(&mut self.out, &self.config)?;
            }
            print_menu(&mut self.out)?;

            let Some(line) = self.prompt("Enter your choice: ")? else {
                debug!("end of input at menu");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => {
                    debug!(?choice, "menu");
                    self.dispatch(choice)?;
                }
                None => writeln!(self.out, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.out, "Exiting the system. Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Add => self.handle_add(),
            MenuChoice::Cancel => self.handle_cancel(),
            MenuChoice::View => self.handle_view(),
            MenuChoice::Update => self.handle_update(),
            MenuChoice::Search => self.handle_search(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn handle_add(&mut self) -> Result<()> {
        print_header(&mut self.out, "ADD APPOINTMENT")?;

        let Some(name) = self.prompt("Enter Patient Name: ")? else {
            return Ok(());
        };
        let Some(age) = self.prompt("Enter Patient Age: ")? else {
            return Ok(());
        };
        let Some(patient_id) = self.prompt("Enter Patient ID: ")? else {
            return Ok(());
        };
        let Some(date) = self.prompt("Enter Appointment Date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(time) = self.prompt("Enter Appointment Time (HH:MM AM/PM): ")? else {
            return Ok(());
        };

        let age = match parse_age(&age) {
            Ok(age) => age,
            Err(e) => return self.report(Err(e)),
        };

        let request = NewAppointment::new(name, age, patient_id, date, time);
        let outcome = self.api.add_appointment(request);
        self.report(outcome)
    }

    fn handle_cancel(&mut self) -> Result<()> {
        print_header(&mut self.out, "CANCEL APPOINTMENT")?;
        if !self.show_current()? {
            return Ok(());
        }

        let Some(patient_id) =
            self.prompt("Enter Patient ID of the appointment you want to cancel: ")?
        else {
            return Ok(());
        };
        let outcome = self.api.cancel_appointment(&patient_id);
        self.report(outcome)
    }

    fn handle_view(&mut self) -> Result<()> {
        print_header(&mut self.out, "VIEW ALL APPOINTMENTS")?;
        let outcome = self.api.list_appointments();
        self.report(outcome)
    }

    fn handle_update(&mut self) -> Result<()> {
        print_header(&mut self.out, "UPDATE APPOINTMENT")?;
        if !self.show_current()? {
            return Ok(());
        }

        let Some(patient_id) =
            self.prompt("Enter Patient ID of the appointment you want to update: ")?
        else {
            return Ok(());
        };
        let existing = match self.api.find_appointment(&patient_id) {
            Ok(existing) => existing,
            Err(e) => return self.report(Err(e)),
        };

        writeln!(self.out, "Existing Appointment Details:")?;
        writeln!(self.out)?;
        print_details(&mut self.out, &existing.appointment)?;
        writeln!(
            self.out,
            "Leave a field blank to keep its current value (or enter -1 for the age)."
        )?;

        let Some(name) = self.prompt("Enter Updated Name: ")? else {
            return Ok(());
        };
        let Some(age) = self.prompt("Enter Updated Age: ")? else {
            return Ok(());
        };
        let Some(new_id) = self.prompt("Enter Updated Patient ID: ")? else {
            return Ok(());
        };
        let Some(date) = self.prompt("Enter New Appointment Date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(time) = self.prompt("Enter New Appointment Time (HH:MM AM/PM): ")? else {
            return Ok(());
        };

        let age = match parse_updated_age(age) {
            Ok(age) => age,
            Err(e) => return self.report(Err(e)),
        };
        let update = AppointmentUpdate {
            name: non_blank(name),
            age,
            patient_id: non_blank(new_id),
            date: non_blank(date),
            time: non_blank(time),
        };
        let outcome = self.api.update_appointment(&patient_id, update);
        self.report(outcome)
    }

    fn handle_search(&mut self) -> Result<()> {
        print_header(&mut self.out, "SEARCH APPOINTMENTS BY DATE")?;

        let Some(date) = self.prompt("Enter Date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let outcome = self.api.search_by_date(&date);
        if outcome.is_ok() {
            writeln!(self.out)?;
            writeln!(self.out, "Appointments for {}:", date)?;
        }
        self.report(outcome)
    }

    /// Prints the numbered registry. Returns false (after saying so) when it is empty.
    fn show_current(&mut self) -> Result<bool> {
        if self.api.is_empty() {
            writeln!(self.out, "No appointments available.")?;
            return Ok(false);
        }
        writeln!(self.out, "Current Appointments")?;
        writeln!(self.out)?;
        let current = self.api.list_appointments()?;
        print_appointments(&mut self.out, &current.listed_appointments)?;
        writeln!(self.out)?;
        Ok(true)
    }

    /// Prints an operation's outcome. Validation failures are shown to the
    /// operator and the session carries on; only I/O failures propagate.
    fn report(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => {
                print_appointments(&mut self.out, &result.listed_appointments)?;
                print_messages(&mut self.out, &result.messages)?;
            }
            Err(ClinicError::Io(e)) => return Err(ClinicError::Io(e)),
            Err(e) => print_error(&mut self.out, &e)?,
        }
        Ok(())
    }

    /// Reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn parse_age(input: &str) -> Result<u32> {
    input
        .parse()
        .map_err(|_| ClinicError::InvalidAge(input.to_string()))
}

/// Blank input or the `-1` sentinel keeps the current age.
fn parse_updated_age(input: String) -> Result<Option<u32>> {
    match non_blank(input) {
        Some(age) if age == AGE_SENTINEL => Ok(None),
        Some(age) => parse_age(&age).map(Some),
        None => Ok(None),
    }
}

fn non_blank(input: String) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use openwide::clock::FixedClock;
    use openwide::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        colored::control::set_override(false);
        let now = NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        let api = ClinicApi::new(InMemoryStore::new(), FixedClock(now));
        let config = ClinicConfig {
            show_banner: false,
            ..ClinicConfig::default()
        };
        let mut output = Vec::new();
        Session::new(api, config, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    const ADD_SAM: &str = "1\nSam\n30\nP1\n2099-01-01\n10:00 AM\n";

    #[test]
    fn exit_says_goodbye() {
        let out = run_session("6\n");
        assert!(out.contains("1. Add Appointment"));
        assert!(out.ends_with("Exiting the system. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let out = run_session("");
        assert!(out.contains("Exiting the system. Goodbye!"));
    }

    #[test]
    fn invalid_choices_redisplay_the_menu() {
        let out = run_session("9\nabc\n6\n");
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(out.matches("6. Exit").count(), 3);
    }

    #[test]
    fn add_then_view() {
        let out = run_session(&format!("{ADD_SAM}3\n6\n"));
        assert!(out.contains("Appointment added successfully!"));
        assert!(out.contains("2099-01-01  10:00 AM  Sam"));
        assert!(out.contains("P1"));
    }

    #[test]
    fn conflicting_add_is_reported() {
        let script = format!("{ADD_SAM}1\nAlex\n41\nP2\n2099-01-01\n10:00 AM\n3\n6\n");
        let out = run_session(&script);
        assert!(out.contains("Conflict: Another appointment is scheduled at 2099-01-01 10:00 AM."));
        assert!(!out.contains("Alex"));
    }

    #[test]
    fn invalid_age_aborts_add() {
        let out = run_session("1\nSam\nthirty\nP1\n2099-01-01\n10:00 AM\n3\n6\n");
        assert!(out.contains("Invalid age: 'thirty'"));
        assert!(out.contains("No appointments available."));
    }

    #[test]
    fn past_dates_are_rejected() {
        let out = run_session("1\nSam\n30\nP1\n2000-01-01\n10:00 AM\n6\n");
        assert!(out.contains("Cannot schedule an appointment in the past."));
    }

    #[test]
    fn cancel_on_empty_registry_skips_the_prompt() {
        let out = run_session("2\n6\n");
        assert!(out.contains("No appointments available."));
        assert!(!out.contains("Enter Patient ID of the appointment"));
    }

    #[test]
    fn cancel_by_patient_id() {
        let out = run_session(&format!("{ADD_SAM}2\nP1\n3\n6\n"));
        assert!(out.contains("Appointment canceled successfully!"));
        assert!(out.ends_with(
            "No appointments available.\n\n1. Add Appointment\n2. Cancel Appointment\n\
             3. View Appointments\n4. Update Appointment\n5. Search Appointments by Date\n\
             6. Exit\n\nEnter your choice: Exiting the system. Goodbye!\n"
        ));
    }

    #[test]
    fn cancel_unknown_patient() {
        let out = run_session(&format!("{ADD_SAM}2\nP404\n6\n"));
        assert!(out.contains("No appointment found with the given Patient ID: P404"));
    }

    #[test]
    fn update_with_blank_fields_keeps_them() {
        let script = format!("{ADD_SAM}4\nP1\nSamuel\n\n\n\n11:30 AM\n3\n6\n");
        let out = run_session(&script);
        assert!(out.contains("Existing Appointment Details:"));
        assert!(out.contains("Name: Sam\n"));
        assert!(out.contains("Appointment updated successfully!"));
        assert!(out.contains("2099-01-01  11:30 AM  Samuel"));
    }

    #[test]
    fn invalid_age_still_consumes_remaining_answers() {
        // A patient ID of 6 must not be taken as the Exit choice
        let out = run_session("1\nSam\nthirty\n6\n2099-01-01\n10:00 AM\n3\n6\n");
        assert!(out.contains("Invalid age: 'thirty'"));
        assert!(out.contains("No appointments available."));
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 0);
    }

    #[test]
    fn update_age_sentinel_keeps_age() {
        let script = format!("{ADD_SAM}4\nP1\nSamuel\n-1\n\n\n\n3\n6\n");
        let out = run_session(&script);
        assert!(out.contains("Appointment updated successfully!"));
        let row = out
            .lines()
            .find(|line| line.contains("Samuel"))
            .unwrap();
        assert!(row.contains("2099-01-01  10:00 AM"));
        assert!(row.ends_with(" 30  P1"));
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 0);
    }

    #[test]
    fn update_with_non_numeric_age_is_rejected() {
        let script = format!("{ADD_SAM}4\nP1\nSamuel\nold\nP2\n\n\n3\n6\n");
        let out = run_session(&script);
        assert!(out.contains("Invalid age: 'old'"));
        assert!(!out.contains("Appointment updated successfully!"));
        assert!(!out.contains("Samuel"));
        assert!(!out.contains("P2"));
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 0);
    }

    #[test]
    fn failed_update_reports_and_keeps_original() {
        let script = format!("{ADD_SAM}4\nP1\nSamuel\n31\nP7\n2000-01-01\n\n3\n6\n");
        let out = run_session(&script);
        assert!(out.contains("Cannot schedule an appointment in the past."));
        assert!(out.contains("2099-01-01  10:00 AM  Sam "));
        assert!(!out.contains("Samuel"));
    }

    #[test]
    fn search_by_date() {
        let script = format!(
            "{ADD_SAM}1\nAlex\n41\nP2\n2099-01-02\n10:00 AM\n5\n2099-01-02\n5\n2099-05-05\n5\nsoon\n6\n"
        );
        let out = run_session(&script);
        assert!(out.contains("Appointments for 2099-01-02:"));
        assert!(out.contains("2099-01-02  10:00 AM  Alex"));
        assert!(out.contains("No appointments found for the given date."));
        assert!(out.contains("Invalid date format. Please use YYYY-MM-DD. (got 'soon')"));
    }
}
