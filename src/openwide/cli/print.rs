use colored::Colorize;
use openwide::api::{CmdMessage, ListedAppointment, MessageLevel};
use openwide::config::ClinicConfig;
use openwide::error::ClinicError;
use openwide::model::Appointment;
use openwide::slot::{format_date, format_time};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const RULE_WIDTH: usize = 72;
const NAME_WIDTH: usize = 24;
const SEPARATOR: &str = "-----------------------";

pub(super) fn print_banner<W: Write>(out: &mut W, config: &ClinicConfig) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{}",
        center(&format!("WELCOME TO {}", config.clinic_name), RULE_WIDTH).bold()
    )?;
    writeln!(out, "{}", center(&config.tagline, RULE_WIDTH).dimmed())?;
    writeln!(out, "{}", rule)
}

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "1. Add Appointment")?;
    writeln!(out, "2. Cancel Appointment")?;
    writeln!(out, "3. View Appointments")?;
    writeln!(out, "4. Update Appointment")?;
    writeln!(out, "5. Search Appointments by Date")?;
    writeln!(out, "6. Exit")?;
    writeln!(out)
}

pub(super) fn print_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("***** {} *****", title).bold())?;
    writeln!(out)
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &ClinicError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

/// One line per appointment, numbered by registry position.
pub(super) fn print_appointments<W: Write>(
    out: &mut W,
    appointments: &[ListedAppointment],
) -> io::Result<()> {
    if appointments.is_empty() {
        return Ok(());
    }

    let heading = format!(
        "  {:>3}  {:<10}  {:<8}  {}  {:>3}  {}",
        "No.",
        "Date",
        "Time",
        pad_to_width("Patient", NAME_WIDTH),
        "Age",
        "Patient ID"
    );
    writeln!(out, "{}", heading.dimmed())?;

    for listed in appointments {
        let a = &listed.appointment;
        let name = truncate_to_width(&a.patient.name, NAME_WIDTH);
        writeln!(
            out,
            "  {}  {}  {}  {}  {:>3}  {}",
            format!("{:>3}", format!("{}.", listed.number)).yellow(),
            format_date(a.slot.date),
            format_time(a.slot.time),
            pad_to_width(&name, NAME_WIDTH),
            a.patient.age,
            a.patient.patient_id
        )?;
    }
    Ok(())
}

pub(super) fn print_details<W: Write>(out: &mut W, appointment: &Appointment) -> io::Result<()> {
    writeln!(out, "{}", "PATIENT DETAILS".bold())?;
    writeln!(out, "Name: {}", appointment.patient.name)?;
    writeln!(out, "Age: {}", appointment.patient.age)?;
    writeln!(out, "Patient ID: {}", appointment.patient.patient_id)?;
    writeln!(out, "Date: {}", format_date(appointment.slot.date))?;
    writeln!(out, "Time: {}", format_time(appointment.slot.time))?;
    writeln!(out, "{}", SEPARATOR)
}

fn center(s: &str, width: usize) -> String {
    let margin = width.saturating_sub(s.width()) / 2;
    format!("{}{}", " ".repeat(margin), s)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
