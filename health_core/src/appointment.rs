//! Appointment scheduling and medical records selection.
//!
//! Both are echo-only: nothing is persisted, and a records file is never
//! opened or parsed.

use crate::{Appointment, Error, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Date pattern used by the appointment picker
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Suggested doctors when the config doesn't list any
pub fn default_doctors() -> Vec<String> {
    vec!["Dr. Smith".into(), "Dr. Johnson".into(), "Dr. Lee".into()]
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_string()))
}

/// Build an appointment from a doctor name and a date string
pub fn schedule(doctor: &str, date: &str) -> Result<Appointment> {
    let doctor = doctor.trim();
    if doctor.is_empty() {
        return Err(Error::InvalidInput("Please select a doctor.".into()));
    }

    let date = parse_date(date)?;

    let appointment = Appointment {
        id: Uuid::new_v4(),
        doctor: doctor.to_string(),
        date,
    };
    tracing::info!(
        "Scheduled appointment {} with {} on {}",
        appointment.id,
        appointment.doctor,
        appointment.date
    );
    Ok(appointment)
}

/// Validate a selected medical records path
///
/// An empty selection is a cancelled dialog and returns `Ok(None)`.
pub fn select_records(path: &Path) -> Result<Option<PathBuf>> {
    if path.as_os_str().is_empty() {
        tracing::debug!("Records selection cancelled");
        return Ok(None);
    }

    if !path.is_file() {
        return Err(Error::InvalidInput(format!(
            "No such file: {}",
            path.display()
        )));
    }

    Ok(Some(path.to_path_buf()))
}
