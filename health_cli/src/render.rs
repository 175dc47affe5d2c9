//! Text rendering for session results.

use health_core::{Appointment, BmiReading, HealthSession, Summary, Thresholds};
use std::path::Path;

fn mark(met: bool) -> &'static str {
    if met {
        "✓"
    } else {
        "✗"
    }
}

/// Two decimals, unless rounding would make a total look equal to its target
fn amounts(value: f64, target: f64) -> (String, String) {
    let shown = format!("{:.2}", value);
    let target_shown = format!("{:.2}", target);
    if shown == target_shown && value != target {
        (value.to_string(), target.to_string())
    } else {
        (shown, target_shown)
    }
}

pub fn banner(session: &HealthSession) -> String {
    let mut out = format!(
        "HealthLog session started {} ({})",
        session.started_at().format("%Y-%m-%d %H:%M UTC"),
        session.id()
    );
    if let Some(logo) = session.logo() {
        out.push_str(&format!(
            "\nLogo: {} ({} bytes)",
            logo.path.display(),
            logo.bytes.len()
        ));
    }
    out
}

pub fn steps_added(added: u64, total: u64) -> String {
    format!("Added {} steps. Total steps: {}", added, total)
}

pub fn water_added(added: f64, total: f64) -> String {
    format!(
        "Added {:.2} liters of water. Total water: {:.2} liters",
        added, total
    )
}

pub fn sleep_added(added: f64, total: f64) -> String {
    format!(
        "Added {:.2} hours of sleep. Total sleep: {:.2} hours",
        added, total
    )
}

pub fn summary(summary: &Summary, thresholds: &Thresholds) -> String {
    let (water, water_target) = amounts(summary.water, thresholds.water_liters);
    let (sleep, sleep_target) = amounts(summary.sleep, thresholds.sleep_hours);
    format!(
        "Total steps: {} (Recommended: {}) [{}]\n\
         Total water intake: {} liters (Recommended: {} liters) [{}]\n\
         Total sleep: {} hours (Recommended: {} hours) [{}]",
        summary.steps,
        thresholds.steps,
        mark(summary.meets_steps),
        water,
        water_target,
        mark(summary.meets_water),
        sleep,
        sleep_target,
        mark(summary.meets_sleep),
    )
}

pub fn advice(advice: &[String]) -> String {
    advice.join("\n")
}

pub fn bmi(reading: &BmiReading) -> String {
    format!(
        "Your BMI is: {:.2}\nCategory: {}",
        reading.bmi, reading.category
    )
}

pub fn tip(tip: Option<&str>) -> String {
    match tip {
        Some(tip) => format!("Health Tip: {}", tip),
        None => "No health tips configured.".to_string(),
    }
}

pub fn appointment(appointment: &Appointment) -> String {
    format!(
        "Appointment with {} on {}.",
        appointment.doctor,
        appointment.date.format(health_core::appointment::DATE_FORMAT)
    )
}

pub fn records(path: &Path) -> String {
    format!("Uploaded medical records from {}.", path.display())
}

pub fn doctors(doctors: &[String]) -> String {
    if doctors.is_empty() {
        return "No doctors configured.".to_string();
    }
    let mut out = String::from("Doctors:");
    for doctor in doctors {
        out.push_str("\n  - ");
        out.push_str(doctor);
    }
    out
}

pub fn warning(message: impl std::fmt::Display) -> String {
    format!("⚠ {}", message)
}
