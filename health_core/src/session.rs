//! Session state shared by all handlers.
//!
//! A `HealthSession` owns everything a user can change during one run of the
//! program. Front ends call its handlers and render the returned values; no
//! state lives in the presentation layer.

use crate::appointment;
use crate::assets::{self, Logo};
use crate::{
    Accumulator, AdviceEngine, Appointment, BmiReading, Config, HealthTotals, Result, Summary,
    TipPicker,
};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One user session (lives until the process exits)
#[derive(Debug)]
pub struct HealthSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    accumulator: Accumulator,
    advice: AdviceEngine,
    tips: TipPicker,
    doctors: Vec<String>,
    appointments: Vec<Appointment>,
    medical_records: Option<PathBuf>,
    logo: Option<Logo>,
}

impl HealthSession {
    /// Build a session from configuration
    pub fn new(config: &Config) -> Self {
        let logo = config
            .assets
            .logo_path
            .as_deref()
            .and_then(assets::load_logo);

        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            accumulator: Accumulator::new(config.thresholds.clone()),
            advice: AdviceEngine::new(config.advice.table(), config.advice.fallback.clone()),
            tips: TipPicker::new(config.tips.tips.clone(), config.tips.seed),
            doctors: config.appointments.doctors.clone(),
            appointments: Vec::new(),
            medical_records: None,
            logo,
        };

        tracing::info!("Started session {}", session.id);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn totals(&self) -> &HealthTotals {
        self.accumulator.totals()
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn doctors(&self) -> &[String] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn medical_records(&self) -> Option<&Path> {
        self.medical_records.as_deref()
    }

    pub fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    pub fn add_steps(&mut self, steps: u64) -> Result<u64> {
        self.accumulator.add_steps(steps)
    }

    pub fn add_water(&mut self, liters: f64) -> Result<f64> {
        self.accumulator.add_water(liters)
    }

    pub fn add_sleep(&mut self, hours: f64) -> Result<f64> {
        self.accumulator.add_sleep(hours)
    }

    pub fn summarize(&self) -> Summary {
        self.accumulator.summarize()
    }

    /// Advice for the given symptom text; blank text is rejected
    pub fn advise(&self, symptoms: &str) -> Result<Vec<String>> {
        self.advice.try_advise(symptoms)
    }

    pub fn calculate_bmi(&self, weight_kg: f64, height_cm: f64) -> Result<BmiReading> {
        crate::bmi::calculate(weight_kg, height_cm)
    }

    pub fn daily_tip(&mut self) -> Option<&str> {
        self.tips.next_tip()
    }

    /// Schedule an appointment and remember it
    pub fn schedule_appointment(&mut self, doctor: &str, date: &str) -> Result<&Appointment> {
        let appointment = appointment::schedule(doctor, date)?;
        let idx = self.appointments.len();
        self.appointments.push(appointment);
        Ok(&self.appointments[idx])
    }

    /// Remember a medical records file; an empty path leaves the current one
    pub fn attach_records(&mut self, path: &Path) -> Result<Option<&Path>> {
        match appointment::select_records(path)? {
            Some(path) => {
                tracing::info!("Attached medical records {:?}", path);
                self.medical_records = Some(path);
                Ok(self.medical_records.as_deref())
            }
            None => Ok(None),
        }
    }
}

impl Default for HealthSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
