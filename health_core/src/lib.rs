#![forbid(unsafe_code)]

//! Core domain model and business logic for HealthLog.
//!
//! This crate provides:
//! - Domain types (totals, thresholds, BMI readings, advice entries)
//! - Running-total accumulation
//! - Symptom advice lookup
//! - BMI calculation
//! - Daily tips, appointments and medical records selection
//! - The session object that ties them together

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod accumulator;
pub mod advice;
pub mod bmi;
pub mod tips;
pub mod appointment;
pub mod assets;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use accumulator::Accumulator;
pub use advice::{AdviceEngine, AdviceTable};
pub use tips::TipPicker;
pub use session::HealthSession;
