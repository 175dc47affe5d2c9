//! Core domain types for HealthLog.
//!
//! This module defines the fundamental types used throughout the system:
//! - Running totals and recommended thresholds
//! - Summary snapshots
//! - BMI categories and readings
//! - Symptom advice entries
//! - Appointments

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Totals and Thresholds
// ============================================================================

/// Cumulative amounts logged during a session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthTotals {
    pub steps: u64,
    pub water_liters: f64,
    pub sleep_hours: f64,
}

/// Recommended daily amounts each total is compared against
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_steps")]
    pub steps: u64,

    #[serde(default = "default_water_liters")]
    pub water_liters: f64,

    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            water_liters: default_water_liters(),
            sleep_hours: default_sleep_hours(),
        }
    }
}

fn default_steps() -> u64 {
    10_000
}

fn default_water_liters() -> f64 {
    2.0
}

fn default_sleep_hours() -> f64 {
    8.0
}

/// Totals compared against thresholds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub steps: u64,
    pub water: f64,
    pub sleep: f64,
    pub meets_steps: bool,
    pub meets_water: bool,
    pub meets_sleep: bool,
}

// ============================================================================
// BMI Types
// ============================================================================

/// Body mass index bucket
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value using half-open intervals at 18.5, 25.0 and 30.0
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Human-readable label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a BMI calculation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

// ============================================================================
// Advice Types
// ============================================================================

/// One row of the symptom advice table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceEntry {
    pub keyword: String,
    pub advice: String,
}

impl AdviceEntry {
    pub fn new(keyword: impl Into<String>, advice: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            advice: advice.into(),
        }
    }
}

// ============================================================================
// Appointment Types
// ============================================================================

/// A scheduled doctor's appointment (echoed back only, never persisted)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor: String,
    pub date: NaiveDate,
}
