//! Running totals for steps, water and sleep.
//!
//! Amounts are only ever added. Negative or non-finite amounts are rejected
//! before touching the totals, so each field stays equal to the sum of the
//! amounts accepted so far.

use crate::{Error, HealthTotals, Result, Summary, Thresholds};

/// Accumulates logged amounts and compares them against thresholds
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    totals: HealthTotals,
    thresholds: Thresholds,
}

impl Accumulator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            totals: HealthTotals::default(),
            thresholds,
        }
    }

    pub fn totals(&self) -> &HealthTotals {
        &self.totals
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Add steps and return the new total
    pub fn add_steps(&mut self, steps: u64) -> Result<u64> {
        let total = self.totals.steps.checked_add(steps).ok_or_else(|| {
            Error::InvalidInput(format!("adding {} steps would overflow the total", steps))
        })?;
        self.totals.steps = total;
        tracing::debug!("Added {} steps, total {}", steps, total);
        Ok(total)
    }

    /// Add liters of water and return the new total
    pub fn add_water(&mut self, liters: f64) -> Result<f64> {
        check_amount("water", liters)?;
        self.totals.water_liters = checked_total("water", self.totals.water_liters, liters)?;
        tracing::debug!(
            "Added {} liters of water, total {}",
            liters,
            self.totals.water_liters
        );
        Ok(self.totals.water_liters)
    }

    /// Add hours of sleep and return the new total
    pub fn add_sleep(&mut self, hours: f64) -> Result<f64> {
        check_amount("sleep", hours)?;
        self.totals.sleep_hours = checked_total("sleep", self.totals.sleep_hours, hours)?;
        tracing::debug!(
            "Added {} hours of sleep, total {}",
            hours,
            self.totals.sleep_hours
        );
        Ok(self.totals.sleep_hours)
    }

    /// Snapshot the totals and whether each meets its recommendation
    pub fn summarize(&self) -> Summary {
        Summary {
            steps: self.totals.steps,
            water: self.totals.water_liters,
            sleep: self.totals.sleep_hours,
            meets_steps: self.totals.steps >= self.thresholds.steps,
            meets_water: self.totals.water_liters >= self.thresholds.water_liters,
            meets_sleep: self.totals.sleep_hours >= self.thresholds.sleep_hours,
        }
    }
}

fn checked_total(what: &str, total: f64, amount: f64) -> Result<f64> {
    let total = total + amount;
    if !total.is_finite() {
        return Err(Error::InvalidInput(format!(
            "adding {} {} would overflow the total",
            amount, what
        )));
    }
    Ok(total)
}

fn check_amount(what: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(Error::InvalidInput(format!(
            "{} amount must be a finite number",
            what
        )));
    }
    if amount < 0.0 {
        tracing::warn!("Rejected negative {} amount {}", what, amount);
        return Err(Error::InvalidInput(format!(
            "{} amount cannot be negative",
            what
        )));
    }
    Ok(())
}
