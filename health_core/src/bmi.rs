//! Body mass index calculation.

use crate::{BmiCategory, BmiReading, Error, Result};

/// Compute BMI from weight in kilograms and height in centimeters
///
/// Fails with `InvalidInput` when either value is not a positive finite number.
pub fn calculate(weight_kg: f64, height_cm: f64) -> Result<BmiReading> {
    if !(weight_kg.is_finite() && weight_kg > 0.0) || !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(Error::InvalidInput(
            "Please enter valid weight and height values.".into(),
        ));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(Error::InvalidInput(
            "Please enter valid weight and height values.".into(),
        ));
    }
    let category = BmiCategory::from_bmi(bmi);

    tracing::debug!("BMI {:.2} ({:?})", bmi, category);

    Ok(BmiReading { bmi, category })
}
