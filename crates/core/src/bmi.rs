//! Body-mass index: formula, weight classes, age advisories and the gauge
//! angle shown next to the result.

use crate::error::ToolkitError;
use serde::Serialize;
use std::fmt;

/// BMI at which the gauge shows a full circle, unless configured otherwise.
pub const DEFAULT_GAUGE_MAX_BMI: f64 = 40.0;

/// `weight_kg / height_m²`.
///
/// Fails with `ToolkitError::InvalidValue` if either input is not finite or
/// the height is not positive.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Result<f64, ToolkitError> {
    if !weight_kg.is_finite() {
        return Err(ToolkitError::InvalidValue(weight_kg.to_string()));
    }
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(ToolkitError::InvalidValue(height_m.to_string()));
    }
    Ok(weight_kg / (height_m * height_m))
}

/// Arc extent in degrees for a gauge spanning 0..`max_bmi`, clamped to a
/// full circle.
pub fn gauge_degrees(bmi: f64, max_bmi: f64) -> f64 {
    if max_bmi <= 0.0 || !bmi.is_finite() {
        return 0.0;
    }
    (bmi / max_bmi * 360.0).clamp(0.0, 360.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        // Upper bounds are exclusive and contiguous (25, 30). Bounds of 24.9
        // and 29.9 would leave 24.9..25 and 29.9..30 falling through to Obese.
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

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extra line shown for ages where BMI is a weaker indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgeAdvisory {
    Minor,
    Senior,
}

impl AgeAdvisory {
    pub fn for_age(age: u32) -> Option<Self> {
        match age {
            0..=17 => Some(AgeAdvisory::Minor),
            66..=u32::MAX => Some(AgeAdvisory::Senior),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AgeAdvisory::Minor => "Note: BMI may not apply to under 18.",
            AgeAdvisory::Senior => "Caution: BMI less accurate for seniors.",
        }
    }
}

/// A computed BMI together with its interpretation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReport {
    pub age: u32,
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: BmiCategory,
    pub advisory: Option<AgeAdvisory>,
}

impl BmiReport {
    pub fn new(age: u32, weight_kg: f64, height_m: f64) -> Result<Self, ToolkitError> {
        let bmi = calculate_bmi(weight_kg, height_m)?;
        Ok(Self {
            age,
            weight_kg,
            height_m,
            bmi,
            category: BmiCategory::classify(bmi),
            advisory: AgeAdvisory::for_age(age),
        })
    }

    /// Multi-line summary with the BMI rounded to `precision` places.
    pub fn describe(&self, precision: usize) -> String {
        let mut text = format!(
            "BMI: {:.*}\nCategory: {}",
            precision, self.bmi, self.category
        );
        if let Some(advisory) = self.advisory {
            text.push('\n');
            text.push_str(advisory.message());
        }
        text
    }
}

impl fmt::Display for BmiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(2))
    }
}
