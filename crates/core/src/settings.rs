//! Display and startup settings, read from an optional JSON document.
//!
//! Missing keys and keys with the wrong JSON type fall back to defaults.
//! The only hard failure is an `initial_color` string that is not a valid
//! `"#rrggbb"` color.

use crate::bmi::DEFAULT_GAUGE_MAX_BMI;
use crate::color::Rgb;
use crate::error::ToolkitError;
use serde::Serialize;
use serde_json::Value;

/// Largest accepted decimal-place setting; an f64 carries 17 significant
/// digits.
pub const MAX_PRECISION: usize = 17;

/// Settings shared by every presentation of the toolkit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Decimal places for conversion results.
    pub precision: usize,
    /// Decimal places for BMI values.
    pub bmi_precision: usize,
    /// Color the picker starts with.
    pub initial_color: Rgb,
    /// BMI shown as a full gauge circle.
    pub gauge_max_bmi: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: 4,
            bmi_precision: 2,
            initial_color: Rgb::GRAY,
            gauge_max_bmi: DEFAULT_GAUGE_MAX_BMI,
        }
    }
}

impl Settings {
    /// Builds settings from a JSON object, keeping defaults for anything
    /// missing or mistyped.
    pub fn from_json(doc: &Value) -> Result<Self, ToolkitError> {
        let defaults = Settings::default();
        let initial_color = match doc.get("initial_color").and_then(Value::as_str) {
            Some(hex) => Rgb::from_hex(hex).ok_or_else(|| {
                ToolkitError::InvalidConfig(format!("initial_color {hex:?} is not #rrggbb"))
            })?,
            None => defaults.initial_color,
        };
        let gauge_max_bmi = setting_f64(doc, "gauge_max_bmi", defaults.gauge_max_bmi);
        if gauge_max_bmi <= 0.0 {
            return Err(ToolkitError::InvalidConfig(format!(
                "gauge_max_bmi must be positive, got {gauge_max_bmi}"
            )));
        }
        Ok(Self {
            precision: setting_usize(doc, "precision", defaults.precision).min(MAX_PRECISION),
            bmi_precision: setting_usize(doc, "bmi_precision", defaults.bmi_precision)
                .min(MAX_PRECISION),
            initial_color,
            gauge_max_bmi,
        })
    }

    /// Parses a JSON settings document from text.
    pub fn from_json_str(text: &str) -> Result<Self, ToolkitError> {
        let doc: Value = serde_json::from_str(text)
            .map_err(|e| ToolkitError::InvalidConfig(format!("settings are not JSON: {e}")))?;
        Self::from_json(&doc)
    }
}

fn setting_f64(doc: &Value, name: &str, default: f64) -> f64 {
    doc.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Only non-negative integers count; floats and negatives fall back.
fn setting_usize(doc: &Value, name: &str, default: usize) -> usize {
    doc.get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}
