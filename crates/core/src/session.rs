//! Per-run state shared by a presentation layer.
//!
//! A [`Session`] owns everything that changes while the program runs: the
//! conversion history, the picker color and palette, and the random
//! generator behind "random color". Nothing here outlives the process.

use crate::bmi::{gauge_degrees, BmiReport};
use crate::color::ColorModel;
use crate::error::ToolkitError;
use crate::history::{ConversionEngine, ConversionRecord};
use crate::prng::Xorshift64;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    converter: ConversionEngine,
    color: ColorModel,
    rng: Xorshift64,
}

impl Session {
    /// Creates a session whose generator is seeded from the OS RNG.
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, Xorshift64::from_os_seed())
    }

    /// Creates a session that draws random colors from `rng`.
    pub fn with_rng(settings: Settings, rng: Xorshift64) -> Self {
        Self {
            color: ColorModel::new(settings.initial_color),
            converter: ConversionEngine::new(),
            settings,
            rng,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn converter(&self) -> &ConversionEngine {
        &self.converter
    }

    pub fn color(&self) -> &ColorModel {
        &self.color
    }

    pub fn color_mut(&mut self) -> &mut ColorModel {
        &mut self.color
    }

    /// Parses `value_text`, converts it and records the result.
    pub fn convert(
        &mut self,
        value_text: &str,
        from: &str,
        to: &str,
        category: &str,
    ) -> Result<ConversionRecord, ToolkitError> {
        let value = crate::convert::parse_value(value_text)?;
        self.converter.convert_and_record(value, from, to, category)
    }

    /// Formats a record with the configured precision.
    pub fn describe(&self, record: &ConversionRecord) -> String {
        record.describe(self.settings.precision)
    }

    /// Randomizes the picker color and returns the new hex string.
    pub fn randomize_color(&mut self) -> String {
        self.color.randomize(&mut self.rng);
        self.color.to_hex()
    }

    /// Computes a BMI report and the matching gauge extent in degrees.
    pub fn bmi(
        &self,
        age: u32,
        weight_kg: f64,
        height_m: f64,
    ) -> Result<(BmiReport, f64), ToolkitError> {
        let report = BmiReport::new(age, weight_kg, height_m)?;
        let degrees = gauge_degrees(report.bmi, self.settings.gauge_max_bmi);
        Ok((report, degrees))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Channel, Rgb};

    fn seeded() -> Session {
        Session::with_rng(Settings::default(), Xorshift64::new(42))
    }

    #[test]
    fn starts_from_configured_color() {
        let settings = Settings {
            initial_color: Rgb::new(1, 2, 3),
            ..Settings::default()
        };
        let session = Session::with_rng(settings, Xorshift64::new(1));
        assert_eq!(session.color().to_hex(), "#010203");
        assert!(session.color().palette().is_empty());
        assert!(session.converter().history().is_empty());
    }

    #[test]
    fn convert_parses_and_records() {
        let mut session = seeded();
        let record = session.convert("1", "Meter", "Kilometer", "Length").unwrap();
        assert_eq!(session.describe(&record), "1.0 Meter = 0.0010 Kilometer");
        assert_eq!(session.converter().history().len(), 1);
    }

    #[test]
    fn convert_rejects_non_numeric_text_without_recording() {
        let mut session = seeded();
        let result = session.convert("abc", "Meter", "Kilometer", "Length");
        assert_eq!(result, Err(ToolkitError::InvalidValue("abc".into())));
        assert!(session.converter().history().is_empty());
    }

    #[test]
    fn describe_honors_precision_setting() {
        let settings = Settings {
            precision: 1,
            ..Settings::default()
        };
        let mut session = Session::with_rng(settings, Xorshift64::new(1));
        let record = session
            .convert("0", "Celsius", "Fahrenheit", "Temperature")
            .unwrap();
        assert_eq!(session.describe(&record), "0.0 Celsius = 32.0 Fahrenheit");
    }

    #[test]
    fn randomize_color_returns_current_hex() {
        let mut session = seeded();
        let hex = session.randomize_color();
        assert_eq!(hex, session.color().to_hex());
    }

    #[test]
    fn color_edits_flow_into_palette() {
        let mut session = seeded();
        session.color_mut().set_channel(Channel::Red, 0).unwrap();
        session.color_mut().save_to_palette();
        session.color_mut().set_from_hex("#ffffff");
        session.color_mut().save_to_palette();
        let saved: Vec<&str> = session.color().palette().iter().collect();
        assert_eq!(saved, vec!["#008080", "#ffffff"]);
    }

    #[test]
    fn bmi_uses_configured_gauge() {
        let settings = Settings {
            gauge_max_bmi: 20.0,
            ..Settings::default()
        };
        let session = Session::with_rng(settings, Xorshift64::new(1));
        let (report, degrees) = session.bmi(40, 40.0, 2.0).unwrap();
        assert_eq!(report.bmi, 10.0);
        assert_eq!(degrees, 180.0);
    }
}
