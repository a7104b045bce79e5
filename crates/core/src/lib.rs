#![deny(unsafe_code)]
//! Core logic for deskkit, a small desktop utility toolkit.
//!
//! Provides the unit conversion tables and functions (`convert`), the
//! conversion `History`, the RGB `ColorModel` with its saved `Palette`, BMI
//! arithmetic, a `Xorshift64` PRNG for random colors, `Settings`, and the
//! `Session` that ties the mutable pieces together for one run.

pub mod bmi;
pub mod color;
pub mod convert;
pub mod error;
pub mod history;
pub mod palette;
pub mod prng;
pub mod session;
pub mod settings;

pub use bmi::{AgeAdvisory, BmiCategory, BmiReport};
pub use color::{Channel, ColorModel, Rgb};
pub use convert::{convert, list_categories, parse_value, units_for, Category, Scale};
pub use error::ToolkitError;
pub use history::{ConversionEngine, ConversionRecord, History};
pub use palette::Palette;
pub use prng::Xorshift64;
pub use session::Session;
pub use settings::Settings;
