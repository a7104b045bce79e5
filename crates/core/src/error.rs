//! Error types for the deskkit core.

use thiserror::Error;

/// Errors produced by conversion, color and BMI operations.
#[derive(Debug, Error, PartialEq)]
pub enum ToolkitError {
    /// The category name is not one of the fixed conversion categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A unit name is not present in the category's factor table.
    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { unit: String, category: String },

    /// A numeric input was non-numeric or not finite.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A color channel value was outside [0, 255].
    #[error("{channel} channel value {value} out of range 0-255")]
    OutOfRange { channel: String, value: i64 },

    /// A settings document contained an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
