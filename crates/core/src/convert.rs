//! Unit conversion tables and the conversion functions built on them.
//!
//! Each [`Category`] maps to a [`Scale`]: either a linear factor table
//! (every unit expressed as a multiple of the category's base unit) or the
//! piecewise temperature formulas. All functions here are pure.

use crate::error::ToolkitError;

/// All category names, in display order.
const CATEGORY_NAMES: &[&str] = &["Length", "Weight", "Temperature", "Time"];

const LENGTH_UNITS: &[&str] = &["Meter", "Kilometer", "Feet", "Mile"];
const WEIGHT_UNITS: &[&str] = &["Gram", "Kilogram", "Pound", "Ounce"];
const TEMPERATURE_UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];
const TIME_UNITS: &[&str] = &["Second", "Minute", "Hour"];

/// Length factors relative to the meter.
const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("Meter", 1.0),
    ("Kilometer", 1000.0),
    ("Feet", 0.3048),
    ("Mile", 1609.34),
];

/// Weight factors relative to the gram.
const WEIGHT_FACTORS: &[(&str, f64)] = &[
    ("Gram", 1.0),
    ("Kilogram", 1000.0),
    ("Pound", 453.592),
    ("Ounce", 28.3495),
];

/// Time factors relative to the second.
const TIME_FACTORS: &[(&str, f64)] = &[("Second", 1.0), ("Minute", 60.0), ("Hour", 3600.0)];

/// How values move between units of one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// `value * factor[from] / factor[to]`.
    Linear(&'static [(&'static str, f64)]),
    /// Offset-and-scale formulas dispatched on the (from, to) pair.
    Temperature,
}

/// A family of commensurable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Time,
}

impl Category {
    /// Looks up a category by its display name (exact match).
    ///
    /// Returns `ToolkitError::UnknownCategory` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ToolkitError> {
        match name {
            "Length" => Ok(Category::Length),
            "Weight" => Ok(Category::Weight),
            "Temperature" => Ok(Category::Temperature),
            "Time" => Ok(Category::Time),
            _ => Err(ToolkitError::UnknownCategory(name.to_string())),
        }
    }

    /// Returns a slice of all category names.
    pub fn list_names() -> &'static [&'static str] {
        CATEGORY_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
        }
    }

    /// Unit names in display order.
    pub fn units(self) -> &'static [&'static str] {
        match self {
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Temperature => TEMPERATURE_UNITS,
            Category::Time => TIME_UNITS,
        }
    }

    pub fn scale(self) -> Scale {
        match self {
            Category::Length => Scale::Linear(LENGTH_FACTORS),
            Category::Weight => Scale::Linear(WEIGHT_FACTORS),
            Category::Temperature => Scale::Temperature,
            Category::Time => Scale::Linear(TIME_FACTORS),
        }
    }
}

/// Returns the fixed category names: Length, Weight, Temperature, Time.
pub fn list_categories() -> &'static [&'static str] {
    Category::list_names()
}

/// Returns the ordered unit names for `category`.
pub fn units_for(category: &str) -> Result<&'static [&'static str], ToolkitError> {
    Category::from_name(category).map(Category::units)
}

/// Converts `value` from one unit to another within `category`.
///
/// Linear categories reject units missing from their factor table with
/// `ToolkitError::UnknownUnit`. Temperature never rejects a unit: same-unit
/// and unrecognized pairs return `value` unchanged.
///
/// Non-finite values fail with `ToolkitError::InvalidValue`.
pub fn convert(value: f64, from: &str, to: &str, category: &str) -> Result<f64, ToolkitError> {
    let category = Category::from_name(category)?;
    if !value.is_finite() {
        return Err(ToolkitError::InvalidValue(value.to_string()));
    }
    match category.scale() {
        Scale::Linear(table) => {
            let from_factor = factor(table, from, category)?;
            let to_factor = factor(table, to, category)?;
            Ok(value * (from_factor / to_factor))
        }
        Scale::Temperature => Ok(convert_temperature(value, from, to)),
    }
}

/// Parses user-entered text into a finite number.
///
/// Surrounding whitespace is ignored. Anything else that does not parse
/// (including `inf` and `NaN`) fails with `ToolkitError::InvalidValue`.
pub fn parse_value(text: &str) -> Result<f64, ToolkitError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ToolkitError::InvalidValue(text.to_string()))
}

fn factor(
    table: &[(&'static str, f64)],
    unit: &str,
    category: Category,
) -> Result<f64, ToolkitError> {
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|&(_, f)| f)
        .ok_or_else(|| ToolkitError::UnknownUnit {
            unit: unit.to_string(),
            category: category.name().to_string(),
        })
}

fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    match (from, to) {
        ("Celsius", "Fahrenheit") => value * 9.0 / 5.0 + 32.0,
        ("Celsius", "Kelvin") => value + 273.15,
        ("Fahrenheit", "Celsius") => (value - 32.0) * 5.0 / 9.0,
        ("Fahrenheit", "Kelvin") => (value - 32.0) * 5.0 / 9.0 + 273.15,
        ("Kelvin", "Celsius") => value - 273.15,
        ("Kelvin", "Fahrenheit") => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Tables --

    #[test]
    fn list_categories_is_fixed_and_ordered() {
        assert_eq!(
            list_categories(),
            &["Length", "Weight", "Temperature", "Time"]
        );
    }

    #[test]
    fn every_listed_category_resolves() {
        for name in list_categories() {
            let category = Category::from_name(name).unwrap();
            assert_eq!(category.name(), *name);
        }
    }

    #[test]
    fn units_for_length_in_display_order() {
        assert_eq!(
            units_for("Length").unwrap(),
            &["Meter", "Kilometer", "Feet", "Mile"]
        );
    }

    #[test]
    fn units_for_unknown_category_fails() {
        let result = units_for("Volume");
        assert_eq!(
            result,
            Err(ToolkitError::UnknownCategory("Volume".to_string()))
        );
    }

    #[test]
    fn category_lookup_is_case_sensitive() {
        assert!(Category::from_name("length").is_err());
    }

    #[test]
    fn linear_unit_lists_match_factor_tables() {
        for category in [Category::Length, Category::Weight, Category::Time] {
            let Scale::Linear(table) = category.scale() else {
                panic!("{} should be linear", category.name());
            };
            let table_units: Vec<&str> = table.iter().map(|(u, _)| *u).collect();
            assert_eq!(table_units, category.units(), "{}", category.name());
        }
    }

    #[test]
    fn temperature_uses_formula_scale() {
        assert_eq!(Category::Temperature.scale(), Scale::Temperature);
    }

    // -- Linear conversions --

    #[test]
    fn meter_to_kilometer() {
        assert_eq!(convert(1.0, "Meter", "Kilometer", "Length").unwrap(), 0.001);
    }

    #[test]
    fn meters_to_mile() {
        let miles = convert(1609.34, "Meter", "Mile", "Length").unwrap();
        assert!(approx_eq(miles, 1.0), "got {miles}");
    }

    #[test]
    fn feet_to_meter() {
        let m = convert(10.0, "Feet", "Meter", "Length").unwrap();
        assert!(approx_eq(m, 3.048), "got {m}");
    }

    #[test]
    fn kilogram_to_pound() {
        let lb = convert(1.0, "Kilogram", "Pound", "Weight").unwrap();
        assert!(approx_eq(lb, 1000.0 / 453.592), "got {lb}");
    }

    #[test]
    fn hours_to_seconds() {
        assert_eq!(convert(2.0, "Hour", "Second", "Time").unwrap(), 7200.0);
    }

    #[test]
    fn negative_values_convert_linearly() {
        let h = convert(-90.0, "Minute", "Hour", "Time").unwrap();
        assert!(approx_eq(h, -1.5), "got {h}");
    }

    #[test]
    fn unknown_from_unit_fails() {
        let result = convert(1.0, "Furlong", "Meter", "Length");
        assert_eq!(
            result,
            Err(ToolkitError::UnknownUnit {
                unit: "Furlong".into(),
                category: "Length".into(),
            })
        );
    }

    #[test]
    fn unit_from_another_category_fails() {
        let result = convert(1.0, "Meter", "Gram", "Length");
        assert!(matches!(result, Err(ToolkitError::UnknownUnit { unit, .. }) if unit == "Gram"));
    }

    #[test]
    fn unknown_category_fails_conversion() {
        let result = convert(1.0, "Liter", "Milliliter", "Volume");
        assert!(matches!(result, Err(ToolkitError::UnknownCategory(_))));
    }

    #[test]
    fn non_finite_values_fail() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = convert(v, "Meter", "Kilometer", "Length");
            assert!(matches!(result, Err(ToolkitError::InvalidValue(_))));
        }
    }

    // -- Temperature --

    #[test]
    fn celsius_to_fahrenheit_freezing() {
        assert_eq!(
            convert(0.0, "Celsius", "Fahrenheit", "Temperature").unwrap(),
            32.0
        );
    }

    #[test]
    fn celsius_to_kelvin_boiling() {
        let k = convert(100.0, "Celsius", "Kelvin", "Temperature").unwrap();
        assert!(approx_eq(k, 373.15), "got {k}");
    }

    #[test]
    fn fahrenheit_to_celsius_freezing() {
        assert_eq!(
            convert(32.0, "Fahrenheit", "Celsius", "Temperature").unwrap(),
            0.0
        );
    }

    #[test]
    fn fahrenheit_to_kelvin() {
        let k = convert(212.0, "Fahrenheit", "Kelvin", "Temperature").unwrap();
        assert!(approx_eq(k, 373.15), "got {k}");
    }

    #[test]
    fn kelvin_to_celsius_and_fahrenheit() {
        let c = convert(0.0, "Kelvin", "Celsius", "Temperature").unwrap();
        assert!(approx_eq(c, -273.15), "got {c}");
        let f = convert(273.15, "Kelvin", "Fahrenheit", "Temperature").unwrap();
        assert!(approx_eq(f, 32.0), "got {f}");
    }

    #[test]
    fn minus_forty_is_the_same_in_celsius_and_fahrenheit() {
        let f = convert(-40.0, "Celsius", "Fahrenheit", "Temperature").unwrap();
        assert!(approx_eq(f, -40.0), "got {f}");
    }

    #[test]
    fn temperature_same_unit_returns_input() {
        for unit in Category::Temperature.units() {
            assert_eq!(convert(12.5, unit, unit, "Temperature").unwrap(), 12.5);
        }
    }

    #[test]
    fn temperature_unrecognized_pair_returns_input() {
        assert_eq!(
            convert(42.0, "Rankine", "Celsius", "Temperature").unwrap(),
            42.0
        );
        assert_eq!(
            convert(42.0, "Celsius", "Meter", "Temperature").unwrap(),
            42.0
        );
    }

    // -- parse_value --

    #[test]
    fn parse_value_accepts_numbers_with_whitespace() {
        assert_eq!(parse_value(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_value("-3").unwrap(), -3.0);
        assert_eq!(parse_value("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn parse_value_rejects_non_numeric_text() {
        assert_eq!(
            parse_value("abc"),
            Err(ToolkitError::InvalidValue("abc".into()))
        );
        assert!(parse_value("").is_err());
        assert!(parse_value("12 m").is_err());
    }

    #[test]
    fn parse_value_rejects_non_finite_text() {
        assert!(parse_value("inf").is_err());
        assert!(parse_value("NaN").is_err());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn linear_identity_conversion_is_exact(
                v in -1e12_f64..1e12,
                category_idx in 0_usize..3,
                unit_idx in 0_usize..4,
            ) {
                let category = [Category::Length, Category::Weight, Category::Time][category_idx];
                let units = category.units();
                let unit = units[unit_idx % units.len()];
                let result = convert(v, unit, unit, category.name()).unwrap();
                prop_assert_eq!(result, v);
            }

            #[test]
            fn linear_round_trip_within_relative_tolerance(
                v in -1e6_f64..1e6,
                from_idx in 0_usize..4,
                to_idx in 0_usize..4,
            ) {
                let units = Category::Weight.units();
                let from = units[from_idx];
                let to = units[to_idx];
                let there = convert(v, from, to, "Weight").unwrap();
                let back = convert(there, to, from, "Weight").unwrap();
                prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0),
                    "{v} {from} -> {there} {to} -> {back}");
            }

            #[test]
            fn celsius_fahrenheit_round_trip(v in -500.0_f64..5000.0) {
                let f = convert(v, "Celsius", "Fahrenheit", "Temperature").unwrap();
                let back = convert(f, "Fahrenheit", "Celsius", "Temperature").unwrap();
                prop_assert!((back - v).abs() < 1e-9, "{v} -> {f} -> {back}");
            }
        }
    }
}
