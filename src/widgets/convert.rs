//! Unit converter widget.
//!
//! Conversions go through a base unit per category (millimeters, grams,
//! milliliters); converting between units of different categories is an
//! error rather than a silent wrong answer.

use clap::ValueEnum;

use super::error::WidgetError;

// ============================================================================
// UnitCategory
// ============================================================================

/// Physical quantity a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Length units, base millimeters
    Length,
    /// Weight units, base grams
    Weight,
    /// Volume units, base milliliters
    Volume,
}

// ============================================================================
// Unit
// ============================================================================

/// Supported units across length, weight, and volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Unit {
    /// Millimeters
    #[value(name = "mm")]
    Millimeters,
    /// Centimeters
    #[value(name = "cm")]
    Centimeters,
    /// Meters
    #[value(name = "m")]
    Meters,
    /// Kilometers
    #[value(name = "km")]
    Kilometers,
    /// Inches
    #[value(name = "in")]
    Inches,
    /// Feet
    #[value(name = "ft")]
    Feet,
    /// Yards
    #[value(name = "yd")]
    Yards,
    /// Miles
    #[value(name = "mi")]
    Miles,
    /// Grams
    #[value(name = "g")]
    Grams,
    /// Kilograms
    #[value(name = "kg")]
    Kilograms,
    /// Ounces
    #[value(name = "oz")]
    Ounces,
    /// Pounds
    #[value(name = "lb")]
    Pounds,
    /// Milliliters
    #[value(name = "ml")]
    Milliliters,
    /// Liters
    #[value(name = "l")]
    Liters,
    /// Fluid ounces
    #[value(name = "floz")]
    FluidOunces,
    /// Cups
    #[value(name = "cup")]
    Cups,
    /// Pints
    #[value(name = "pt")]
    Pints,
    /// Quarts
    #[value(name = "qt")]
    Quarts,
    /// Gallons
    #[value(name = "gal")]
    Gallons,
}

impl Unit {
    /// Returns the category this unit belongs to.
    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Millimeters
            | Unit::Centimeters
            | Unit::Meters
            | Unit::Kilometers
            | Unit::Inches
            | Unit::Feet
            | Unit::Yards
            | Unit::Miles => UnitCategory::Length,
            Unit::Grams | Unit::Kilograms | Unit::Ounces | Unit::Pounds => UnitCategory::Weight,
            Unit::Milliliters
            | Unit::Liters
            | Unit::FluidOunces
            | Unit::Cups
            | Unit::Pints
            | Unit::Quarts
            | Unit::Gallons => UnitCategory::Volume,
        }
    }

    /// Returns the factor converting this unit to its category base unit.
    fn to_base(&self) -> f64 {
        match self {
            Unit::Millimeters => 1.0,
            Unit::Centimeters => 10.0,
            Unit::Meters => 1000.0,
            Unit::Kilometers => 1_000_000.0,
            Unit::Inches => 25.4,
            Unit::Feet => 304.8,
            Unit::Yards => 914.4,
            Unit::Miles => 1_609_344.0,
            Unit::Grams => 1.0,
            Unit::Kilograms => 1000.0,
            Unit::Ounces => 28.3495,
            Unit::Pounds => 453.592,
            Unit::Milliliters => 1.0,
            Unit::Liters => 1000.0,
            Unit::FluidOunces => 29.5735,
            Unit::Cups => 240.0,
            Unit::Pints => 473.176,
            Unit::Quarts => 946.353,
            Unit::Gallons => 3785.41,
        }
    }

    /// Returns the short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Millimeters => "mm",
            Unit::Centimeters => "cm",
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Inches => "in",
            Unit::Feet => "ft",
            Unit::Yards => "yd",
            Unit::Miles => "mi",
            Unit::Grams => "g",
            Unit::Kilograms => "kg",
            Unit::Ounces => "oz",
            Unit::Pounds => "lb",
            Unit::Milliliters => "ml",
            Unit::Liters => "l",
            Unit::FluidOunces => "floz",
            Unit::Cups => "cup",
            Unit::Pints => "pt",
            Unit::Quarts => "qt",
            Unit::Gallons => "gal",
        }
    }
}

/// Converts a value between two units of the same category.
///
/// # Errors
///
/// Rejects non-finite values and unit pairs from different categories.
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, WidgetError> {
    if !value.is_finite() {
        return Err(WidgetError::NotFinite);
    }
    if from.category() != to.category() {
        return Err(WidgetError::UnitMismatch {
            from: from.as_str(),
            to: to.as_str(),
        });
    }

    let base = value * from.to_base();
    Ok(base / to.to_base())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6 * expected.abs().max(1.0),
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_identity_conversion() {
        assert_eq!(convert(42.0, Unit::Meters, Unit::Meters).unwrap(), 42.0);
    }

    #[test]
    fn test_metric_length() {
        assert_close(convert(1.0, Unit::Kilometers, Unit::Meters).unwrap(), 1000.0);
        assert_close(convert(250.0, Unit::Centimeters, Unit::Meters).unwrap(), 2.5);
        assert_close(convert(5.0, Unit::Meters, Unit::Millimeters).unwrap(), 5000.0);
    }

    #[test]
    fn test_imperial_length() {
        assert_close(convert(1.0, Unit::Feet, Unit::Inches).unwrap(), 12.0);
        assert_close(convert(1.0, Unit::Yards, Unit::Feet).unwrap(), 3.0);
        assert_close(convert(1.0, Unit::Miles, Unit::Yards).unwrap(), 1760.0);
    }

    #[test]
    fn test_mixed_length() {
        assert_close(convert(1.0, Unit::Inches, Unit::Millimeters).unwrap(), 25.4);
        assert_close(convert(10.0, Unit::Kilometers, Unit::Miles).unwrap(), 6.21371192);
    }

    #[test]
    fn test_weight() {
        assert_close(convert(1.0, Unit::Kilograms, Unit::Grams).unwrap(), 1000.0);
        assert_close(convert(1.0, Unit::Pounds, Unit::Ounces).unwrap(), 16.0);
        assert_close(convert(500.0, Unit::Grams, Unit::Pounds).unwrap(), 1.1023122);
    }

    #[test]
    fn test_volume() {
        assert_close(convert(1.0, Unit::Liters, Unit::Milliliters).unwrap(), 1000.0);
        assert_close(convert(1.0, Unit::Gallons, Unit::Quarts).unwrap(), 4.0);
        assert_close(convert(2.0, Unit::Cups, Unit::Milliliters).unwrap(), 480.0);
    }

    #[test]
    fn test_cross_category_rejected() {
        let result = convert(1.0, Unit::Meters, Unit::Kilograms);
        assert_eq!(
            result,
            Err(WidgetError::UnitMismatch {
                from: "m",
                to: "kg"
            })
        );

        assert!(convert(1.0, Unit::Liters, Unit::Miles).is_err());
        assert!(convert(1.0, Unit::Grams, Unit::Cups).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert_eq!(
            convert(f64::NAN, Unit::Meters, Unit::Feet),
            Err(WidgetError::NotFinite)
        );
    }

    #[test]
    fn test_negative_values_convert() {
        // Temperatures are not supported, but signed lengths pass through
        assert_close(convert(-2.0, Unit::Meters, Unit::Centimeters).unwrap(), -200.0);
    }

    #[test]
    fn test_round_trip_stability() {
        let original = 123.456;
        let there = convert(original, Unit::Miles, Unit::Millimeters).unwrap();
        let back = convert(there, Unit::Millimeters, Unit::Miles).unwrap();
        assert_close(back, original);
    }

    #[test]
    fn test_category_grouping() {
        assert_eq!(Unit::Miles.category(), UnitCategory::Length);
        assert_eq!(Unit::Pounds.category(), UnitCategory::Weight);
        assert_eq!(Unit::Gallons.category(), UnitCategory::Volume);
    }
}
