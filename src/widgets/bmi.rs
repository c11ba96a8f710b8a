//! BMI calculator widget.

use std::fmt;

use super::error::WidgetError;

// ============================================================================
// BmiCategory
// ============================================================================

/// Standard BMI categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    Normal,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classifies a BMI value.
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

    /// Returns the string representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// BmiReport
// ============================================================================

/// Result of a BMI calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiReport {
    /// Body mass index value
    pub bmi: f64,
    /// Category for the value
    pub category: BmiCategory,
}

/// Calculates BMI from height in centimeters and weight in kilograms.
///
/// # Errors
///
/// Rejects non-finite and non-positive input.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiReport, WidgetError> {
    if !height_cm.is_finite() || !weight_kg.is_finite() {
        return Err(WidgetError::NotFinite);
    }
    if height_cm <= 0.0 {
        return Err(WidgetError::HeightNotPositive);
    }
    if weight_kg <= 0.0 {
        return Err(WidgetError::WeightNotPositive);
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);

    Ok(BmiReport {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

// ============================================================================
// Tests
// ============================================================================
