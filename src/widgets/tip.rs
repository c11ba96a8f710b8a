//! Tip calculator widget.

use super::error::WidgetError;

/// Largest bill or total the calculator accepts.
const MAX_AMOUNT: f64 = 1_000_000.0;

/// Result of a tip calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TipBreakdown {
    /// Bill amount as entered
    pub bill: f64,
    /// Tip percentage as entered
    pub percent: f64,
    /// Calculated tip amount
    pub tip: f64,
    /// Bill plus tip
    pub total: f64,
}

/// Calculates the tip and total for a bill.
///
/// # Errors
///
/// Rejects non-finite input, non-positive or oversized bills, percentages
/// outside 0-100, and results that overflow the supported range.
pub fn calculate_tip(bill: f64, percent: f64) -> Result<TipBreakdown, WidgetError> {
    if !bill.is_finite() || !percent.is_finite() {
        return Err(WidgetError::NotFinite);
    }
    if bill <= 0.0 {
        return Err(WidgetError::BillNotPositive);
    }
    if bill > MAX_AMOUNT {
        return Err(WidgetError::BillTooLarge);
    }
    if percent < 0.0 {
        return Err(WidgetError::NegativeTipPercentage);
    }
    if percent > 100.0 {
        return Err(WidgetError::TipPercentageTooLarge);
    }

    let tip = bill * (percent / 100.0);
    let total = bill + tip;
    if total > MAX_AMOUNT {
        return Err(WidgetError::TotalTooLarge);
    }

    Ok(TipBreakdown {
        bill,
        percent,
        tip,
        total,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tip() {
        let breakdown = calculate_tip(100.0, 15.0).unwrap();

        assert_eq!(breakdown.tip, 15.0);
        assert_eq!(breakdown.total, 115.0);
    }

    #[test]
    fn test_zero_percent_tip() {
        let breakdown = calculate_tip(50.0, 0.0).unwrap();

        assert_eq!(breakdown.tip, 0.0);
        assert_eq!(breakdown.total, 50.0);
    }

    #[test]
    fn test_full_percent_tip() {
        let breakdown = calculate_tip(40.0, 100.0).unwrap();

        assert_eq!(breakdown.tip, 40.0);
        assert_eq!(breakdown.total, 80.0);
    }

    #[test]
    fn test_fractional_tip() {
        let breakdown = calculate_tip(87.63, 18.0).unwrap();

        assert!((breakdown.tip - 15.7734).abs() < 1e-9);
        assert!((breakdown.total - 103.4034).abs() < 1e-9);
    }

    #[test]
    fn test_zero_bill_rejected() {
        assert_eq!(calculate_tip(0.0, 15.0), Err(WidgetError::BillNotPositive));
    }

    #[test]
    fn test_negative_bill_rejected() {
        assert_eq!(calculate_tip(-5.0, 15.0), Err(WidgetError::BillNotPositive));
    }

    #[test]
    fn test_oversized_bill_rejected() {
        assert_eq!(
            calculate_tip(1_000_001.0, 15.0),
            Err(WidgetError::BillTooLarge)
        );
    }

    #[test]
    fn test_negative_percent_rejected() {
        assert_eq!(
            calculate_tip(100.0, -1.0),
            Err(WidgetError::NegativeTipPercentage)
        );
    }

    #[test]
    fn test_percent_over_100_rejected() {
        assert_eq!(
            calculate_tip(100.0, 101.0),
            Err(WidgetError::TipPercentageTooLarge)
        );
    }

    #[test]
    fn test_total_overflow_rejected() {
        // Bill itself is in range, but bill plus tip is not
        assert_eq!(
            calculate_tip(999_999.0, 50.0),
            Err(WidgetError::TotalTooLarge)
        );
    }

    #[test]
    fn test_nan_rejected() {
        assert_eq!(calculate_tip(f64::NAN, 15.0), Err(WidgetError::NotFinite));
        assert_eq!(calculate_tip(100.0, f64::NAN), Err(WidgetError::NotFinite));
    }
}
