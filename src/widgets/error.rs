//! Error types for the desk-utility widgets.

/// Widget-specific error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WidgetError {
    /// Bill amount is zero or negative
    #[error("Bill amount must be greater than zero")]
    BillNotPositive,

    /// Bill amount exceeds the supported range
    #[error("Bill amount is too large")]
    BillTooLarge,

    /// Tip percentage is negative
    #[error("Tip percentage cannot be negative")]
    NegativeTipPercentage,

    /// Tip percentage exceeds 100
    #[error("Tip percentage cannot exceed 100%")]
    TipPercentageTooLarge,

    /// Bill plus tip exceeds the supported range
    #[error("Calculation results are too large")]
    TotalTooLarge,

    /// Height is zero or negative
    #[error("Height must be greater than zero")]
    HeightNotPositive,

    /// Weight is zero or negative
    #[error("Weight must be greater than zero")]
    WeightNotPositive,

    /// Conversion between units of different categories
    #[error("Cannot convert {from} to {to}: units measure different quantities")]
    UnitMismatch {
        /// Source unit name
        from: &'static str,
        /// Target unit name
        to: &'static str,
    },

    /// Input value is not a finite number
    #[error("Input must be a finite number")]
    NotFinite,

    /// OS entropy source failed
    #[error("Failed to gather randomness: {0}")]
    Entropy(String),
}
