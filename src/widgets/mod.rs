//! Stateless desk-utility widgets.
//!
//! Each widget is a pure function with validation at the boundary: no daemon
//! round-trip, no I/O beyond reading OS entropy for the password generator.
//!
//! - `tip`: tip and bill total calculation
//! - `bmi`: body mass index with category
//! - `convert`: unit conversion for length, weight, and volume
//! - `password`: random password generation

pub mod bmi;
pub mod convert;
pub mod error;
pub mod password;
pub mod tip;

pub use bmi::{calculate_bmi, BmiCategory, BmiReport};
pub use convert::{convert, Unit, UnitCategory};
pub use error::WidgetError;
pub use password::{generate_password, PasswordSpec};
pub use tip::{calculate_tip, TipBreakdown};
