//! Tickdown library
//!
//! This library provides the core functionality for the tickdown CLI:
//! - Countdown timer engine with phase transitions
//! - IPC server/client for daemon-CLI communication
//! - CLI command parsing and display utilities
//! - Stateless desk-utility widgets (tip, BMI, unit conversion, passwords)

pub mod cli;
pub mod daemon;
pub mod types;
pub mod widgets;

// Re-export commonly used types for convenience
pub use types::{format_mm_ss, IpcRequest, IpcResponse, ResponseData, TimerPhase, TimerState};

pub use daemon::{TimerEngine, TimerEvent};

pub use widgets::{
    calculate_bmi, calculate_tip, convert, generate_password, BmiCategory, BmiReport,
    PasswordSpec, TipBreakdown, Unit, UnitCategory, WidgetError,
};
