//! Display utilities for the tickdown CLI.
//!
//! This module provides formatted output for:
//! - Timer command results
//! - Status display
//! - Widget results
//! - Error messages

use crate::types::IpcResponse;
use crate::widgets::bmi::BmiReport;
use crate::widgets::tip::TipBreakdown;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the result of a set-duration command.
    pub fn show_set_success(response: &IpcResponse) {
        println!("* Duration set");
        Self::show_remaining(response);
    }

    /// Shows the result of a start/resume command.
    pub fn show_start_success(response: &IpcResponse) {
        println!("> {}", response.message);
        Self::show_remaining(response);
    }

    /// Shows the result of a pause command.
    pub fn show_pause_success(response: &IpcResponse) {
        println!("|| Timer paused");
        Self::show_remaining(response);
    }

    /// Shows the result of a reset command.
    pub fn show_reset_success(response: &IpcResponse) {
        println!("[] Timer reset");
        Self::show_remaining(response);
    }

    /// Shows the current timer status.
    pub fn show_status(response: &IpcResponse) {
        println!("Tickdown status");
        println!("---------------");

        if let Some(data) = &response.data {
            let state = data.state.as_deref().unwrap_or("unknown");
            println!("State: {}", state);

            if let Some(display) = &data.display {
                println!("Remaining: {}", display);
            }
            if let Some(configured) = data.configured_seconds {
                println!("Configured: {}s", configured);
            }
        } else {
            println!("The daemon did not report any timer state");
        }
    }

    /// Shows a tip calculation result.
    pub fn show_tip(breakdown: &TipBreakdown) {
        println!("Bill:  {:.2}", breakdown.bill);
        println!("Tip:   {:.2} ({:.1}%)", breakdown.tip, breakdown.percent);
        println!("Total: {:.2}", breakdown.total);
    }

    /// Shows a BMI calculation result.
    pub fn show_bmi(report: &BmiReport) {
        println!("BMI: {:.1} ({})", report.bmi, report.category);
    }

    /// Shows a unit conversion result.
    pub fn show_conversion(value: f64, from: &str, to: &str, result: f64) {
        println!("{} {} = {:.4} {}", value, from, result, to);
    }

    /// Shows a generated password.
    pub fn show_password(password: &str) {
        println!("{}", password);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Prints the remaining time line from a response, when present.
    fn show_remaining(response: &IpcResponse) {
        if let Some(data) = &response.data {
            if let Some(display) = &data.display {
                println!("  Remaining: {}", display);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResponseData, TimerState};
    use crate::widgets::bmi::calculate_bmi;
    use crate::widgets::tip::calculate_tip;

    // Display writes to stdout; these tests only check it does not panic on
    // the shapes of data it will actually see.

    #[test]
    fn test_show_status_with_data() {
        let mut state = TimerState::new();
        state.set_duration(90);
        let response = IpcResponse::success("", Some(ResponseData::from_timer_state(&state)));

        Display::show_status(&response);
    }

    #[test]
    fn test_show_status_without_data() {
        let response = IpcResponse::success("", None);

        Display::show_status(&response);
    }

    #[test]
    fn test_show_timer_messages() {
        let mut state = TimerState::new();
        state.set_duration(5);
        let response =
            IpcResponse::success("Timer started", Some(ResponseData::from_timer_state(&state)));

        Display::show_set_success(&response);
        Display::show_start_success(&response);
        Display::show_pause_success(&response);
        Display::show_reset_success(&response);
    }

    #[test]
    fn test_show_widget_results() {
        let breakdown = calculate_tip(100.0, 15.0).unwrap();
        Display::show_tip(&breakdown);

        let report = calculate_bmi(180.0, 75.0).unwrap();
        Display::show_bmi(&report);

        Display::show_conversion(10.0, "km", "mi", 6.2137);
        Display::show_password("abcDEF12");
    }
}
