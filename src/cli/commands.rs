//! Command definitions for the tickdown CLI.
//!
//! Uses clap derive macro for argument parsing. All numeric input is
//! range-validated here, at the boundary, so the engine and the widget
//! functions never see an out-of-range value from our own CLI.

use clap::{Args, Parser, Subcommand};

use crate::types::MAX_DURATION_SECONDS;
use crate::widgets::convert::Unit;

// ============================================================================
// CLI Structure
// ============================================================================

/// Countdown timer daemon with a small desk-utility CLI
#[derive(Parser, Debug)]
#[command(
    name = "tickdown",
    version,
    about = "Countdown timer and desk utilities",
    long_about = "A countdown timer that runs in a background daemon, plus a few \n\
                  stateless desk utilities (tip, BMI, unit conversion, passwords).",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Set the countdown duration in seconds
    Set {
        /// Duration in whole seconds (1 to 5999, i.e. up to 99:59)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_DURATION_SECONDS as i64))]
        seconds: u32,
    },

    /// Start the countdown, or resume it if paused
    Start,

    /// Pause the running countdown
    Pause,

    /// Reset the countdown to the configured duration
    Reset,

    /// Show current timer status
    Status,

    /// Run as daemon (background service)
    Daemon,

    /// Calculate a tip and bill total
    Tip(TipArgs),

    /// Calculate body mass index
    Bmi(BmiArgs),

    /// Convert a value between units of length, weight, or volume
    Convert(ConvertArgs),

    /// Generate a random password
    Password(PasswordArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Widget Command Arguments
// ============================================================================

/// Arguments for the tip command
#[derive(Args, Debug, Clone)]
pub struct TipArgs {
    /// Bill amount
    #[arg(short, long)]
    pub bill: f64,

    /// Tip percentage (0-100)
    #[arg(short, long)]
    pub percent: f64,
}

/// Arguments for the bmi command
#[derive(Args, Debug, Clone)]
pub struct BmiArgs {
    /// Height in centimeters
    #[arg(long)]
    pub height: f64,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,
}

/// Arguments for the convert command
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Value to convert
    pub value: f64,

    /// Source unit
    #[arg(value_enum)]
    pub from: Unit,

    /// Target unit
    #[arg(value_enum)]
    pub to: Unit,
}

/// Arguments for the password command
#[derive(Args, Debug, Clone)]
pub struct PasswordArgs {
    /// Password length (4-128)
    #[arg(
        short,
        long,
        default_value = "8",
        value_parser = clap::value_parser!(u32).range(4..=128)
    )]
    pub length: u32,

    /// Include digits
    #[arg(short, long)]
    pub numbers: bool,

    /// Include symbols
    #[arg(short, long)]
    pub symbols: bool,
}

// ============================================================================
// Tests
// ============================================================================
