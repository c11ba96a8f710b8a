//! Core data types for the countdown timer.
//!
//! This module defines the data structures used for:
//! - Timer state management and phase transitions
//! - IPC request/response serialization

use serde::{Deserialize, Serialize};

/// Upper bound for a configured duration in seconds (99:59 on an MM:SS display).
pub const MAX_DURATION_SECONDS: u32 = 99 * 60 + 59;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the countdown timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// No countdown in progress; remaining equals the configured duration
    Idle,
    /// Countdown is actively decrementing
    Running,
    /// Countdown suspended; remaining is frozen
    Paused,
    /// Countdown reached zero; terminal until reset or a new duration
    Expired,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Expired => "expired",
        }
    }
}

impl Default for TimerPhase {
    fn default() -> Self {
        TimerPhase::Idle
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The single countdown timer entity.
///
/// All transitions are total functions over the phase space; invalid commands
/// leave the state untouched. The daemon's tick loop is the only tick source,
/// and it decrements only while the phase is `Running`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    /// Current phase of the timer
    pub phase: TimerPhase,
    /// Remaining seconds of the live countdown
    pub remaining_seconds: u32,
    /// Last explicitly set duration, used as the reset target
    pub configured_seconds: u32,
}

impl TimerState {
    /// Creates a new TimerState with no duration configured.
    pub fn new() -> Self {
        Self {
            phase: TimerPhase::Idle,
            remaining_seconds: 0,
            configured_seconds: 0,
        }
    }

    /// Sets a new duration and returns the timer to idle.
    ///
    /// Callers must reject non-positive input before this point; the state
    /// itself accepts whatever validated value it is given.
    pub fn set_duration(&mut self, seconds: u32) {
        self.configured_seconds = seconds;
        self.remaining_seconds = seconds;
        self.phase = TimerPhase::Idle;
    }

    /// Starts or resumes the countdown.
    ///
    /// Resuming from pause keeps the remaining value. With nothing left to
    /// count down, the phase is not changed.
    pub fn start(&mut self) {
        if self.remaining_seconds > 0 {
            self.phase = TimerPhase::Running;
        }
    }

    /// Pauses a running countdown. No-op in any other phase.
    pub fn pause(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
        }
    }

    /// Stops the countdown and restores the configured duration.
    pub fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.remaining_seconds = self.configured_seconds;
    }

    /// Decrements the countdown by one elapsed second.
    ///
    /// Returns true if the timer expired on this tick. The final second
    /// transitions straight to zero, so the timer self-stops without an
    /// extra tick and the value never goes negative.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 1 {
            self.remaining_seconds -= 1;
            false
        } else {
            self.remaining_seconds = 0;
            if self.phase == TimerPhase::Running {
                self.phase = TimerPhase::Expired;
            }
            true
        }
    }

    /// Returns true if the countdown is actively decrementing.
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Returns true if the countdown is paused.
    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }

    /// Formats the remaining time as a zero-padded `MM:SS` string.
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a second count as zero-padded `MM:SS`.
pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// IPC Types
// ============================================================================

/// IPC request from client to daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum IpcRequest {
    /// Set the countdown duration
    Set {
        /// Duration in whole seconds
        seconds: u32,
    },
    /// Start or resume the countdown
    Start,
    /// Pause the running countdown
    Pause,
    /// Reset to the configured duration
    Reset,
    /// Query the current status
    Status,
}

/// Response data for IPC responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    /// Current phase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Remaining seconds
    #[serde(rename = "remainingSeconds", skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u32>,
    /// Configured duration in seconds
    #[serde(rename = "configuredSeconds", skip_serializing_if = "Option::is_none")]
    pub configured_seconds: Option<u32>,
    /// Remaining time formatted as MM:SS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl ResponseData {
    /// Creates response data from timer state.
    pub fn from_timer_state(state: &TimerState) -> Self {
        Self {
            state: Some(state.phase.as_str().to_string()),
            remaining_seconds: Some(state.remaining_seconds),
            configured_seconds: Some(state.configured_seconds),
            display: Some(state.display()),
        }
    }
}

/// IPC response from daemon to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
    /// Response status ("success" or "error")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Optional response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl IpcResponse {
    /// Creates a success response.
    pub fn success(message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
