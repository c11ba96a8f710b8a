//! Timer engine for the countdown daemon.
//!
//! This module provides the core timer functionality:
//! - Command handling (set duration, start/resume, pause, reset)
//! - Countdown with tokio::time::interval
//! - Event firing for logging and external integrations
//!
//! The daemon owns exactly one tick loop, and that loop decrements only
//! while the timer is in the Running phase. Commands never have to race a
//! second decrement stream because no second stream exists.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::types::{TimerPhase, TimerState};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for logging and external integrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A new duration was configured
    DurationSet {
        /// Configured seconds
        seconds: u32,
    },
    /// Countdown started from idle or expired
    Started {
        /// Seconds on the clock at start
        remaining_seconds: u32,
    },
    /// Countdown resumed from pause
    Resumed {
        /// Seconds on the clock at resume
        remaining_seconds: u32,
    },
    /// Countdown paused
    Paused {
        /// Seconds frozen on the clock
        remaining_seconds: u32,
    },
    /// Countdown reset to the configured duration
    Reset,
    /// One second elapsed
    Tick {
        /// Remaining seconds after the decrement
        remaining_seconds: u32,
    },
    /// Countdown reached zero
    Expired,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that manages countdown state and fires events.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new TimerEngine with the given event channel.
    pub fn new(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(),
            event_tx,
        }
    }

    /// Drives the countdown, ticking once per second.
    ///
    /// This is the only tick source in the process. It should be spawned as
    /// a separate tokio task and aborted on daemon shutdown. Ticks while the
    /// timer is not running are skipped, which is what "cancelling the tick
    /// source" amounts to in this design.
    pub async fn run(engine: Arc<Mutex<TimerEngine>>) -> Result<()> {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let mut engine = engine.lock().await;
            if !engine.state.is_running() {
                continue;
            }
            engine.handle_tick()?;
        }
    }

    /// Handles one elapsed second while running.
    fn handle_tick(&mut self) -> Result<()> {
        let expired = self.state.tick();

        self.event_tx
            .send(TimerEvent::Tick {
                remaining_seconds: self.state.remaining_seconds,
            })
            .context("Failed to send tick event")?;

        if expired {
            self.event_tx
                .send(TimerEvent::Expired)
                .context("Failed to send expired event")?;
        }

        Ok(())
    }

    /// Sets the countdown duration and returns the timer to idle.
    ///
    /// The caller validates the value at the input boundary; by the time it
    /// reaches the engine it is a positive in-range second count.
    pub fn set_duration(&mut self, seconds: u32) -> Result<()> {
        self.state.set_duration(seconds);

        self.event_tx
            .send(TimerEvent::DurationSet { seconds })
            .context("Failed to send duration set event")?;

        Ok(())
    }

    /// Starts the countdown, or resumes it when paused.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer is already running or has no duration
    /// left to count down.
    pub fn start(&mut self) -> Result<()> {
        if self.state.is_running() {
            anyhow::bail!("Timer is already running");
        }
        if self.state.remaining_seconds == 0 {
            anyhow::bail!("No duration set. Use 'set <seconds>' first");
        }

        let resuming = self.state.is_paused();
        self.state.start();

        let event = if resuming {
            TimerEvent::Resumed {
                remaining_seconds: self.state.remaining_seconds,
            }
        } else {
            TimerEvent::Started {
                remaining_seconds: self.state.remaining_seconds,
            }
        };
        self.event_tx
            .send(event)
            .context("Failed to send start event")?;

        Ok(())
    }

    /// Pauses the countdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer is not running.
    pub fn pause(&mut self) -> Result<()> {
        if !self.state.is_running() {
            anyhow::bail!("Timer is not running");
        }

        self.state.pause();

        self.event_tx
            .send(TimerEvent::Paused {
                remaining_seconds: self.state.remaining_seconds,
            })
            .context("Failed to send paused event")?;

        Ok(())
    }

    /// Resets the countdown to the configured duration.
    pub fn reset(&mut self) -> Result<()> {
        self.state.reset();

        self.event_tx
            .send(TimerEvent::Reset)
            .context("Failed to send reset event")?;

        Ok(())
    }

    /// Returns a reference to the current timer state.
    pub fn get_state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub fn get_state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
