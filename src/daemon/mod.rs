//! Daemon module for the countdown timer.
//!
//! This module contains the core daemon functionality:
//! - `timer`: Timer engine with state transitions and countdown logic
//! - `ipc`: Unix Domain Socket server and request dispatch
//! - `run`: daemon entry point wiring engine, tick loop, and IPC together

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, info, warn};

pub mod ipc;
pub mod timer;

pub use ipc::{IpcServer, RequestHandler};
pub use timer::{TimerEngine, TimerEvent};

/// Socket path relative to the home directory.
const SOCKET_RELATIVE_PATH: &str = ".tickdown/tickdown.sock";

/// Returns the default daemon socket path under the user's home directory.
pub fn default_socket_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(SOCKET_RELATIVE_PATH))
}

/// Runs the daemon until interrupted.
///
/// Owns the single TimerEngine instance and the only tick source in the
/// process, serves IPC requests one connection at a time, and logs timer
/// events. Returns when ctrl-c is received; the tick task is aborted on the
/// way out so no callback outlives the daemon.
pub async fn run(socket_path: &Path) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let engine = Arc::new(Mutex::new(TimerEngine::new(event_tx)));

    let server = IpcServer::new(socket_path)?;
    let handler = RequestHandler::new(Arc::clone(&engine));
    info!("Daemon listening on {:?}", server.socket_path());

    let tick_task = tokio::spawn(TimerEngine::run(Arc::clone(&engine)));
    let event_task = tokio::spawn(log_events(event_rx));

    loop {
        tokio::select! {
            accepted = server.accept() => {
                match accepted {
                    Ok(mut stream) => {
                        match IpcServer::receive_request(&mut stream).await {
                            Ok(request) => {
                                debug!("Received request: {:?}", request);
                                let response = handler.handle(request).await;
                                if let Err(e) = IpcServer::send_response(&mut stream, &response).await {
                                    warn!("Failed to send response: {}", e);
                                }
                            }
                            Err(e) => warn!("Failed to read request: {}", e),
                        }
                    }
                    Err(e) => error!("Accept failed: {}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    tick_task.abort();
    event_task.abort();

    Ok(())
}

/// Drains timer events into the log.
async fn log_events(mut rx: mpsc::UnboundedReceiver<TimerEvent>) {
    while let Some(event) = rx.recv().await {
        match event {
            TimerEvent::DurationSet { seconds } => info!("Duration set to {}s", seconds),
            TimerEvent::Started { remaining_seconds } => {
                info!("Countdown started at {}s", remaining_seconds)
            }
            TimerEvent::Resumed { remaining_seconds } => {
                info!("Countdown resumed at {}s", remaining_seconds)
            }
            TimerEvent::Paused { remaining_seconds } => {
                info!("Countdown paused at {}s", remaining_seconds)
            }
            TimerEvent::Reset => info!("Countdown reset"),
            TimerEvent::Tick { remaining_seconds } => debug!("Tick: {}s left", remaining_seconds),
            TimerEvent::Expired => info!("Countdown expired"),
        }
    }
}
