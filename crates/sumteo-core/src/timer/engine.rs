//! Timer engine implementation.
//!
//! The engine is a tick-driven countdown. It owns no clock and no thread:
//! something else (the async driver, a test, a UI frame loop) calls
//! `tick()` once per elapsed second while the engine is running.
//!
//! ## State Transitions
//!
//! ```text
//! Ready -> Running -> (Paused <-> Running) -> Complete
//!   ^__________________ reset ___________________|
//! ```
//!
//! Commands issued from a state where they mean nothing return `None` and
//! leave the engine untouched.
//!
//! ## Usage
//!
//! ```
//! use sumteo_core::{TimerConfig, TimerEngine, TimerStatus};
//!
//! let mut engine = TimerEngine::new(TimerConfig::new(2).unwrap());
//! engine.start();
//! engine.tick();
//! engine.tick();
//! assert_eq!(engine.status(), TimerStatus::Complete);
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::TimerConfig;
use super::view::TimerView;
use crate::events::{Event, PauseReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Ready,
    Running,
    Paused,
    Complete,
}

/// Core countdown state machine.
///
/// Invariants:
/// - `elapsed_secs <= target_secs`
/// - `status == Complete` exactly when `elapsed_secs == target_secs`
/// - `elapsed_secs` only grows, and only through `tick()` while running
#[derive(Debug, Clone, Serialize)]
pub struct TimerEngine {
    config: TimerConfig,
    status: TimerStatus,
    elapsed_secs: u64,
}

impl TimerEngine {
    /// Starts in `Ready` with nothing elapsed.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            status: TimerStatus::Ready,
            elapsed_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn target_secs(&self) -> u64 {
        self.config.target_secs()
    }

    pub fn remaining_secs(&self) -> u64 {
        self.target_secs() - self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status == TimerStatus::Paused
    }

    pub fn is_complete(&self) -> bool {
        self.status == TimerStatus::Complete
    }

    /// Presentation fields derived from the current state.
    pub fn view(&self) -> TimerView {
        TimerView::new(self.status, self.elapsed_secs, self.target_secs())
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let view = self.view();
        Event::StateSnapshot {
            status: view.status,
            elapsed_secs: view.elapsed_secs,
            remaining_secs: view.remaining_secs,
            target_secs: view.target_secs,
            progress_pct: view.progress_pct,
            display: view.display,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.status {
            TimerStatus::Ready => {
                self.status = TimerStatus::Running;
                debug!(target_secs = self.target_secs(), "timer started");
                Some(Event::TimerStarted {
                    target_secs: self.target_secs(),
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.pause_with(PauseReason::User)
    }

    /// The host surface became hidden. Pauses a running session and is
    /// ignored otherwise; there is no counterpart for becoming visible.
    pub fn notify_hidden(&mut self) -> Option<Event> {
        self.pause_with(PauseReason::Hidden)
    }

    pub fn resume(&mut self) -> Option<Event> {
        match self.status {
            TimerStatus::Paused => {
                self.status = TimerStatus::Running;
                debug!(elapsed_secs = self.elapsed_secs, "timer resumed");
                Some(Event::TimerResumed {
                    elapsed_secs: self.elapsed_secs,
                    remaining_secs: self.remaining_secs(),
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Valid from every state, so this always yields an event.
    pub fn reset(&mut self) -> Option<Event> {
        self.status = TimerStatus::Ready;
        self.elapsed_secs = 0;
        debug!("timer reset");
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Advance one second. Returns `TimerCompleted` on the tick that
    /// reaches the target and `TimerTicked` on every other running tick.
    pub fn tick(&mut self) -> Option<Event> {
        if self.status != TimerStatus::Running {
            return None;
        }

        self.elapsed_secs = (self.elapsed_secs + 1).min(self.target_secs());
        if self.elapsed_secs >= self.target_secs() {
            self.status = TimerStatus::Complete;
            debug!(target_secs = self.target_secs(), "timer complete");
            return Some(Event::TimerCompleted {
                target_secs: self.target_secs(),
                at: Utc::now(),
            });
        }

        Some(Event::TimerTicked {
            elapsed_secs: self.elapsed_secs,
            remaining_secs: self.remaining_secs(),
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn pause_with(&mut self, reason: PauseReason) -> Option<Event> {
        match self.status {
            TimerStatus::Running => {
                self.status = TimerStatus::Paused;
                debug!(?reason, elapsed_secs = self.elapsed_secs, "timer paused");
                Some(Event::TimerPaused {
                    elapsed_secs: self.elapsed_secs,
                    remaining_secs: self.remaining_secs(),
                    reason,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }
}
