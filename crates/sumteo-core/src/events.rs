use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerStatus;

/// Why a running session was paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseReason {
    /// Explicit pause command.
    User,
    /// The host surface went to the background.
    Hidden,
}

/// Every state change of a focus session produces an Event.
/// Hosts render from snapshots; callbacks hang off pause and completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        target_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        elapsed_secs: u64,
        remaining_secs: u64,
        reason: PauseReason,
        at: DateTime<Utc>,
    },
    TimerResumed {
        elapsed_secs: u64,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerTicked {
        elapsed_secs: u64,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Elapsed time reached the target. Emitted once per session.
    TimerCompleted {
        target_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        status: TimerStatus,
        elapsed_secs: u64,
        remaining_secs: u64,
        target_secs: u64,
        progress_pct: f64,
        display: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Wire name of the variant, as written in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::TimerStarted { .. } => "TimerStarted",
            Event::TimerPaused { .. } => "TimerPaused",
            Event::TimerResumed { .. } => "TimerResumed",
            Event::TimerTicked { .. } => "TimerTicked",
            Event::TimerCompleted { .. } => "TimerCompleted",
            Event::TimerReset { .. } => "TimerReset",
            Event::StateSnapshot { .. } => "StateSnapshot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_event_serializes_with_tag_and_reason() {
        let event = Event::TimerPaused {
            elapsed_secs: 3,
            remaining_secs: 2,
            reason: PauseReason::Hidden,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TimerPaused");
        assert_eq!(json["reason"], "hidden");
        assert_eq!(event.kind(), "TimerPaused");
    }
}
