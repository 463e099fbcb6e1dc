//! Presentation adapter: pure functions of timer state.

use serde::{Deserialize, Serialize};

use super::engine::TimerStatus;

/// Display-ready fields, recomputed after every state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerView {
    pub status: TimerStatus,
    pub elapsed_secs: u64,
    pub remaining_secs: u64,
    pub target_secs: u64,
    /// 0.0 ..= 100.0
    pub progress_pct: f64,
    /// Remaining time as `MM:SS`.
    pub display: String,
}

impl TimerView {
    pub fn new(status: TimerStatus, elapsed_secs: u64, target_secs: u64) -> Self {
        let remaining_secs = target_secs.saturating_sub(elapsed_secs);
        Self {
            status,
            elapsed_secs,
            remaining_secs,
            target_secs,
            progress_pct: progress_pct(elapsed_secs, target_secs),
            display: format_mm_ss(remaining_secs),
        }
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

    /// Short status label for the timer face.
    pub fn label(&self) -> &'static str {
        match self.status {
            TimerStatus::Ready => "Ready",
            TimerStatus::Running => "Focus...",
            TimerStatus::Paused => "Paused",
            TimerStatus::Complete => "Complete!",
        }
    }
}

/// Zero-padded `MM:SS`. Minutes are not wrapped into hours.
pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn progress_pct(elapsed_secs: u64, target_secs: u64) -> f64 {
    if target_secs == 0 {
        return 0.0;
    }
    (100.0 * elapsed_secs as f64 / target_secs as f64).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(2), "00:02");
        assert_eq!(format_mm_ss(1800), "30:00");
        assert_eq!(format_mm_ss(599), "09:59");
    }

    #[test]
    fn minutes_may_exceed_an_hour() {
        assert_eq!(format_mm_ss(90 * 60 + 5), "90:05");
    }

    #[test]
    fn progress_bounds() {
        assert_eq!(progress_pct(0, 5), 0.0);
        assert_eq!(progress_pct(3, 5), 60.0);
        assert_eq!(progress_pct(5, 5), 100.0);
    }

    #[test]
    fn view_labels_follow_status() {
        let view = TimerView::new(TimerStatus::Paused, 10, 30);
        assert!(view.is_paused());
        assert_eq!(view.label(), "Paused");
        assert_eq!(view.remaining_secs, 20);
        assert_eq!(view.display, "00:20");
    }
}
