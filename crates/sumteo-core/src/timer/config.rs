use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Immutable per-session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimerConfig")]
pub struct TimerConfig {
    target_secs: u64,
}

#[derive(Deserialize)]
struct RawTimerConfig {
    target_secs: u64,
}

impl TryFrom<RawTimerConfig> for TimerConfig {
    type Error = ValidationError;

    fn try_from(raw: RawTimerConfig) -> Result<Self, Self::Error> {
        Self::new(raw.target_secs)
    }
}

impl TimerConfig {
    /// Rejects a zero-length session.
    pub fn new(target_secs: u64) -> Result<Self, ValidationError> {
        if target_secs == 0 {
            return Err(ValidationError::ZeroTarget);
        }
        Ok(Self { target_secs })
    }

    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn from_minutes(minutes: u64) -> Result<Self, ValidationError> {
        Self::new(minutes.saturating_mul(60))
    }

    pub fn target_secs(&self) -> u64 {
        self.target_secs
    }

    /// Whole minutes, rounded up.
    pub fn target_minutes(&self) -> u64 {
        self.target_secs.div_ceil(60)
    }
}
