//! Proof-of-reading record.
//!
//! A completed focus session is summarised as a small JSON memo that a
//! ledger collaborator writes on chain. The memo layout is fixed:
//!
//! ```json
//! {"protocol":"sumteo","version":1,"type":"proof_of_reading","book":"Deep Work",
//!  "duration_minutes":30,"pages_read":12,"session_type":"solo","timestamp":1700000000}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::timer::{TimerStatus, TimerView};

pub const PROTOCOL: &str = "sumteo";
pub const PROTOCOL_VERSION: u32 = 1;
pub const RECORD_TYPE: &str = "proof_of_reading";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Solo,
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingProof {
    pub protocol: String,
    pub version: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub book: String,
    pub duration_minutes: u64,
    pub pages_read: u32,
    pub session_type: SessionType,
    /// Unix seconds.
    pub timestamp: i64,
}

impl ReadingProof {
    pub fn new(
        book: &str,
        duration_minutes: u64,
        pages_read: u32,
        session_type: SessionType,
        at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let book = book.trim();
        if book.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "book".into(),
                message: "book title is empty".into(),
            });
        }
        if duration_minutes == 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_minutes".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(Self {
            protocol: PROTOCOL.into(),
            version: PROTOCOL_VERSION,
            record_type: RECORD_TYPE.into(),
            book: book.to_string(),
            duration_minutes,
            pages_read,
            session_type,
            timestamp: at.timestamp(),
        })
    }

    /// Build the record for a finished session. Anything short of
    /// `Complete` is refused.
    pub fn from_completed(
        view: &TimerView,
        book: &str,
        pages_read: u32,
        session_type: SessionType,
        at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if view.status != TimerStatus::Complete {
            return Err(ValidationError::InvalidValue {
                field: "status".into(),
                message: "session is not complete".into(),
            });
        }
        Self::new(
            book,
            view.target_secs.div_ceil(60),
            pages_read,
            session_type,
            at,
        )
    }

    pub fn to_memo(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
