//! # Sumteo Core Library
//!
//! Business logic behind the Sumteo social reading demo. The desktop and web
//! surfaces are thin skins; everything that can be tested lives here and is
//! also reachable from the standalone CLI.
//!
//! ## Architecture
//!
//! - **Timer**: a countdown focus timer. [`TimerEngine`] is the tick-driven
//!   state machine, [`TimerHandle`] adds the pause/completion callbacks, and
//!   the async driver owns a handle on one tokio task and feeds it ticks.
//! - **Visibility**: edge detection for "surface became hidden" reports.
//! - **Proof**: the proof-of-reading memo written after a completed session.
//! - **Mint**: ordered record → tree → mint pipeline over an external ledger.
//! - **Room**: fixture readers and the activity feed for the demo room.
//! - **Storage**: TOML configuration in the user data directory.
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`TimerHandle`]: engine plus registered callbacks
//! - [`DriverHandle`]: command front for a running session task
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod mint;
pub mod proof;
pub mod room;
pub mod storage;
pub mod timer;
pub mod visibility;

pub use error::{ConfigError, CoreError, MintError, ValidationError};
pub use events::{Event, PauseReason};
pub use mint::{DryRunLedger, Ledger, MintPipeline, MintReceipt};
pub use proof::{ReadingProof, SessionType};
pub use room::{ReadingRoom, Reader};
pub use storage::Config;
pub use timer::{
    create_timer, spawn_driver, DriverHandle, DriverOptions, TimerConfig, TimerEngine,
    TimerHandle, TimerStatus, TimerView,
};
pub use visibility::{VisibilityEdge, VisibilityTracker};
