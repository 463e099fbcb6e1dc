mod config;
mod driver;
mod engine;
mod handle;
mod view;

pub use config::TimerConfig;
pub use driver::{spawn_driver, DriverError, DriverHandle, DriverOptions};
pub use engine::{TimerEngine, TimerStatus};
pub use handle::{create_timer, TimerHandle};
pub use view::{format_mm_ss, progress_pct, TimerView};
