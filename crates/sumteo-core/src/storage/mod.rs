mod config;

pub use config::{Config, ProofSettings, TimerSettings};

use std::path::PathBuf;

/// Returns the Sumteo data directory, creating it if needed.
///
/// `SUMTEO_DATA_DIR` wins when set. Otherwise `~/.config/sumteo`, or
/// `~/.config/sumteo-dev` with `SUMTEO_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = match std::env::var_os("SUMTEO_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("SUMTEO_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("sumteo-dev")
            } else {
                base_dir.join("sumteo")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
