pub mod config;
pub mod mint;
pub mod proof;
pub mod room;
pub mod timer;
