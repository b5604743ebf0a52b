//! Platform and process-level utilities
//!
//! Configuration loading, logging initialization, and panic handling.

pub mod app_config;
pub mod logging;
pub mod panic_handler;

pub use app_config::{AppConfig, get_config};
pub use logging::init_logging;
pub use panic_handler::install_panic_hook;
