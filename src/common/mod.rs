//! Common utilities shared by the engine and the smoke runner

pub mod config;
pub mod error;
pub mod logging;

pub use config::HarnessConfig;
pub use error::{Error, Result};
