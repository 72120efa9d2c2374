//! gsh - per-host operational configuration registry
//!
//! Loads `gsh-*.json` profiles from the user's home directory and answers
//! read-only questions about them: which hosts exist, which named shell
//! operations are defined, and which operations a host permits.

pub mod config;
pub mod types;

pub use config::{load_configs, Config, ConfigLoader, HostConfig, Operation, ParseMode};
pub use types::GshError;
