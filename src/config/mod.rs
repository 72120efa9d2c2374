//! Configuration registry for gsh
//!
//! Profiles are read once from `~/gsh-*.json` and then only queried:
//! 1. `loader` discovers and parses the files
//! 2. `registry` holds the config types and their lookups
//! 3. `ordering` sorts hosts and operations for display

mod loader;
mod ordering;
mod registry;

pub use loader::{load_configs, ConfigLoader, ParseMode, CONFIG_FILE_PATTERN};
pub use ordering::{sort_hosts_by_name, sort_operations_by_name};
pub use registry::{find_config, Config, HostConfig, Operation};
