use thiserror::Error;
use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum GshError {
    #[error("Unable to resolve the current user's home directory")]
    HomeDirUnavailable,

    #[error("Invalid search path: {0}")]
    InvalidPath(PathBuf),

    #[error("Invalid config file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Unable to list config files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Unable to open file: {}; err={source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config not found: {0}")]
    ConfigNotFound(String),

    #[error("Host not found: {0}")]
    HostNotFound(String),
}

pub type Result<T> = std::result::Result<T, GshError>;
