mod errors;

pub use errors::{GshError, Result};
