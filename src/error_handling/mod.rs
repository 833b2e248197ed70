//! Error handling: typed errors for initialization and scan failures.

mod types;

pub use types::{InitializationError, ScanError};
