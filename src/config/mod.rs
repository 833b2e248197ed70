//! Configuration: CLI options, constants, and defaults.

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
