//! Initialization of shared resources: logger and HTTP clients.

mod client;
mod logger;

pub use client::{init_analyzer_client, init_page_client};
pub use logger::init_logger_with;
