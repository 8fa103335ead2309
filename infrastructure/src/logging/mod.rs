//! Logging infrastructure: structured navigation audit log.
//!
//! Provides [`JsonlNavigationLogger`], a JSONL file writer that implements
//! the [`NavigationLogger`](navigator_application::NavigationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlNavigationLogger;
