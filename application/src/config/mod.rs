//! Application-level configuration.
//!
//! - [`NavigationParams`]: how the navigate use case treats surveys and sessions

pub mod navigation_params;

pub use navigation_params::NavigationParams;
