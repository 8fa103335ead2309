//! Session store adapters
//!
//! Both implement the [`SessionStore`](navigator_application::SessionStore)
//! port and hand sessions back exactly as saved.

mod json_file;
mod memory;

pub use json_file::JsonFileSessionStore;
pub use memory::InMemorySessionStore;
