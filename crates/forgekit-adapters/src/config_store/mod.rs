//! Project document stores.

mod json;
mod memory;

pub use json::JsonConfigStore;
pub use memory::MemoryConfigStore;
