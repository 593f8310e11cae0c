//! Repository Layer
//!
//! Storage media, the typed preference store and category sources.

mod traits;
mod memory;
mod store;
mod categories;
#[cfg(not(target_arch = "wasm32"))]
mod sqlite;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(test)]
mod tests;

pub use traits::{CategorySource, Storage};
pub use memory::MemoryStorage;
pub use store::PreferenceStore;
pub use categories::StaticSource;
#[cfg(not(target_arch = "wasm32"))]
pub use categories::JsonFileSource;
#[cfg(not(target_arch = "wasm32"))]
pub use sqlite::SqliteStorage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
