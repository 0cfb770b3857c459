mod definition_store;
mod json_file_store;
mod memory_store;
mod store_error;
pub mod store_ops;

pub use definition_store::DefinitionStore;
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use store_error::StoreError;
