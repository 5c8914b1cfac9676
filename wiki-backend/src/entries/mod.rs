//! Entry storage: one markdown file per wiki entry, keyed by title.
//!
//! Handlers only see the `EntryStore` trait, so tests run against
//! `MemoryEntryStore` instead of a real directory.

pub mod file_ops;
#[cfg(test)]
pub mod memory;
pub mod store;

#[cfg(test)]
pub use memory::MemoryEntryStore;
pub use store::{EntryStore, FileEntryStore};
