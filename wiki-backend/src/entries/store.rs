//! EntryStore: title-keyed storage for wiki entries
//!
//! The trait is what handlers depend on; `FileEntryStore` keeps one markdown
//! file per entry on disk.

use super::file_ops;
use crate::error::Result;
use std::path::PathBuf;

/// Title-keyed entry storage.
///
/// Titles are case-sensitive and used verbatim as keys. There is no
/// "already exists" check at this level; `save` always creates or replaces.
pub trait EntryStore: Send + Sync {
    /// Content of `title`, or None if no such entry exists
    fn get(&self, title: &str) -> Result<Option<String>>;

    /// All entry titles, sorted
    fn list(&self) -> Result<Vec<String>>;

    /// Create or fully replace the entry
    fn save(&self, title: &str, content: &str) -> Result<()>;

    fn exists(&self, title: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|t| t == title))
    }
}

/// Entry store backed by a flat directory of `<title>.md` files
pub struct FileEntryStore {
    entries_dir: PathBuf,
}

impl FileEntryStore {
    /// Open the store, creating the entries directory if it is missing
    pub fn new(entries_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&entries_dir)?;
        let store = Self { entries_dir };
        let count = store.list()?.len();
        log::info!(
            "[WIKI] Opened entry store at {} ({} entries)",
            store.entries_dir.display(),
            count
        );
        Ok(store)
    }
}

impl EntryStore for FileEntryStore {
    fn get(&self, title: &str) -> Result<Option<String>> {
        let path = file_ops::entry_path(&self.entries_dir, title);
        Ok(file_ops::read_entry(&path)?)
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(file_ops::list_titles(&self.entries_dir)?)
    }

    fn save(&self, title: &str, content: &str) -> Result<()> {
        let path = file_ops::entry_path(&self.entries_dir, title);
        file_ops::write_entry(&path, content)?;
        log::info!("[WIKI] Saved entry '{}' ({} bytes)", title, content.len());
        Ok(())
    }
}
