//! File operations for the entry store
//!
//! One `<title>.md` file per entry, stored flat in the entries directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension used for entry files
pub const ENTRY_EXTENSION: &str = "md";

/// Path of the file backing `title` (e.g. "Python" -> "<dir>/Python.md")
pub fn entry_path(entries_dir: &Path, title: &str) -> PathBuf {
    entries_dir.join(format!("{}.{}", title, ENTRY_EXTENSION))
}

/// Write an entry file, replacing any previous content
pub fn write_entry(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Read an entry file, returning None if it does not exist
pub fn read_entry(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// List entry titles (file stems of `*.md` files), sorted
pub fn list_titles(entries_dir: &Path) -> io::Result<Vec<String>> {
    let mut titles = Vec::new();

    if !entries_dir.exists() {
        return Ok(titles);
    }

    for entry in fs::read_dir(entries_dir)? {
        let entry = entry?;
        let path = entry.path();
        if let Some(title) = title_from_path(&path) {
            if entry.file_type()?.is_file() {
                titles.push(title);
            }
        }
    }

    titles.sort();
    Ok(titles)
}

/// Title for an entry file path, or None for hidden / non-markdown files
fn title_from_path(path: &Path) -> Option<String> {
    if path.extension().map(|e| e != ENTRY_EXTENSION).unwrap_or(true) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || stem.starts_with('.') {
        return None;
    }
    Some(stem.to_string())
}
