//! Submitted form payloads and their validation.
//!
//! Raw payloads deserialize leniently (missing fields become empty strings) so
//! that every problem surfaces as `WikiError::ValidationFailed` with readable
//! reasons instead of an extractor rejection.

use serde::{Deserialize, Serialize};

use crate::entries::file_ops::ENTRY_EXTENSION;
use crate::error::{Result, WikiError};

pub const MAX_TITLE_CHARS: usize = 200;

/// Longest file name (in bytes) common filesystems accept
pub const MAX_FILE_NAME_BYTES: usize = 255;

/// Raw POST body of the "Create New Page" form
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct NewEntryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Raw POST body of the edit form
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct EditEntryForm {
    #[serde(default, alias = "edit")]
    pub content: String,
}

/// A validated new entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
}

impl NewEntryForm {
    pub fn validate(&self) -> Result<NewEntry> {
        let mut reasons = Vec::new();

        let title = match clean_title(&self.title) {
            Ok(title) => Some(title),
            Err(mut errs) => {
                reasons.append(&mut errs);
                None
            }
        };
        let content = required(&self.description, "Description", &mut reasons);

        match (title, content) {
            (Some(title), Some(content)) if reasons.is_empty() => Ok(NewEntry { title, content }),
            _ => Err(WikiError::ValidationFailed(reasons)),
        }
    }
}

impl EditEntryForm {
    /// Validated replacement content
    pub fn validate(&self) -> Result<String> {
        let mut reasons = Vec::new();
        required(&self.content, "Content", &mut reasons)
            .ok_or(WikiError::ValidationFailed(reasons))
    }
}

/// Validate a title taken from a URL path segment
pub fn validate_title(raw: &str) -> Result<String> {
    clean_title(raw).map_err(WikiError::ValidationFailed)
}

/// Strip surrounding whitespace and check the title is usable as a file name
fn clean_title(raw: &str) -> std::result::Result<String, Vec<String>> {
    let title = raw.trim();
    let mut reasons = Vec::new();

    if title.is_empty() {
        reasons.push("Title is required".to_string());
        return Err(reasons);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        reasons.push(format!("Title must be at most {} characters", MAX_TITLE_CHARS));
    } else if title.len() + ENTRY_EXTENSION.len() + 1 > MAX_FILE_NAME_BYTES {
        reasons.push(format!(
            "Title is too long: at most {} bytes of UTF-8",
            MAX_FILE_NAME_BYTES - ENTRY_EXTENSION.len() - 1
        ));
    }
    if title.contains('/') || title.contains('\\') {
        reasons.push("Title must not contain '/' or '\\'".to_string());
    }
    if title.starts_with('.') {
        reasons.push("Title must not start with '.'".to_string());
    }
    if title.chars().any(char::is_control) {
        reasons.push("Title must not contain control characters".to_string());
    }

    if reasons.is_empty() {
        Ok(title.to_string())
    } else {
        Err(reasons)
    }
}

fn required(raw: &str, label: &str, reasons: &mut Vec<String>) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        reasons.push(format!("{} is required", label));
        None
    } else {
        Some(value.to_string())
    }
}
