//! Title search for the sidebar search box.

/// Titles containing `query` as a case-insensitive literal substring.
///
/// Keeps the order of `titles`. A blank query matches every title.
pub fn match_titles<'a, I>(query: &str, titles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let needle = query.trim().to_lowercase();
    titles
        .into_iter()
        .filter(|title| title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
