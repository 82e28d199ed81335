//! Input URL list loading

use crate::Result;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the newline-delimited input URL list
///
/// A missing file yields an empty list and a warning; the caller decides
/// whether an empty list is fatal.
pub fn load_input_urls(path: &Path) -> Result<Vec<String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Input file not found: {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let urls = parse_url_list(&content);
    tracing::info!("Loaded {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Splits a URL list into entries, dropping blank lines and `#` comments
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
