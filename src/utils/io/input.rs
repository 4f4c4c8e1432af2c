//! Identifier list reader

use crate::utils::error::{Result, ViesError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension appended to the input path for the default output file
const OUTPUT_EXTENSION: &str = "out";

/// One identifier per line, trimmed. Blank lines and `#` comments are dropped.
pub fn parse_identifiers(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read and filter the identifier list at `path`
pub async fn read_identifiers(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        ViesError::input(format!("Cannot read file '{}': {}", path.display(), e))
    })?;

    let identifiers = parse_identifiers(&content);
    debug!(
        "Read {} identifiers from {}",
        identifiers.len(),
        path.display()
    );
    Ok(identifiers)
}

/// `<input>.out`, next to the input file
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}
