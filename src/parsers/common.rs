use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Buffered read of a whole declaration file
pub fn read_source(file_path: &Path) -> Result<String> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open declaration file {}", file_path.display()))?;
    let file_size = file
        .metadata()
        .with_context(|| format!("Failed to stat declaration file {}", file_path.display()))?
        .len() as usize;

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);

    let mut content = String::with_capacity(file_size);
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read declaration file {}", file_path.display()))?;
    Ok(content)
}

/// Trims whitespace and byte-order marks from both ends of a line.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Strips one leading `*` and the whitespace around it from a doc comment line.
/// Lines without a leading `*` are returned unchanged.
pub fn strip_comment_prefix(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Body of a doc comment opened and closed on the same line, e.g. `/** Base */`.
pub fn single_line_doc(line: &str) -> Option<&str> {
    let body = line.strip_prefix("/**")?;
    let end = body.find("*/")?;
    Some(&body[..end])
}
