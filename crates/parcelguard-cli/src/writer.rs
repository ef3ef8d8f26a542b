use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Resolve where the batch-level JSON summary lands. A directory (existing
/// or with a trailing separator) gets a timestamped file name inside it; an
/// explicit file path is used as-is, creating parents when needed.
pub fn resolve_json_path(dir: &str, timestamp: &str) -> Result<PathBuf> {
    let path = Path::new(dir);
    let filename = format!("validation_{}.json", timestamp);

    let output_path = if path.exists() {
        if path.is_dir() {
            path.join(&filename)
        } else {
            path.to_path_buf()
        }
    } else if dir.ends_with('/') || dir.ends_with('\\') {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        path.join(filename)
    } else {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        // treat a bare, nonexistent path as the directory to create
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        path.join(filename)
    };
    Ok(output_path)
}
