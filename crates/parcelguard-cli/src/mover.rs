//! Local file reorganization: flatten every `.csv` under a source tree into
//! a destination directory. Runs before the remote batch and is independent
//! of it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

pub fn list_files_recursive(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(dir, &mut files)?;
    Ok(files)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Move every `.csv` file under `source` into a flat `dest` directory,
/// creating it on demand. A missing source directory moves nothing.
/// Returns the number of files moved.
pub fn move_csv_files(source: &Path, dest: &Path) -> io::Result<usize> {
    if !source.exists() {
        return Ok(0);
    }
    fs::create_dir_all(dest)?;

    let mut moved = 0usize;
    for file in list_files_recursive(source)? {
        if file.extension().is_some_and(|ext| ext == "csv") {
            let Some(name) = file.file_name() else {
                continue;
            };
            let target = dest.join(name);
            fs::rename(&file, &target)?;
            info!(from = %file.display(), to = %target.display(), "moved file");
            moved += 1;
        }
    }
    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn touch(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = File::create(path).unwrap();
        write!(file, "{}", content).unwrap();
    }

    #[test]
    fn test_move_flattens_nested_csv_files() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("loveland/wkt");
        let dest = dir.path().join("wkt1");

        touch(&source.join("a.csv"), "a");
        touch(&source.join("deep/b.csv"), "b");
        touch(&source.join("deep/notes.txt"), "n");

        let moved = move_csv_files(&source, &dest).unwrap();
        assert_eq!(moved, 2);
        assert!(dest.join("a.csv").exists());
        assert!(dest.join("b.csv").exists());
        // non-csv files stay behind
        assert!(source.join("deep/notes.txt").exists());
        assert!(!source.join("a.csv").exists());
    }

    #[test]
    fn test_move_missing_source_is_noop() {
        let dir = tempdir().unwrap();
        let moved = move_csv_files(&dir.path().join("absent"), &dir.path().join("dest")).unwrap();
        assert_eq!(moved, 0);
        assert!(!dir.path().join("dest").exists());
    }

    #[test]
    fn test_list_files_recursive() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("x/a.csv"), "a");
        touch(&dir.path().join("x/y/b.csv"), "b");
        touch(&dir.path().join("c.txt"), "c");

        let files = list_files_recursive(dir.path()).unwrap();
        assert_eq!(files.len(), 3);
    }
}
