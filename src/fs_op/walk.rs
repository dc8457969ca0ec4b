use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::fs_op::error::FsOpError;

/// Relative paths of every regular file beneath `dir`, sorted.
pub fn list_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, FsOpError> {
    let root = dir.as_ref();
    let mut out = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| FsOpError::PathContext {
            path: root.to_path_buf(),
            msg: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            out.push(rel.to_path_buf());
        }
    }
    out.sort();
    Ok(out)
}
