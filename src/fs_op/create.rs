use std::path::{Path, PathBuf};

use crate::fs_op::error::FsOpError;

/// Create `path` and any missing parents.
///
/// Succeeds without touching anything when the directory already exists.
/// A non-directory occupying `path` is an error.
pub fn safe_mkdir<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let p = path.as_ref();
    std::fs::create_dir_all(p).map_err(|e| FsOpError::at(p, e))?;
    if !p.is_dir() {
        return Err(FsOpError::PathContext {
            path: p.to_path_buf(),
            msg: "exists but is not a directory".to_string(),
        });
    }
    tracing::debug!("ensured directory {}", p.display());
    Ok(())
}

/// Create a new, uniquely named directory inside `parent` and return it.
///
/// The name is `prefix` followed by random characters, and creation fails
/// rather than reuse an existing entry, so sibling calls never share a
/// directory. The directory is kept on disk after this returns; removing
/// it is up to whoever owns `parent`.
pub fn safe_mkdtemp<P: AsRef<Path>>(parent: P, prefix: &str) -> Result<PathBuf, FsOpError> {
    let parent = parent.as_ref();
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(parent)
        .map_err(|e| FsOpError::at(parent, e))?
        .keep();
    tracing::debug!("created unique directory {}", dir.display());
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn mkdir_creates_parents_and_is_idempotent() {
        let td = tempdir().unwrap();
        let dir = td.path().join("a/b/c");
        safe_mkdir(&dir).unwrap();
        assert!(dir.is_dir());
        safe_mkdir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn mkdir_over_a_file_fails() {
        let td = tempdir().unwrap();
        let f = td.path().join("occupied");
        std::fs::write(&f, b"x").unwrap();
        assert!(safe_mkdir(&f).is_err());
    }

    #[test]
    fn mkdtemp_returns_distinct_persisted_dirs() {
        let td = tempdir().unwrap();
        let a = safe_mkdtemp(td.path(), "tmp").unwrap();
        let b = safe_mkdtemp(td.path(), "tmp").unwrap();
        assert_ne!(a, b);
        assert!(a.is_dir() && b.is_dir());
        assert_eq!(a.parent(), Some(td.path()));
        assert!(a.file_name().unwrap().to_string_lossy().starts_with("tmp"));
    }

    #[test]
    fn mkdtemp_in_missing_parent_fails() {
        let td = tempdir().unwrap();
        let missing = td.path().join("nope");
        let err = safe_mkdtemp(&missing, "tmp").unwrap_err();
        assert!(matches!(err, FsOpError::PathContext { ref path, .. } if path == &missing));
    }
}
