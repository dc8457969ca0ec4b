use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Ensure parent directory exists for a path.
pub fn ensure_parent_exists(p: &Path) -> io::Result<()> {
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write `data` to `target` atomically by writing to a temporary file in the
/// same directory and then renaming into place. Readers never observe a
/// partially written file, and the temp file is removed if any step fails.
pub fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match target.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => return fs::write(target, data),
    };
    fs::create_dir_all(dir)?;
    // `NamedTempFile` deletes itself on drop, which covers every early return.
    let mut tmp = tempfile::Builder::new()
        .prefix(".tmp_atomic_write.")
        .tempfile_in(dir)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

/// Dump `content` into `path`, creating parent directories and replacing
/// whatever was there before.
pub fn safe_file_dump<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FsOpError> {
    let p = path.as_ref();
    ensure_parent_exists(p).map_err(|e| FsOpError::at(p, e))?;
    atomic_write(p, content.as_bytes()).map_err(|e| FsOpError::at(p, e))?;
    tracing::debug!("wrote {} bytes to {}", content.len(), p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn leftovers(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with(".tmp_atomic_write."))
            .count()
    }

    #[test]
    fn file_dump_creates_parents() {
        let td = tempdir().unwrap();
        let p = td.path().join("com/example/Foo.class");
        safe_file_dump(&p, "cafebabe").unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "cafebabe");
        assert_eq!(leftovers(p.parent().unwrap()), 0);
    }

    #[test]
    fn file_dump_overwrites() {
        let td = tempdir().unwrap();
        let p = td.path().join("a.txt");
        safe_file_dump(&p, "first, and longer").unwrap();
        safe_file_dump(&p, "second").unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "second");
    }

    #[test]
    fn file_dump_onto_directory_fails() {
        let td = tempdir().unwrap();
        let p = td.path().join("dir");
        fs::create_dir(&p).unwrap();
        let err = safe_file_dump(&p, "x").unwrap_err();
        assert!(matches!(err, FsOpError::PathContext { ref path, .. } if path == &p));
        assert_eq!(leftovers(td.path()), 0);
    }
}
