use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a note and return its text exactly as stored
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a note verbatim, creating parent directories as needed
pub fn write_document(path: &Path, text: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    log::debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_document_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "note.md", "# Week 1\n\nNotes\r\n");

        let text = read_document(&path).unwrap();
        assert_eq!(text, "# Week 1\n\nNotes\r\n");
    }

    #[test]
    fn test_read_document_not_found() {
        let dir = create_test_dir();
        let result = read_document(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_document_creates_parent_dirs() {
        let dir = create_test_dir();
        let path = dir.path().join("course").join("lecture.md");

        write_document(&path, "CS 101: Intro\n").unwrap();

        assert_eq!(read_document(&path).unwrap(), "CS 101: Intro\n");
    }

    #[test]
    fn test_write_document_overwrites() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "note.md", "old");

        write_document(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
