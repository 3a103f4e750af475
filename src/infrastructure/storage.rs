use std::fs;
use std::path::Path;

use crate::domain::error::{AppError, Result};

/// Read a whole file as raw bytes
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::file_not_found(path),
        _ => AppError::IoError(format!("Failed to read '{}': {}", path.display(), e)),
    })
}

/// Write raw bytes, creating missing parent directories
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, bytes)
        .map_err(|e| AppError::IoError(format!("Failed to write '{}': {}", path.display(), e)))
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("blob.bin");
        write_bytes(&path, &[0, 159, 255]).unwrap();
        assert_eq!(read_bytes(&path).unwrap(), vec![0, 159, 255]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_bytes(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
