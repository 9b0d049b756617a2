use std::{
    fs::{File, Permissions},
    io::Read,
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Permission bits of the file, so a replacement can carry them over.
    pub fn permissions(path: &Path) -> std::io::Result<Permissions> {
        std::fs::metadata(path).map(|m| m.permissions())
    }
}
