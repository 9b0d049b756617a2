use std::{
    fs::{File, Permissions},
    io::Write,
    path::Path,
};

use tempfile::NamedTempFile;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically replace `path` with `data` via a temp file in the same directory and a rename.
    ///
    /// The target is never truncated in place: on failure it keeps its old contents.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write(path: &Path, data: &[u8], permissions: Option<Permissions>) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        if let Some(permissions) = permissions {
            tmp.as_file().set_permissions(permissions)?;
        }
        let _ = tmp.as_file().sync_all();

        tmp.persist(path).map_err(|err| err.error)?;

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
