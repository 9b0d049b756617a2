use std::{
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};

use fs2::FileExt;

/// Exclusive advisory lock on a sidecar file next to the target.
///
/// The target itself is replaced by rename during a write, so locking it
/// directly would leave a waiting process holding the old inode. The sidecar
/// `.<name>.lock` outlives every rewrite and is left in place on release.
#[derive(Debug)]
pub struct FileLock {
    file: File,
    path: PathBuf,
}

impl FileLock {
    /// Blocks until the lock for `target` is held.
    pub fn acquire(target: &Path) -> std::io::Result<Self> {
        let path = Self::lock_path(target);
        let file = OpenOptions::new().create(true).truncate(false).write(true).open(&path)?;
        file.lock_exclusive()?;
        Ok(Self { file, path })
    }

    pub fn lock_path(target: &Path) -> PathBuf {
        let name = target.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        target.with_file_name(format!(".{name}.lock"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
