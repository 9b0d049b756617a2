// crates/infra/src/store.rs
use std::path::Path;

use pom_version_ports::DocumentStore;
use pom_version_shared_kernel::{ErrorContext, InfrastructureError, Result};
use tracing::debug;

use crate::persistence::{FileLock, FileReader, FileWriter};

/// Filesystem-backed store: lock, read, transform, atomic replace.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDocumentStore;

impl DocumentStore for FileDocumentStore {
    fn update(&self, path: &Path, transform: &mut dyn FnMut(&str) -> Result<String>) -> Result<()> {
        // Resolve first: a missing file fails here before any lock file is
        // created, and a symlinked target is rewritten where it points.
        let target = std::fs::canonicalize(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
            .context("reading")?;

        let lock = FileLock::acquire(&target)
            .map_err(|source| InfrastructureError::FileLock { path: target.clone(), source })
            .context("locking")?;
        debug!(lock = %lock.path().display(), "lock acquired");

        let contents = read_text(path, &target).context("reading")?;
        let permissions = FileReader::permissions(&target).ok();

        let output = transform(&contents)?;

        FileWriter::atomic_write(&target, output.as_bytes(), permissions)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })
            .context("writing")?;
        debug!(bytes = output.len(), path = %target.display(), "file replaced");

        drop(lock);
        Ok(())
    }
}

fn read_text(path: &Path, target: &Path) -> std::result::Result<String, InfrastructureError> {
    let bytes = FileReader::read_to_end(target)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    String::from_utf8(bytes).map_err(|err| InfrastructureError::Parse {
        position: err.utf8_error().valid_up_to() as u64,
        details: "file is not valid UTF-8".to_string(),
    })
}
