use std::path::Path;

use pom_version_domain::{VersionChange, set_project_version};
use pom_version_ports::{DocumentCodec, DocumentStore};
use pom_version_shared_kernel::{ErrorContext, InfrastructureError, Result, VersionValue};
use tracing::debug;

/// Replaces `<project>/<version>` in a file through the codec and store ports.
pub struct RewriteVersion<'a> {
    codec: &'a dyn DocumentCodec,
    store: &'a dyn DocumentStore,
}

impl<'a> RewriteVersion<'a> {
    pub fn new(codec: &'a dyn DocumentCodec, store: &'a dyn DocumentStore) -> Self {
        Self { codec, store }
    }

    pub fn run(&self, path: &Path, version: &VersionValue) -> Result<VersionChange> {
        let mut change = None;
        self.store
            .update(path, &mut |contents: &str| {
                let (output, applied) = self.apply(contents, version)?;
                change = Some(applied);
                Ok(output)
            })
            .with_context(|| format!("rewriting {}", path.display()))?;

        change
            .ok_or_else(|| InfrastructureError::UpdateNotApplied { path: path.to_path_buf() })
            .with_context(|| format!("rewriting {}", path.display()))
    }

    fn apply(&self, contents: &str, version: &VersionValue) -> Result<(String, VersionChange)> {
        debug!(bytes = contents.len(), "parsing document");
        let mut document = self.codec.parse(contents).context("parsing")?;

        let change = set_project_version(&mut document, version).context("updating")?;
        debug!(previous = ?change.previous, current = %change.current, "version replaced");

        let output = self.codec.serialize(&document).context("serializing")?;
        Ok((output, change))
    }
}
