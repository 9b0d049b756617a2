// crates/ports/src/store.rs
use std::path::Path;

use pom_version_shared_kernel::Result;

/// Port for the read-modify-write cycle on the target file.
///
/// `transform` receives the current contents and returns the replacement.
/// If it fails, the file must be left as it was.
pub trait DocumentStore {
    fn update(&self, path: &Path, transform: &mut dyn FnMut(&str) -> Result<String>) -> Result<()>;
}
