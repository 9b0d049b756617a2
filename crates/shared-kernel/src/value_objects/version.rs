// crates/shared-kernel/src/value_objects/version.rs
use std::{fmt, ops::Deref};

use crate::error::{PresentationError, PresentationResult};

/// Replacement text for a `<version>` element.
///
/// The value is opaque: no trimming, no semantic-version checks. The only
/// guarantee is that it is not empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct VersionValue(String);

impl VersionValue {
    pub fn new(value: impl Into<String>) -> PresentationResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(PresentationError::MissingArgument { argument: "NEW_VERSION".to_string() });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl Deref for VersionValue {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for VersionValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
