use pom_version_shared_kernel::{DomainError, DomainResult, VersionValue};

use crate::model::{Document, Element};

pub const PROJECT_ELEMENT: &str = "project";
pub const VERSION_ELEMENT: &str = "version";

/// Outcome of a successful version replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    /// Text the element held before, `None` when it had child nodes instead.
    pub previous: Option<String>,
    pub current: String,
}

impl VersionChange {
    pub fn is_noop(&self) -> bool {
        self.previous.as_deref() == Some(self.current.as_str())
    }
}

/// Replaces the text of `<project>/<version>` with `version`.
///
/// The root must be `<project>` and it must have exactly one direct
/// `<version>` child; attributes on that child are left untouched.
pub fn set_project_version(document: &mut Document, version: &VersionValue) -> DomainResult<VersionChange> {
    let root = &mut document.root;
    if root.name != PROJECT_ELEMENT {
        return Err(DomainError::UnexpectedRoot {
            expected: PROJECT_ELEMENT.to_string(),
            found: root.name.clone(),
        });
    }
    let target = single_child_mut(root, VERSION_ELEMENT)?;
    let previous = target.text().map(str::to_string);
    target.set_text(version.as_str());
    Ok(VersionChange { previous, current: version.to_string() })
}

fn single_child_mut<'a>(parent: &'a mut Element, name: &str) -> DomainResult<&'a mut Element> {
    let parent_name = parent.name.clone();
    let mut matches = parent.child_elements_mut().filter(|e| e.name == name);
    let first = matches.next().ok_or_else(|| DomainError::MissingElement {
        parent: parent_name.clone(),
        child: name.to_string(),
    })?;
    let extra = matches.count();
    if extra > 0 {
        return Err(DomainError::DuplicateElement {
            parent: parent_name,
            child: name.to_string(),
            count: extra + 1,
        });
    }
    Ok(first)
}
