use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Scratch directory holding a `pom.xml`, removed on drop.
#[derive(Debug)]
pub struct PomWorkspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl PomWorkspace {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn with_pom(contents: &str) -> Self {
        let ws = Self::empty();
        ws.write_file("pom.xml", contents);
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn pom_path(&self) -> PathBuf {
        self.path().join("pom.xml")
    }

    pub fn read_pom(&self) -> String {
        fs::read_to_string(self.pom_path()).unwrap()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
