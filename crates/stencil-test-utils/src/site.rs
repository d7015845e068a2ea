//! [`TestSite`] temporary site root for file-based tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary site root with helpers to write documents into it.
///
/// # Example
///
/// ```rust
/// use stencil_test_utils::TestSite;
///
/// let site = TestSite::new();
/// let path = site.write("docs/intro.html", "<p>Hello</p>");
/// assert!(path.exists());
/// ```
pub struct TestSite {
    temp_dir: TempDir,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `rel_path`, creating parent directories, and return
    /// the absolute path.
    pub fn write(&self, rel_path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
