//! Generated file abstraction.
//!
//! The core generators only produce [`GeneratedFile`] values; writing them
//! to disk is the caller's decision (the CLI), which keeps rendering pure.

use std::path::{Path, PathBuf};

use eyre::Result;

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (starter files)
    IfMissing,
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file produced by generation: a path relative to the output directory
/// plus its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl GeneratedFile {
    /// Create a generated file that always overwrites.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Only write this file when it does not already exist.
    pub fn if_missing(mut self) -> Self {
        self.overwrite = Overwrite::IfMissing;
        self
    }

    /// The path relative to the output directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file under `base` according to its overwrite rule,
    /// creating parent directories as needed.
    pub fn write(&self, base: &Path) -> Result<WriteStatus> {
        let path = base.join(&self.path);
        if self.overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteStatus::Skipped);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &self.content)?;
        Ok(WriteStatus::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let file = GeneratedFile::new("src/main/java/com/acme/Customer.java", "class Customer {}");

        let status = file.write(temp.path()).unwrap();

        assert_eq!(status, WriteStatus::Written);
        let written = temp.path().join("src/main/java/com/acme/Customer.java");
        assert_eq!(fs::read_to_string(written).unwrap(), "class Customer {}");
    }

    #[test]
    fn test_write_overwrites_by_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("out.java"), "old").unwrap();

        let file = GeneratedFile::new("out.java", "new");
        let status = file.write(temp.path()).unwrap();

        assert_eq!(status, WriteStatus::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("out.java")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("batis.toml"), "original").unwrap();

        let file = GeneratedFile::new("batis.toml", "starter").if_missing();
        let status = file.write(temp.path()).unwrap();

        assert_eq!(status, WriteStatus::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("batis.toml")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_if_missing_writes_new() {
        let temp = TempDir::new().unwrap();
        let file = GeneratedFile::new("batis.toml", "starter").if_missing();

        assert_eq!(file.write(temp.path()).unwrap(), WriteStatus::Written);
    }
}
