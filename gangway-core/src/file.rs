//! Writing rendered artifacts to disk.

use std::path::{Path, PathBuf};

use eyre::Result;

/// A rendered artifact waiting to be written.
///
/// Generated files are always regenerated in full; there is no merge or
/// keep-if-present behavior.
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("api.ts");

        write_file(&path, "export const x = 1;").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "export const x = 1;");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("api").join("client").join("model.ts");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model.ts");

        fs::write(&path, "stale").unwrap();

        let file = File::new(&path, "fresh");
        file.write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
        assert_eq!(file.content(), "fresh");
        assert_eq!(file.path(), path);
    }
}
