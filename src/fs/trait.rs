//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
}

/// Abstraction over the file system operations a scan needs, so extraction
/// logic can be tested without touching disk
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read file contents as UTF-8 text
    ///
    /// Fails for missing files, unreadable files and files that are not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Recursively list every regular file under `root`
    ///
    /// Paths come back in a stable depth-first order with siblings sorted by
    /// name, so two walks over an unchanged tree yield identical lists.
    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_eq() {
        assert_eq!(FileType::File, FileType::File);
        assert_ne!(FileType::File, FileType::Directory);
    }
}
