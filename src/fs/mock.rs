use super::{FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<Vec<u8>>,
    pub file_type: FileType,
}

pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(HashMap::new()),
            root: root.clone(),
        };
        fs.add_dir(root);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.add_bytes(path, content.as_bytes());
    }

    /// Adds a file with raw contents, e.g. bytes that are not valid UTF-8
    pub fn add_bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            self.ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_vec()),
                file_type: FileType::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        self.ensure_parents(&mut files, &path);

        files.insert(
            path,
            MockEntry {
                content: None,
                file_type: FileType::Directory,
            },
        );
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(&self, files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if !files.contains_key(&current) {
                files.insert(
                    current.clone(),
                    MockEntry {
                        content: None,
                        file_type: FileType::Directory,
                    },
                );
            }
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.file_type == FileType::Directory)
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        let bytes = entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))?;

        String::from_utf8(bytes).map_err(|e| anyhow!("File {:?} is not valid UTF-8: {}", path, e))
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !self.is_dir(root) {
            return Err(anyhow!("Directory not found: {:?}", root));
        }

        let root = self.normalize_path(root);
        let files = self.files.read().unwrap();

        // Component-wise PathBuf ordering matches a depth-first walk with sorted siblings
        let mut found: Vec<PathBuf> = files
            .iter()
            .filter(|(path, entry)| entry.file_type == FileType::File && path.starts_with(&root))
            .map(|(path, _)| path.clone())
            .collect();
        found.sort();

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file() {
        let fs = MockFileSystem::new();
        fs.add_file("test.txt", "hello");

        assert!(fs.exists(Path::new("/mock/test.txt")));
        assert!(!fs.is_dir(Path::new("/mock/test.txt")));
    }

    #[test]
    fn test_add_dir() {
        let fs = MockFileSystem::new();
        fs.add_dir("subdir");

        assert!(fs.exists(Path::new("/mock/subdir")));
        assert!(fs.is_dir(Path::new("/mock/subdir")));
    }

    #[test]
    fn test_root_exists_when_empty() {
        let fs = MockFileSystem::new();
        assert!(fs.is_dir(Path::new("/mock")));
        assert!(fs.walk_files(Path::new("/mock")).unwrap().is_empty());
    }

    #[test]
    fn test_read_to_string() {
        let fs = MockFileSystem::new();
        fs.add_file("test.txt", "hello world");

        let content = fs.read_to_string(Path::new("/mock/test.txt")).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_read_to_string_invalid_utf8() {
        let fs = MockFileSystem::new();
        fs.add_bytes("bad.c", &[0xff, 0xfe, 0x00]);

        assert!(fs.read_to_string(Path::new("bad.c")).is_err());
    }

    #[test]
    fn test_walk_files_depth_first_sorted() {
        let fs = MockFileSystem::new();
        fs.add_file("src/z.c", "");
        fs.add_file("src/a/b.c", "");
        fs.add_file("src/a.c", "");
        fs.add_file("other/x.c", "");

        let files = fs.walk_files(Path::new("src")).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/mock/src/a/b.c"),
                PathBuf::from("/mock/src/a.c"),
                PathBuf::from("/mock/src/z.c"),
            ]
        );
    }

    #[test]
    fn test_walk_files_missing_root() {
        let fs = MockFileSystem::new();
        assert!(fs.walk_files(Path::new("nope")).is_err());
    }

    #[test]
    fn test_with_root() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("src/main.c", "int main(void) { return 0; }");

        assert!(fs.exists(Path::new("/repo/src/main.c")));
        assert_eq!(fs.root(), Path::new("/repo"));
    }

    #[test]
    fn test_parent_directories_created() {
        let fs = MockFileSystem::new();
        fs.add_file("a/b/c/file.txt", "content");

        assert!(fs.is_dir(Path::new("/mock/a")));
        assert!(fs.is_dir(Path::new("/mock/a/b")));
        assert!(fs.is_dir(Path::new("/mock/a/b/c")));
        assert!(fs.exists(Path::new("/mock/a/b/c/file.txt")));
    }
}
