use super::{ConstantTable, Replacement, ScanError, Source, VariableIndex};
use crate::extractors::{DefineExtractor, VariableExtractor, VariableMatch};
use crate::fs::FileSystem;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Everything one scan produced
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub index: VariableIndex,
    pub constants: ConstantTable,
    /// Every call-site match in scan order, before substitution
    pub matches: Vec<VariableMatch>,
    /// Matches that did not resolve to a string literal
    pub needs_review: Vec<VariableMatch>,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub scan_time_ms: u64,
}

impl ScanResult {
    /// How each non-literal call-site token expanded, in scan order
    pub fn replacements(&self) -> Vec<Replacement> {
        self.matches
            .iter()
            .map(|m| {
                if m.is_literal() {
                    Replacement::Literal(m.raw.clone())
                } else {
                    match self.constants.get(&m.raw) {
                        Some(value) => Replacement::Expanded {
                            from: m.raw.clone(),
                            to: value.to_string(),
                        },
                        None => Replacement::Unresolved(m.raw.clone()),
                    }
                }
            })
            .collect()
    }
}

pub struct VariableScanner<F: FileSystem> {
    fs: F,
    base: PathBuf,
    dirs: Vec<PathBuf>,
    variables: VariableExtractor,
    defines: DefineExtractor,
}

impl<F: FileSystem> VariableScanner<F> {
    /// Creates a scanner over `base` itself. Use [`with_dirs`](Self::with_dirs)
    /// to restrict it to subdirectories.
    pub fn new(fs: F, base: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let base = base.into();

        if !fs.exists(&base) {
            return Err(ScanError::BaseNotFound(base));
        }
        if !fs.is_dir(&base) {
            return Err(ScanError::NotADirectory(base));
        }

        debug!(base = %base.display(), "VariableScanner initialized");

        Ok(Self {
            fs,
            base,
            dirs: vec![PathBuf::new()],
            variables: VariableExtractor::new(),
            defines: DefineExtractor::new(),
        })
    }

    /// Directories relative to the base to traverse, in order
    pub fn with_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        let start = Instant::now();

        info!(
            base = %self.base.display(),
            dirs = ?self.dirs,
            "Starting variable scan"
        );

        let files = self.collect_files()?;

        let mut constants = ConstantTable::new();
        let mut matches = Vec::new();
        let mut files_scanned = 0;
        let mut files_skipped = 0;

        for file in &files {
            let filename = match file.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => {
                    warn!(path = %file.display(), "Skipping file with a non UTF-8 name");
                    files_skipped += 1;
                    continue;
                }
            };

            let wants_defines = self.defines.handles(filename);
            let wants_variables = self.variables.handles(filename);
            if !wants_defines && !wants_variables {
                continue;
            }

            let content = match self.fs.read_to_string(file) {
                Ok(c) => c,
                Err(err) => {
                    warn!(path = %file.display(), error = %err, "Skipping unreadable file");
                    files_skipped += 1;
                    continue;
                }
            };
            files_scanned += 1;

            if wants_defines {
                constants.extend(self.defines.extract(&content));
            }

            if wants_variables {
                let rel_dir = self.relative_dir(file);
                let found = self.variables.extract(&content, &rel_dir, filename);
                if !found.is_empty() {
                    debug!(path = %file.display(), matches = found.len(), "Found variable references");
                }
                matches.extend(found);
            }
        }

        let (index, needs_review) = build_index(&matches, &constants);

        let scan_time_ms = start.elapsed().as_millis() as u64;

        info!(
            variables = index.len(),
            constants = constants.len(),
            needs_review = needs_review.len(),
            files_scanned,
            files_skipped,
            scan_time_ms,
            "Variable scan completed"
        );

        Ok(ScanResult {
            index,
            constants,
            matches,
            needs_review,
            files_scanned,
            files_skipped,
            scan_time_ms,
        })
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();

        for dir in &self.dirs {
            let root = if dir.as_os_str().is_empty() {
                self.base.clone()
            } else {
                self.base.join(dir)
            };
            if !self.fs.is_dir(&root) {
                return Err(ScanError::DirectoryNotFound(root));
            }

            let found = self.fs.walk_files(&root).map_err(|e| ScanError::Walk {
                path: root.clone(),
                message: e.to_string(),
            })?;

            debug!(dir = %root.display(), files = found.len(), "Collected files");
            files.extend(found);
        }

        Ok(files)
    }

    /// Parent directory of `file` relative to the base, always `/`-separated
    fn relative_dir(&self, file: &Path) -> String {
        let parent = file.parent().unwrap_or(Path::new(""));
        let relative = parent.strip_prefix(&self.base).unwrap_or(parent);

        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Folds raw matches into the index, substituting constants one level deep.
/// Tokens that are still not string literals go to the review list.
fn build_index(
    matches: &[VariableMatch],
    constants: &ConstantTable,
) -> (VariableIndex, Vec<VariableMatch>) {
    let mut index = VariableIndex::new();
    let mut needs_review = Vec::new();

    for m in matches {
        let resolved = constants.resolve(&m.raw);

        if !resolved.contains('"') {
            needs_review.push(m.clone());
            continue;
        }

        let name = resolved.replace('"', "");
        index.insert(&name, Source::new(m.path.clone(), m.filename.clone(), m.line));
    }

    (index, needs_review)
}
