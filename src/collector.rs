// -- submodules
mod filters;

pub use filters::{IGNORE_DIRS, ImageFormat, extension_of, is_hidden, is_image_name};

// -- external imports
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

use crate::error::{AppError, Result};
use crate::progress_bar::walk_spinner;

/// Recursive image path collector rooted at a directory.
#[derive(Debug, Clone)]
pub struct PathCollector {
    /// Scan root, resolved to an absolute path when collecting
    root: PathBuf,

    /// Directory names pruned from the walk
    ignore_dirs: Vec<String>,

    /// Draw a spinner on stderr while walking
    progress: bool,
}

impl PathCollector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_dirs: IGNORE_DIRS.iter().map(|d| d.to_string()).collect(),
            progress: false,
        }
    }

    /// Extend the fixed ignore set. Entries already present are kept once.
    pub fn with_extra_ignore_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            let dir = dir.into();
            if !self.ignore_dirs.contains(&dir) {
                self.ignore_dirs.push(dir);
            }
        }
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.ignore_dirs.iter().any(|d| *d == name)
    }

    /// Walk the root and return sorted, root-relative, `/`-separated image paths.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if:
    /// - The root cannot be resolved to an absolute path
    /// - Any directory entry cannot be read during the walk
    pub fn collect(&self) -> Result<Vec<String>> {
        let start_time = Instant::now();
        let root = std::fs::canonicalize(&self.root).map_err(|e| {
            AppError::PathResolve(format!("cannot resolve scan root {:?}: {}", self.root, e))
        })?;
        tracing::debug!("Scanning images under {:?}", root);

        let spinner = walk_spinner(self.progress);
        let mut image_paths = vec![];

        // Root-relative segments only: the root itself is depth 0 and never pruned.
        // Matching absolute segments instead would empty the manifest for a checkout
        // living under e.g. `/x/build/`.
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_ignored(entry));

        for entry in walker {
            let entry = entry?;
            spinner.inc(1);

            let name = entry.file_name().to_string_lossy();
            if is_hidden(&name) || !is_image_name(&name) {
                continue;
            }
            if !entry.path().is_file() {
                continue;
            }

            let rel_path = entry.path().strip_prefix(&root).map_err(|e| {
                AppError::PathResolve(format!("{:?} is outside {:?}: {}", entry.path(), root, e))
            })?;
            image_paths.push(to_slash_path(rel_path));
        }
        spinner.finish_and_clear();

        image_paths.sort();
        tracing::info!(
            "Collected {} image paths in {:.3?}",
            image_paths.len(),
            start_time.elapsed()
        );
        Ok(image_paths)
    }
}

/// Join path components with `/` regardless of the host separator.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Collect image paths under `root` with the default ignore set and no spinner.
pub fn collect_image_paths(root: &Path) -> Result<Vec<String>> {
    PathCollector::new(root).collect()
}

// -- tests
