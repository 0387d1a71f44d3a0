use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::media::MediaError;

/// Capability that enumerates the filenames inside a gallery folder.
///
/// The aggregator only ever sees this trait, so the folder source can be the
/// real filesystem or an in-memory map in tests.
pub trait FolderLister: Send + Sync {
    /// Filenames (not paths) present directly in `path`, in a stable order.
    fn list_files(&self, path: &str) -> Result<Vec<String>, MediaError>;
}

/// Lists folders relative to a root directory on disk, e.g.
/// `public/images/gallery/content`.
#[derive(Debug, Clone)]
pub struct FsFolderLister {
    root: PathBuf,
}

impl FsFolderLister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Join `relative` onto `root`, refusing anything that could leave `root`
/// (`..`, absolute paths, drive prefixes).
pub(crate) fn confine(root: &Path, relative: &str) -> Option<PathBuf> {
    let mut out = root.to_path_buf();
    for component in Path::new(relative.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(out)
}

impl FolderLister for FsFolderLister {
    fn list_files(&self, path: &str) -> Result<Vec<String>, MediaError> {
        let unavailable = |reason: String| MediaError::FolderUnavailable {
            path: path.to_string(),
            reason,
        };

        let dir = confine(&self.root, path)
            .ok_or_else(|| unavailable("path escapes the gallery root".to_string()))?;
        if !dir.is_dir() {
            return Err(unavailable(format!("{} is not a directory", dir.display())));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // Depth 0 is the folder itself: unreadable folder, no images.
                Err(e) if e.depth() == 0 => return Err(unavailable(e.to_string())),
                Err(e) => {
                    // A broken symlink or unreadable file loses only itself.
                    tracing::warn!(folder = %path, error = %e, "Skipping unreadable gallery entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => files.push(name.to_string()),
                None => tracing::debug!("Skipping non UTF-8 filename in {}", dir.display()),
            }
        }
        Ok(files)
    }
}

/// Folder listings held in memory. Folders not inserted are reported as
/// unavailable, the same as a missing directory on disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryFolderLister {
    folders: HashMap<String, Vec<String>>,
}

impl MemoryFolderLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folder<I, S>(mut self, path: &str, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(path, files);
        self
    }

    pub fn insert<I, S>(&mut self, path: &str, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folders
            .insert(path.to_string(), files.into_iter().map(Into::into).collect());
    }
}

impl FolderLister for MemoryFolderLister {
    fn list_files(&self, path: &str) -> Result<Vec<String>, MediaError> {
        self.folders
            .get(path)
            .cloned()
            .ok_or_else(|| MediaError::FolderUnavailable {
                path: path.to_string(),
                reason: "no such folder".to_string(),
            })
    }
}
