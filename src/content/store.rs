use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::content::{AlbumRecord, CompletedProject, Partner};

const GALLERY_DIR: &str = "gallery";
const PROJECTS_DIR: &str = "projects";
const PARTNERS_FILE: &str = "partners.toml";
const ENTRY_EXTENSION: &str = "toml";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Default)]
struct PartnersFile {
    #[serde(default)]
    partners: Vec<Partner>,
}

/// Reads content straight from disk on every call. Nothing is cached, so an
/// edit to a content file shows up on the next request.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Slugs of every album in the gallery collection, sorted.
    pub fn list(&self) -> Result<Vec<String>, ContentError> {
        list_slugs(&self.root.join(GALLERY_DIR))
    }

    /// The album stored under `id`, or `None` when there is no such album.
    /// Ids that are not plain slugs (`../x`, `a/b`) never match.
    pub fn read(&self, id: &str) -> Result<Option<AlbumRecord>, ContentError> {
        if !is_valid_slug(id) {
            return Ok(None);
        }
        let path = entry_path(&self.root.join(GALLERY_DIR), id);
        read_entry(&path)
    }

    /// Every readable album in slug order. A file that fails to read or parse
    /// is logged and skipped; it never hides the other albums.
    pub fn all(&self) -> Result<Vec<(String, AlbumRecord)>, ContentError> {
        let mut albums = Vec::new();
        for slug in self.list()? {
            match self.read(&slug) {
                Ok(Some(album)) => albums.push((slug, album)),
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping album {}: {}", slug, e),
            }
        }
        Ok(albums)
    }

    /// Completed projects in slug order, each tagged with its slug as `id`.
    pub fn projects(&self) -> Result<Vec<CompletedProject>, ContentError> {
        let dir = self.root.join(PROJECTS_DIR);
        let mut projects = Vec::new();
        for slug in list_slugs(&dir)? {
            match read_entry::<CompletedProject>(&entry_path(&dir, &slug)) {
                Ok(Some(mut project)) => {
                    project.id = slug;
                    projects.push(project);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping project {}: {}", slug, e),
            }
        }
        Ok(projects)
    }

    /// The partner directory. A missing `partners.toml` means no partners.
    pub fn partners(&self) -> Result<Vec<Partner>, ContentError> {
        let file: Option<PartnersFile> = read_entry(&self.root.join(PARTNERS_FILE))?;
        Ok(file.unwrap_or_default().partners)
    }
}

fn is_valid_slug(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && !id.contains(['/', '\\'])
}

fn entry_path(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("{slug}.{ENTRY_EXTENSION}"))
}

/// Slugs (file stems) of the `.toml` entries in `dir`. A missing directory is
/// an empty collection.
fn list_slugs(dir: &Path) -> Result<Vec<String>, ContentError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(ContentError::Io {
                path: dir.to_owned(),
                source,
            })
        }
    };

    let mut slugs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ContentError::Io {
            path: dir.to_owned(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if is_valid_slug(stem) {
                slugs.push(stem.to_string());
            }
        }
    }
    slugs.sort();
    Ok(slugs)
}

fn read_entry<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ContentError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ContentError::Io {
                path: path.to_owned(),
                source,
            })
        }
    };
    toml::from_str(&text)
        .map(Some)
        .map_err(|source| ContentError::Parse {
            path: path.to_owned(),
            source,
        })
}
