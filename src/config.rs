use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::gallery::ViewDefaults;

const DEFAULT_PORT: u16 = 8300;
const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Images live under `<public>/images`, served at `/images`.
pub const IMAGES_DIR: &str = "images";
/// Folder-scanned albums live under `<public>/images/gallery/content`.
pub const GALLERY_FOLDER_ROOT: &str = "images/gallery/content";

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub localhost: Option<bool>,
    pub content_dir: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
    pub default_location: Option<String>,
    pub default_cover: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub localhost: bool,
    pub content_dir: PathBuf,
    pub public_dir: PathBuf,
    pub defaults: ViewDefaults,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        let stock = ViewDefaults::default();
        Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            localhost: args.localhost || file.localhost.unwrap_or(false),
            content_dir: args
                .content_dir
                .clone()
                .or(file.content_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR)),
            public_dir: args
                .public_dir
                .clone()
                .or(file.public_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            defaults: ViewDefaults {
                location: file.default_location.unwrap_or(stock.location),
                cover_image: file.default_cover.unwrap_or(stock.cover_image),
                folder_url_base: format!("/{GALLERY_FOLDER_ROOT}"),
            },
        }
    }

    /// Directory the folder lister is rooted at.
    pub fn gallery_folder_root(&self) -> PathBuf {
        self.public_dir.join(GALLERY_FOLDER_ROOT)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.public_dir.join(IMAGES_DIR)
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("galerie.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    dirs::config_dir()
        .map(|dir| dir.join("galerie").join("config.toml"))
        .filter(|path| path.exists())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
