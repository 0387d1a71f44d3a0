use std::path::PathBuf;
use std::sync::Arc;

use crate::content::store::ContentStore;
use crate::gallery::ViewDefaults;
use crate::media::lister::FolderLister;

/// Shared application state injected into all route handlers via axum::extract::State.
/// Everything is immutable after startup; content is re-read from disk per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub lister: Arc<dyn FolderLister>,
    /// Served at `/images`.
    pub images_dir: Arc<PathBuf>,
    pub defaults: Arc<ViewDefaults>,
}
