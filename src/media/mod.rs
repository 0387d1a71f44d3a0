pub mod aggregator;
pub mod lister;
pub mod mime;
pub mod video;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The folder does not exist or could not be read.
    #[error("gallery folder {path:?} unavailable: {reason}")]
    FolderUnavailable { path: String, reason: String },
}
