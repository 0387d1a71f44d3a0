use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

use crate::http::state::AppState;
use crate::media::lister::confine;
use crate::media::mime::content_type;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// GET /images/{*path} — stream a file from the public images directory.
/// Paths that try to leave the directory get the same 404 as missing files.
pub async fn serve_image(State(state): State<AppState>, Path(rel): Path<String>) -> Response {
    let Some(path) = confine(&state.images_dir, &rel) else {
        tracing::debug!("Rejected image path outside public dir: {}", rel);
        return StatusCode::NOT_FOUND.into_response();
    };

    let file = match tokio::fs::File::open(&path).await {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return StatusCode::NOT_FOUND.into_response();
        }
        Err(e) => {
            tracing::error!("Failed to open file {}: {}", path.display(), e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let meta = match file.metadata().await {
        Ok(m) if m.is_file() => m,
        Ok(_) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Failed to stat file {}: {}", path.display(), e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type(&rel).unwrap_or(FALLBACK_CONTENT_TYPE)),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(meta.len()));

    let body = Body::from_stream(ReaderStream::new(file));
    (StatusCode::OK, headers, body).into_response()
}
