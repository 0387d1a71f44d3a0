use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::content::{CompletedProject, Partner};
use crate::gallery::{
    album_detail, album_summary, featured_projects, gallery_stats, AlbumDetail, AlbumSummary,
    GalleryStats, FEATURED_PROJECT_COUNT,
};
use crate::http::error::{AppError, AppResult};
use crate::http::state::AppState;

/// `{ "data": T }` envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct GalleryIndex {
    pub stats: GalleryStats,
    pub albums: Vec<AlbumSummary>,
}

/// Content reads and folder listings are blocking filesystem calls; keep them
/// off the async workers.
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("blocking task failed: {e}")))?
}

/// GET /api/gallery — index totals plus one card per album.
pub async fn gallery_index(State(state): State<AppState>) -> AppResult<Json<GalleryIndex>> {
    let index = run_blocking(move || {
        let albums = state.store.all()?;
        let lister = state.lister.as_ref();
        let stats = gallery_stats(albums.iter().map(|(_, album)| album), lister);
        let cards = albums
            .iter()
            .map(|(id, album)| album_summary(id, album, lister, &state.defaults))
            .collect();
        Ok(GalleryIndex { stats, albums: cards })
    })
    .await?;
    Ok(Json(index))
}

/// GET /api/gallery/{id} — the album page.
pub async fn gallery_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AlbumDetail>> {
    let detail = run_blocking(move || {
        let album = state
            .store
            .read(&id)?
            .ok_or_else(|| AppError::MissingRecord(id.clone()))?;
        Ok(album_detail(&id, &album, state.lister.as_ref(), &state.defaults))
    })
    .await?;
    Ok(Json(detail))
}

/// GET /api/projects — the latest completed projects for the home page.
pub async fn projects(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CompletedProject>>>> {
    let projects = run_blocking(move || Ok(state.store.projects()?)).await?;
    Ok(Json(DataResponse {
        data: featured_projects(projects, FEATURED_PROJECT_COUNT),
    }))
}

/// GET /api/partners
pub async fn partners(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Partner>>>> {
    let partners = run_blocking(move || Ok(state.store.partners()?)).await?;
    Ok(Json(DataResponse { data: partners }))
}
