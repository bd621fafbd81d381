//! Virtual folder view handlers.

use axum::Json;
use axum::extract::{Query, State};

use folderview_entity::folder::FolderStats;
use folderview_service::view::DirectoryPath;

use crate::dto::request::PathQuery;
use crate::dto::response::AssetResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/view/folder/unique-paths
pub async fn unique_paths(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<DirectoryPath>>, ApiError> {
    let directories = state.view_service.list_unique_directories(&auth).await?;
    Ok(Json(directories))
}

/// GET /api/view/folder?path=...
pub async fn folder_contents(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PathQuery>,
) -> Result<Json<Vec<AssetResponse>>, ApiError> {
    let assets = state
        .view_service
        .list_direct_contents(&auth, query.directory())
        .await?;
    Ok(Json(assets.into_iter().map(AssetResponse::from).collect()))
}

/// GET /api/view/folder/stats?path=...
pub async fn folder_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PathQuery>,
) -> Result<Json<Vec<FolderStats>>, ApiError> {
    let stats = state
        .view_service
        .get_folder_stats(&auth, query.directory())
        .await?;
    Ok(Json(stats))
}
