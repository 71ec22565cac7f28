//! HTTP handlers for catalog content and its genre tags.
//! Input validation happens here; everything else is delegated to
//! `ContentService` and `GenreReconciler`.

use crate::{
    errors::AppError,
    models::content::{Content, ContentInput},
    services::content_service::ContentError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// GET `/contents` — every catalog item.
pub async fn list_contents(State(state): State<AppState>) -> Result<Json<Vec<Content>>, AppError> {
    let contents = state.contents.get_many().await?;
    if contents.is_empty() && state.empty_list_not_found {
        tracing::info!("catalog is empty");
        return Err(AppError::not_found("no content available"));
    }
    Ok(Json(contents))
}

/// GET `/contents/{id}`
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Content>, AppError> {
    let content = state.contents.get(id).await?;
    Ok(Json(content))
}

/// POST `/contents` — create from a partial record.
pub async fn create_content(
    State(state): State<AppState>,
    Json(input): Json<ContentInput>,
) -> Result<Json<Content>, AppError> {
    input.validate().map_err(ContentError::from)?;
    let content = state.contents.create(&input).await?;
    Ok(Json(content))
}

/// PATCH `/contents/{id}` — full replace; omitted fields are cleared.
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ContentInput>,
) -> Result<Json<Content>, AppError> {
    input.validate().map_err(ContentError::from)?;
    let content = state.contents.update(id, &input).await?;
    Ok(Json(content))
}

/// DELETE `/contents/{id}` — responds with the removed id.
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Uuid>, AppError> {
    let deleted = state.contents.delete(id).await?;
    Ok(Json(deleted))
}

/// POST `/contents/{id}/genre` — add tags, empty 200 on success.
pub async fn add_genres(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(genres): Json<Vec<String>>,
) -> Result<StatusCode, AppError> {
    state.genres.add_genres(id, &genres).await?;
    Ok(StatusCode::OK)
}

/// DELETE `/contents/{id}/genre` — remove tags, empty 200 on success.
pub async fn remove_genres(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(genres): Json<Vec<String>>,
) -> Result<StatusCode, AppError> {
    state.genres.remove_genres(id, &genres).await?;
    Ok(StatusCode::OK)
}
