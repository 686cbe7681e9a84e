use crate::dtos::{MenuItemPayload, MenuItemResponse};
use crate::handlers::{JsonOrEmpty, MenuError};
use crate::services::observe_store;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[tracing::instrument(skip(state, payload))]
pub async fn create_menu_item(
    State(state): State<AppState>,
    JsonOrEmpty(payload): JsonOrEmpty<MenuItemPayload>,
) -> Result<(StatusCode, &'static str), MenuError> {
    let Some(item) = payload.to_new_item() else {
        return Err(MenuError::MissingFields);
    };
    payload.check()?;

    let saved = observe_store("insert", state.store.insert(item))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to add menu item");
            MenuError::Create(e)
        })?;

    tracing::info!(menu_item_id = %saved.id, name = %saved.name, "Menu item created");

    Ok((StatusCode::CREATED, "The new item is added successfully"))
}

#[tracing::instrument(skip(state, payload))]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrEmpty(payload): JsonOrEmpty<MenuItemPayload>,
) -> Result<Json<MenuItemResponse>, MenuError> {
    payload.check()?;

    let updated = observe_store(
        "update",
        state.store.update_by_id(&id, payload.into_changes()),
    )
    .await
    .map_err(|e| {
        tracing::warn!(error = %e, "Failed to update menu item");
        MenuError::Store(e)
    })?
    .ok_or(MenuError::NotFound)?;

    tracing::info!(menu_item_id = %updated.id, "Menu item updated");

    Ok(Json(MenuItemResponse::from(updated)))
}

#[tracing::instrument(skip(state))]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, MenuError> {
    let deleted = observe_store("delete", state.store.delete_by_id(&id))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to delete menu item");
            MenuError::Store(e)
        })?
        .ok_or(MenuError::NotFound)?;

    tracing::info!(menu_item_id = %deleted.id, "Menu item deleted");

    Ok("Menu item deleted successfully")
}
