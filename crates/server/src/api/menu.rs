//! # Menu API
//!
//! Read endpoints for the ordering views and the admin panel's menu edits.
//! Edits are accepted without field validation; a targeted update only
//! fails when its path does not address an existing item.

use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use lucyblu_core::menu::{ItemPath, MenuItem, MenuSection};

use crate::{ApiResponse, SharedState};

/// Filters for the menu listing.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// When true, hide items not available for collection/delivery.
    #[serde(default)]
    pub delivery: bool,
}

/// Full-catalog replacement payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceMenuRequest {
    #[schema(value_type = Vec<Object>)]
    pub sections: Vec<MenuSection>,
}

/// Targeted single-item update payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    #[schema(value_type = Object)]
    pub path: ItemPath,
    #[schema(value_type = Object)]
    pub item: MenuItem,
}

pub fn menu_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_menu).put(replace_menu))
        .route("/sections/:id", get(get_section))
        .route("/items", put(update_item))
}

/// List all menu sections
#[utoipa::path(
    get,
    path = "/api/v1/menu",
    tag = "menu",
    params(("delivery" = Option<bool>, Query, description = "Hide items unavailable for delivery")),
    responses(
        (status = 200, description = "Menu sections in display order")
    )
)]
pub async fn list_menu(
    State(state): State<SharedState>,
    Query(query): Query<MenuQuery>,
) -> Json<Vec<MenuSection>> {
    let sections = state.catalog.read().await.sections().to_vec();
    if query.delivery {
        Json(delivery_only(sections))
    } else {
        Json(sections)
    }
}

/// Get one menu section by id
#[utoipa::path(
    get,
    path = "/api/v1/menu/sections/{id}",
    tag = "menu",
    params(("id" = String, Path, description = "Section id")),
    responses(
        (status = 200, description = "The section, or null when the id is unknown")
    )
)]
pub async fn get_section(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Json<Option<MenuSection>> {
    Json(state.catalog.read().await.section(&id).cloned())
}

/// Replace the entire menu
#[utoipa::path(
    put,
    path = "/api/v1/menu",
    tag = "menu",
    request_body = ReplaceMenuRequest,
    responses(
        (status = 200, description = "Menu replaced", body = ApiResponse)
    )
)]
pub async fn replace_menu(
    State(state): State<SharedState>,
    Json(req): Json<ReplaceMenuRequest>,
) -> Json<ApiResponse> {
    let count = req.sections.len();
    state.catalog.write().await.replace(req.sections);
    Json(ApiResponse {
        success: true,
        message: format!("Menu replaced with {} sections", count),
    })
}

/// Update one item by its (section, sub, item) path
#[utoipa::path(
    put,
    path = "/api/v1/menu/items",
    tag = "menu",
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Update result", body = ApiResponse)
    )
)]
pub async fn update_item(
    State(state): State<SharedState>,
    Json(req): Json<UpdateItemRequest>,
) -> Json<ApiResponse> {
    // Typing a new modifier name in the editor creates the group; the two
    // virtual names stay known without an entry.
    {
        let mut registry = state.modifiers.write().await;
        for group in &req.item.modifiers {
            if !registry.is_known(group) {
                registry.create_group(group);
            }
        }
    }

    let name = req.item.name.clone();
    match state.catalog.write().await.update_item(req.path, req.item) {
        Ok(()) => Json(ApiResponse {
            success: true,
            message: format!("Saved '{}'", name),
        }),
        Err(e) => Json(ApiResponse {
            success: false,
            message: e.to_string(),
        }),
    }
}

fn delivery_only(sections: Vec<MenuSection>) -> Vec<MenuSection> {
    sections
        .into_iter()
        .map(|mut section| {
            for sub in &mut section.content {
                sub.items.retain(|item| item.available_for_delivery);
            }
            section
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucyblu_core::menu::Catalog;

    #[test]
    fn test_delivery_filter_drops_unavailable_items() {
        let mut sections = Catalog::seed().sections().to_vec();
        sections[0].content[0].items[0].available_for_delivery = false;
        let total_before: usize = sections
            .iter()
            .flat_map(|s| &s.content)
            .map(|sub| sub.items.len())
            .sum();

        let filtered = delivery_only(sections);
        let total_after: usize = filtered
            .iter()
            .flat_map(|s| &s.content)
            .map(|sub| sub.items.len())
            .sum();
        assert_eq!(total_after, total_before - 1);
    }
}
