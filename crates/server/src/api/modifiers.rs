//! # Modifier API
//!
//! Admin endpoints for modifier groups and their options, plus the derived
//! topping projections the two virtual groups resolve to.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use lucyblu_core::modifiers::is_virtual_group;
use lucyblu_core::toppings::{self, Topping};

use crate::{ApiResponse, SharedState};

/// New group payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// New option payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddOptionRequest {
    pub option: String,
}

pub fn modifier_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_groups).post(create_group))
        .route("/suggestions", get(list_suggestions))
        .route("/:name", delete(delete_group))
        .route("/:name/options", post(add_option))
        .route("/:name/options/:option", delete(remove_option))
}

pub fn topping_routes() -> Router<SharedState> {
    Router::new()
        .route("/pizza", get(list_pizza_toppings))
        .route("/burger", get(list_burger_toppings))
}

/// List all modifier groups with their options
#[utoipa::path(
    get,
    path = "/api/v1/modifiers",
    tag = "modifiers",
    responses(
        (status = 200, description = "Groups and options in display order")
    )
)]
pub async fn list_groups(State(state): State<SharedState>) -> Json<Value> {
    let registry = state.modifiers.read().await;
    Json(serde_json::to_value(&*registry).unwrap_or_default())
}

/// The item editor's suggestion list (stored groups plus the virtual names)
#[utoipa::path(
    get,
    path = "/api/v1/modifiers/suggestions",
    tag = "modifiers",
    responses(
        (status = 200, description = "Attachable group names")
    )
)]
pub async fn list_suggestions(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.modifiers.read().await.suggested_for_items())
}

/// Create an empty modifier group
#[utoipa::path(
    post,
    path = "/api/v1/modifiers",
    tag = "modifiers",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Creation result", body = ApiResponse)
    )
)]
pub async fn create_group(
    State(state): State<SharedState>,
    Json(req): Json<CreateGroupRequest>,
) -> Json<ApiResponse> {
    if is_virtual_group(&req.name) {
        return Json(ApiResponse {
            success: false,
            message: format!("'{}' is reserved for catalog-derived options", req.name),
        });
    }
    // Duplicate names are silently ignored.
    state.modifiers.write().await.create_group(&req.name);
    Json(ApiResponse {
        success: true,
        message: format!("Group '{}' available", req.name),
    })
}

/// Delete a modifier group
#[utoipa::path(
    delete,
    path = "/api/v1/modifiers/{name}",
    tag = "modifiers",
    params(("name" = String, Path, description = "Group name")),
    responses(
        (status = 200, description = "Deletion result", body = ApiResponse)
    )
)]
pub async fn delete_group(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Json<ApiResponse> {
    state.modifiers.write().await.delete_group(&name);
    Json(ApiResponse {
        success: true,
        message: format!("Group '{}' deleted", name),
    })
}

/// Add an option to a group
#[utoipa::path(
    post,
    path = "/api/v1/modifiers/{name}/options",
    tag = "modifiers",
    params(("name" = String, Path, description = "Group name")),
    request_body = AddOptionRequest,
    responses(
        (status = 200, description = "Addition result", body = ApiResponse)
    )
)]
pub async fn add_option(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Json(req): Json<AddOptionRequest>,
) -> Json<ApiResponse> {
    state.modifiers.write().await.add_option(&name, &req.option);
    Json(ApiResponse {
        success: true,
        message: format!("Option '{}' added to '{}'", req.option, name),
    })
}

/// Remove an option from a group
#[utoipa::path(
    delete,
    path = "/api/v1/modifiers/{name}/options/{option}",
    tag = "modifiers",
    params(
        ("name" = String, Path, description = "Group name"),
        ("option" = String, Path, description = "Option label")
    ),
    responses(
        (status = 200, description = "Removal result", body = ApiResponse)
    )
)]
pub async fn remove_option(
    State(state): State<SharedState>,
    Path((name, option)): Path<(String, String)>,
) -> Json<ApiResponse> {
    state.modifiers.write().await.remove_option(&name, &option);
    Json(ApiResponse {
        success: true,
        message: format!("Option '{}' removed from '{}'", option, name),
    })
}

/// Current pizza toppings, derived from the "Build Your Own" sub-section
#[utoipa::path(
    get,
    path = "/api/v1/toppings/pizza",
    tag = "modifiers",
    responses(
        (status = 200, description = "Derived pizza toppings")
    )
)]
pub async fn list_pizza_toppings(State(state): State<SharedState>) -> Json<Vec<Topping>> {
    Json(toppings::pizza_toppings(&*state.catalog.read().await))
}

/// Current burger extras, derived from the "Burger Toppings" sub-section
#[utoipa::path(
    get,
    path = "/api/v1/toppings/burger",
    tag = "modifiers",
    responses(
        (status = 200, description = "Derived burger extras")
    )
)]
pub async fn list_burger_toppings(State(state): State<SharedState>) -> Json<Vec<Topping>> {
    Json(toppings::burger_toppings(&*state.catalog.read().await))
}
