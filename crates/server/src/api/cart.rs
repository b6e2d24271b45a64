//! # Cart API
//!
//! Configuring an item opens a server-held draft (a snapshot of the item,
//! its modifier groups, and the derived topping lists); adding to the cart
//! consumes the draft and prices the line against that snapshot, so menu
//! edits mid-configuration cannot shift a customer's selections.

use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use lucyblu_core::cart::CartLine;
use lucyblu_core::configure::{ConfigurationDraft, Selections};
use lucyblu_core::menu::ItemPath;

use crate::{ApiResponse, SharedState};

/// Open drafts kept at most this many; the oldest are dropped past it so
/// abandoned configuration views cannot grow memory without bound.
const MAX_OPEN_DRAFTS: usize = 256;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConfigureRequest {
    #[schema(value_type = Object)]
    pub path: ItemPath,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigureResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub draft: Option<ConfigurationDraft>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddLineRequest {
    pub draft_id: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub selections: Selections,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddLineResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub line: Option<CartLine>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    #[schema(value_type = Vec<Object>)]
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub item_count: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuantityRequest {
    pub delta: i32,
}

pub fn cart_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(get_cart).delete(clear_cart))
        .route("/configure", post(configure_item))
        .route("/items", post(add_line))
        .route("/items/:id", delete(remove_line))
        .route("/items/:id/quantity", patch(update_quantity))
}

/// Open a configuration draft for the item at the given path
#[utoipa::path(
    post,
    path = "/api/v1/cart/configure",
    tag = "cart",
    request_body = ConfigureRequest,
    responses(
        (status = 200, description = "Draft with defaults and topping snapshots", body = ConfigureResponse)
    )
)]
pub async fn configure_item(
    State(state): State<SharedState>,
    Json(req): Json<ConfigureRequest>,
) -> Json<ConfigureResponse> {
    let draft = {
        let catalog = state.catalog.read().await;
        let registry = state.modifiers.read().await;
        catalog
            .item(req.path)
            .map(|item| ConfigurationDraft::open(req.path, item, &registry, &catalog))
    };

    match draft {
        Some(draft) => {
            let mut drafts = state.drafts.write().await;
            while drafts.len() >= MAX_OPEN_DRAFTS {
                let oldest = drafts
                    .iter()
                    .min_by_key(|(_, d)| d.opened_at)
                    .map(|(id, _)| id.clone());
                match oldest {
                    Some(id) => drafts.remove(&id),
                    None => break,
                };
            }
            drafts.insert(draft.id.clone(), draft.clone());
            Json(ConfigureResponse {
                success: true,
                draft: Some(draft),
                error: None,
            })
        }
        None => Json(ConfigureResponse {
            success: false,
            draft: None,
            error: Some("No menu item at that path".to_string()),
        }),
    }
}

/// Price the selections against their draft and append a cart line
#[utoipa::path(
    post,
    path = "/api/v1/cart/items",
    tag = "cart",
    request_body = AddLineRequest,
    responses(
        (status = 200, description = "The appended line", body = AddLineResponse)
    )
)]
pub async fn add_line(
    State(state): State<SharedState>,
    Json(req): Json<AddLineRequest>,
) -> Json<AddLineResponse> {
    let draft = state.drafts.write().await.remove(&req.draft_id);
    match draft {
        Some(draft) => {
            let line = draft.build_line(&req.selections);
            state.cart.write().await.add(line.clone());
            Json(AddLineResponse {
                success: true,
                line: Some(line),
                error: None,
            })
        }
        None => Json(AddLineResponse {
            success: false,
            line: None,
            error: Some(format!("No open configuration '{}'", req.draft_id)),
        }),
    }
}

/// Current cart contents and totals
#[utoipa::path(
    get,
    path = "/api/v1/cart",
    tag = "cart",
    responses(
        (status = 200, description = "Cart lines with totals", body = CartResponse)
    )
)]
pub async fn get_cart(State(state): State<SharedState>) -> Json<CartResponse> {
    let cart = state.cart.read().await;
    Json(CartResponse {
        lines: cart.lines().to_vec(),
        total: cart.total(),
        item_count: cart.item_count(),
    })
}

/// Adjust a line's quantity by a delta (clamped to at least 1)
#[utoipa::path(
    patch,
    path = "/api/v1/cart/items/{id}/quantity",
    tag = "cart",
    params(("id" = String, Path, description = "Cart line id")),
    request_body = QuantityRequest,
    responses(
        (status = 200, description = "The updated line", body = AddLineResponse)
    )
)]
pub async fn update_quantity(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<QuantityRequest>,
) -> Json<AddLineResponse> {
    let mut cart = state.cart.write().await;
    match cart.update_quantity(&id, req.delta) {
        Some(line) => Json(AddLineResponse {
            success: true,
            line: Some(line.clone()),
            error: None,
        }),
        None => Json(AddLineResponse {
            success: false,
            line: None,
            error: Some(format!("No cart line '{}'", id)),
        }),
    }
}

/// Remove a cart line
#[utoipa::path(
    delete,
    path = "/api/v1/cart/items/{id}",
    tag = "cart",
    params(("id" = String, Path, description = "Cart line id")),
    responses(
        (status = 200, description = "Removal result", body = ApiResponse)
    )
)]
pub async fn remove_line(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Json<ApiResponse> {
    state.cart.write().await.remove(&id);
    Json(ApiResponse {
        success: true,
        message: "Line removed".to_string(),
    })
}

/// Empty the cart
#[utoipa::path(
    delete,
    path = "/api/v1/cart",
    tag = "cart",
    responses(
        (status = 200, description = "Cart cleared", body = ApiResponse)
    )
)]
pub async fn clear_cart(State(state): State<SharedState>) -> Json<ApiResponse> {
    state.cart.write().await.clear();
    Json(ApiResponse {
        success: true,
        message: "Cart cleared".to_string(),
    })
}
