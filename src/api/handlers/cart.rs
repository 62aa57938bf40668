//! Booking-cart request handlers.
//!
//! All cart routes require authentication; the verified user id scopes
//! every operation.

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value as JsonValue;

use crate::api::doc::CART_TAG;
use crate::api::dto::{
    AddCartItemRequest, CartItemResponse, CartItemViewResponse, CartListResponse, SuccessResponse,
};
use crate::api::extract::ApiJson;
use crate::api::middleware::AuthUser;
use crate::error::AppError;
use crate::services::CartDraft;
use crate::state::AppState;

/// Creates cart routes. Authentication is layered on by the caller.
///
/// Routes:
/// - GET /          - List the caller's cart
/// - POST /         - Add one item
/// - DELETE /{id}   - Remove one item
/// - POST /merge    - Merge a guest cart
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cart).post(add_cart_item))
        .route("/{id}", axum::routing::delete(delete_cart_item))
        .route("/merge", post(merge_guest_cart))
}

/// GET /api/cart - List the caller's cart with coach display fields
#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart items", body = CartListResponse)
    ),
    security(("bearerAuth" = [])),
    tag = CART_TAG
)]
pub async fn list_cart(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<CartListResponse>, AppError> {
    let items = state.services.cart.list_items(auth.user_id).await?;
    Ok(Json(CartListResponse {
        items: items.into_iter().map(CartItemViewResponse::from).collect(),
    }))
}

/// POST /api/cart - Add one booking draft to the caller's cart
#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddCartItemRequest,
    responses(
        (status = 201, description = "Item added", body = CartItemResponse),
        (status = 400, description = "Missing fields or invalid player reference")
    ),
    security(("bearerAuth" = [])),
    tag = CART_TAG
)]
pub async fn add_cart_item(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiJson(payload): ApiJson<AddCartItemRequest>,
) -> Result<(StatusCode, Json<CartItemResponse>), AppError> {
    let item = state
        .services
        .cart
        .add_item(auth.user_id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(CartItemResponse::from(item))))
}

/// DELETE /api/cart/{id} - Remove one cart item
///
/// Succeeds whether or not the id exists for the caller; deleting another
/// user's item affects nothing and still reports success.
#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    params(("id" = i32, Path, description = "Cart item ID")),
    responses(
        (status = 200, description = "Deletion acknowledged", body = SuccessResponse)
    ),
    security(("bearerAuth" = [])),
    tag = CART_TAG
)]
pub async fn delete_cart_item(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.services.cart.remove_item(auth.user_id, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/cart/merge - Merge a guest cart into the caller's cart
///
/// The body must be a JSON array of booking drafts. Every draft is
/// validated before anything is stored; one bad draft fails the whole
/// batch.
#[utoipa::path(
    post,
    path = "/api/cart/merge",
    request_body = Vec<AddCartItemRequest>,
    responses(
        (status = 201, description = "Merged items", body = Vec<CartItemResponse>),
        (status = 400, description = "Body is not an array or a draft is invalid")
    ),
    security(("bearerAuth" = [])),
    tag = CART_TAG
)]
pub async fn merge_guest_cart(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiJson(payload): ApiJson<JsonValue>,
) -> Result<(StatusCode, Json<Vec<CartItemResponse>>), AppError> {
    if !payload.is_array() {
        return Err(AppError::InvalidFormat {
            message: "guest_cart must be an array of booking drafts".to_string(),
        });
    }
    let drafts: Vec<CartDraft> =
        serde_json::from_value(payload).map_err(|e| AppError::InvalidFormat {
            message: format!("Invalid guest cart payload: {}", e),
        })?;

    let created = state
        .services
        .cart
        .merge_guest_cart(auth.user_id, drafts)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(created.into_iter().map(CartItemResponse::from).collect()),
    ))
}
