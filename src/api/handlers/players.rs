//! Player profile request handlers.
//!
//! All player routes require authentication and operate only on rows owned
//! by the caller; a foreign player id behaves exactly like a missing one.

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use validator::Validate;

use crate::api::doc::PLAYER_TAG;
use crate::api::dto::{CreatePlayerRequest, PlayerResponse, SuccessResponse, UpdatePlayerRequest};
use crate::api::extract::ApiJson;
use crate::api::middleware::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates player routes. Authentication is layered on by the caller.
///
/// Routes:
/// - GET /        - List the caller's players
/// - POST /       - Create a player
/// - GET /{id}    - Get one player
/// - PUT /{id}    - Update one player
/// - DELETE /{id} - Delete one player
pub fn player_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_players).post(create_player))
        .route(
            "/{id}",
            get(get_player).put(update_player).delete(delete_player),
        )
}

/// GET /api/players - List the caller's players
#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "Players", body = Vec<PlayerResponse>)
    ),
    security(("bearerAuth" = [])),
    tag = PLAYER_TAG
)]
pub async fn list_players(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    let players = state.services.players.list_players(auth.user_id).await?;
    Ok(Json(players.into_iter().map(PlayerResponse::from).collect()))
}

/// POST /api/players - Create a player owned by the caller
#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player created", body = PlayerResponse),
        (status = 400, description = "Missing fields, invalid date of birth, or field out of bounds")
    ),
    security(("bearerAuth" = [])),
    tag = PLAYER_TAG
)]
pub async fn create_player(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiJson(payload): ApiJson<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), AppError> {
    payload.validate()?;
    let player = state
        .services
        .players
        .create_player(auth.user_id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(PlayerResponse::from(player))))
}

/// GET /api/players/{id} - Get one of the caller's players
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Player", body = PlayerResponse),
        (status = 404, description = "Player not found")
    ),
    security(("bearerAuth" = [])),
    tag = PLAYER_TAG
)]
pub async fn get_player(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<PlayerResponse>, AppError> {
    let player = state.services.players.get_player(auth.user_id, id).await?;
    Ok(Json(PlayerResponse::from(player)))
}

/// PUT /api/players/{id} - Update one of the caller's players
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    params(("id" = i32, Path, description = "Player ID")),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Updated player", body = PlayerResponse),
        (status = 400, description = "Invalid date of birth or field out of bounds"),
        (status = 404, description = "Player not found")
    ),
    security(("bearerAuth" = [])),
    tag = PLAYER_TAG
)]
pub async fn update_player(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdatePlayerRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    payload.validate()?;
    let player = state
        .services
        .players
        .update_player(auth.user_id, id, payload.into())
        .await?;
    Ok(Json(PlayerResponse::from(player)))
}

/// DELETE /api/players/{id} - Delete one of the caller's players
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Player deleted", body = SuccessResponse),
        (status = 404, description = "Player not found")
    ),
    security(("bearerAuth" = [])),
    tag = PLAYER_TAG
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .services
        .players
        .delete_player(auth.user_id, id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
