//! Coach listing and availability request handlers.

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post},
};

use crate::api::doc::COACH_TAG;
use crate::api::dto::{
    AvailabilityQueryParams, AvailabilityResponse, CoachResponse, SetAvailabilityRequest,
    SuccessResponse,
};
use crate::api::extract::ApiJson;
use crate::api::middleware::{AuthUser, auth_middleware};
use crate::error::AppError;
use crate::state::AppState;

/// Creates coach-related routes.
///
/// Routes:
/// - GET /                                  - List approved coaches (public)
/// - GET /{coach_id}/availability           - Read slots (public)
/// - POST /{coach_id}/availability          - Replace slots for a date (auth)
/// - DELETE /{coach_id}/availability/{date} - Remove slots for a date (auth)
pub fn coach_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/{coach_id}/availability", post(set_availability))
        .route(
            "/{coach_id}/availability/{date}",
            delete(delete_availability),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_coaches))
        .route("/{coach_id}/availability", get(get_availability))
        .merge(protected)
}

/// GET /api/coaches - List approved coaches
#[utoipa::path(
    get,
    path = "/api/coaches",
    responses(
        (status = 200, description = "Approved coaches", body = Vec<CoachResponse>)
    ),
    tag = COACH_TAG
)]
pub async fn list_coaches(State(state): State<AppState>) -> Result<Json<Vec<CoachResponse>>, AppError> {
    let coaches = state.services.coaches.list_coaches().await?;
    Ok(Json(coaches.into_iter().map(CoachResponse::from).collect()))
}

/// GET /api/coaches/{coach_id}/availability - Read a coach's slots
///
/// With `?date=` returns that exact date; without it, the next 30 days
/// ascending. Unknown coaches and empty windows both return an empty list.
#[utoipa::path(
    get,
    path = "/api/coaches/{coach_id}/availability",
    params(
        ("coach_id" = i32, Path, description = "Coach ID"),
        AvailabilityQueryParams
    ),
    responses(
        (status = 200, description = "Availability records", body = Vec<AvailabilityResponse>)
    ),
    tag = COACH_TAG
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path(coach_id): Path<i32>,
    Query(params): Query<AvailabilityQueryParams>,
) -> Result<Json<Vec<AvailabilityResponse>>, AppError> {
    let records = state
        .services
        .availability
        .get_slots(coach_id, params.date.as_deref())
        .await?;
    Ok(Json(
        records.into_iter().map(AvailabilityResponse::from).collect(),
    ))
}

/// POST /api/coaches/{coach_id}/availability - Replace slots for one date
#[utoipa::path(
    post,
    path = "/api/coaches/{coach_id}/availability",
    params(("coach_id" = i32, Path, description = "Coach ID")),
    request_body = SetAvailabilityRequest,
    responses(
        (status = 200, description = "Stored availability", body = AvailabilityResponse),
        (status = 400, description = "Invalid date or slot payload"),
        (status = 404, description = "Coach not found")
    ),
    security(("bearerAuth" = [])),
    tag = COACH_TAG
)]
pub async fn set_availability(
    State(state): State<AppState>,
    Path(coach_id): Path<i32>,
    Extension(_auth): Extension<AuthUser>,
    ApiJson(payload): ApiJson<SetAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let record = state
        .services
        .availability
        .set_slots(coach_id, &payload.date, &payload.time_slots)
        .await?;
    Ok(Json(AvailabilityResponse::from(record)))
}

/// DELETE /api/coaches/{coach_id}/availability/{date} - Remove one date
///
/// Deleting a date with no record still reports success.
#[utoipa::path(
    delete,
    path = "/api/coaches/{coach_id}/availability/{date}",
    params(
        ("coach_id" = i32, Path, description = "Coach ID"),
        ("date" = String, Path, description = "Date in YYYY-MM-DD format")
    ),
    responses(
        (status = 200, description = "Availability removed", body = SuccessResponse),
        (status = 404, description = "Coach not found")
    ),
    security(("bearerAuth" = [])),
    tag = COACH_TAG
)]
pub async fn delete_availability(
    State(state): State<AppState>,
    Path((coach_id, date)): Path<(i32, String)>,
    Extension(_auth): Extension<AuthUser>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .services
        .availability
        .delete_slots(coach_id, &date)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
