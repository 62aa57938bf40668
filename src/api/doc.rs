use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const COACH_TAG: &str = "Coaches";
pub const CART_TAG: &str = "Cart";
pub const PLAYER_TAG: &str = "Players";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courtside",
        description = "Coach availability and booking-cart API",
    ),
    modifiers(&SecurityAddon),
    paths(
        crate::api::handlers::coaches::list_coaches,
        crate::api::handlers::coaches::get_availability,
        crate::api::handlers::coaches::set_availability,
        crate::api::handlers::coaches::delete_availability,
        crate::api::handlers::cart::list_cart,
        crate::api::handlers::cart::add_cart_item,
        crate::api::handlers::cart::delete_cart_item,
        crate::api::handlers::cart::merge_guest_cart,
        crate::api::handlers::players::list_players,
        crate::api::handlers::players::create_player,
        crate::api::handlers::players::get_player,
        crate::api::handlers::players::update_player,
        crate::api::handlers::players::delete_player,
        crate::api::handlers::health::health_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::SuccessResponse,
            crate::api::dto::AvailabilityResponse,
            crate::api::dto::SetAvailabilityRequest,
            crate::api::dto::CoachResponse,
            crate::api::dto::AddCartItemRequest,
            crate::api::dto::CartItemResponse,
            crate::api::dto::CartItemViewResponse,
            crate::api::dto::CartListResponse,
            crate::api::dto::CreatePlayerRequest,
            crate::api::dto::UpdatePlayerRequest,
            crate::api::dto::PlayerResponse,
        )
    ),
    tags(
        (name = COACH_TAG, description = "Coach listing and availability endpoints"),
        (name = CART_TAG, description = "Booking cart endpoints"),
        (name = PLAYER_TAG, description = "Player profile endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}
