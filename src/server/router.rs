use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        academy::{
            __path_get_academies, __path_login, __path_signup, get_academies, login, signup,
        },
        player::{
            __path_create_player, __path_delete_player, __path_get_player,
            __path_get_players_by_academy, __path_update_player, create_player, delete_player,
            get_player, get_players_by_academy, update_player,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Academy Roster API",
        description = "Academies and the players they manage"
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "academy", description = "Academy accounts and authentication"),
        (name = "player", description = "Player profiles owned by academies")
    )
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected player endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Default::default)
            .add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
    }
}

/// Builds the API router with OpenAPI docs served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_academies))
        .routes(routes!(signup))
        .routes(routes!(login))
        .routes(routes!(create_player))
        .routes(routes!(get_player, update_player, delete_player))
        .routes(routes!(get_players_by_academy))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}
