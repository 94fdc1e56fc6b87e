//! OpenAPI document for the REST API.
//!
//! Paths are collected from the `#[utoipa::path]` handlers while the router is
//! assembled; `ApiDoc` contributes the metadata, tags and the bearer scheme.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Superleague API",
        description = "Teams, players, matches and per-match player statistics"
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "team", description = "Teams and their players and matches"),
        (name = "player", description = "Players"),
        (name = "match", description = "Matches"),
        (name = "match_player", description = "Per-match player statistics"),
        (name = "auth", description = "Login")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by the mutating endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
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
