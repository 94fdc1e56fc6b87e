use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{auth, match_player, matches, player, team},
    docs::ApiDoc,
    state::AppState,
};

/// Path serving the generated OpenAPI document.
pub static OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Builds every route of the API with request tracing.
///
/// CORS is applied by the caller so that tests can drive the router without it.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(team::search_teams, team::create_team))
        .routes(routes!(team::get_team, team::update_team, team::delete_team))
        .routes(routes!(team::get_team_players))
        .routes(routes!(team::get_team_matches))
        .routes(routes!(player::search_players, player::create_player))
        .routes(routes!(
            player::get_player,
            player::update_player,
            player::delete_player
        ))
        .routes(routes!(matches::search_matches, matches::create_match))
        .routes(routes!(
            matches::get_match,
            matches::update_match,
            matches::delete_match
        ))
        .routes(routes!(match_player::create_match_player))
        .routes(routes!(match_player::get_match_players))
        .routes(routes!(
            match_player::get_match_player,
            match_player::update_match_player,
            match_player::delete_match_player
        ))
        .routes(routes!(auth::login))
        .split_for_parts();

    router
        .route(
            OPENAPI_PATH,
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
