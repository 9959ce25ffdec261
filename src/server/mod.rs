mod handlers;

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, patch, post},
    Router,
};

use crate::api::API;
use crate::auth::User;
use crate::config::Config;
use crate::server::handlers::{estimates, geocode, route_drafts};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T, config: &Config) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/geocode", get(geocode::resolve))
        .route("/estimates", get(estimates::estimate))
        .route("/route_drafts", post(route_drafts::create))
        .route(
            "/route_drafts/:token",
            get(route_drafts::find).delete(route_drafts::delete),
        )
        .route(
            "/route_drafts/:token/origin/address",
            patch(route_drafts::update_origin_address),
        )
        .route(
            "/route_drafts/:token/origin/coordinates",
            patch(route_drafts::set_origin_coordinates),
        )
        .route(
            "/route_drafts/:token/destination/address",
            patch(route_drafts::update_destination_address),
        )
        .route(
            "/route_drafts/:token/destination/coordinates",
            patch(route_drafts::set_destination_coordinates),
        )
        .route("/route_drafts/:token/stops", post(route_drafts::add_stop))
        .route(
            "/route_drafts/:token/stops/:stop_id",
            delete(route_drafts::remove_stop),
        )
        .route(
            "/route_drafts/:token/stops/:stop_id/address",
            patch(route_drafts::update_stop_address),
        )
        .route(
            "/route_drafts/:token/stops/:stop_id/coordinates",
            patch(route_drafts::set_stop_coordinates),
        )
        .route(
            "/route_drafts/:token/estimate",
            post(route_drafts::refresh_estimate),
        )
        .route("/route_drafts/:token/submit", post(route_drafts::submit))
        .layer(Extension(api))
        .layer(Extension(User::new_system_user()));

    tracing::info!("listening on {}", config.listen_addr);

    axum::Server::bind(&config.listen_addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
