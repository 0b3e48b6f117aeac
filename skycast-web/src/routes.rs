//! Route definitions and router construction.
//!
//! Action routes mirror the form posts of the rendered page: each one runs a
//! service action and redirects back to `/`, where the page re-reads the
//! full state from `/api/state`.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::{ServeDir, ServeFile};

use skycast_core::{Translator, WeatherService};

use crate::handlers;

/// Everything the handlers need: the weather service plus the optional
/// translation client.
#[derive(Debug)]
pub struct ServerContext {
    pub service: Arc<WeatherService>,
    pub translator: Option<Translator>,
}

pub type SharedContext = Arc<ServerContext>;

/// Build the full router: API + action routes, with the static front-end
/// served for everything else.
pub fn router(ctx: SharedContext, assets_dir: &Path) -> Router {
    let index = assets_dir.join("index.html");
    let serve_assets = ServeDir::new(assets_dir).fallback(ServeFile::new(index));

    api_routes().with_state(ctx).fallback_service(serve_assets)
}

fn api_routes() -> Router<SharedContext> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/state", get(handlers::state))
        .route("/search", post(handlers::search))
        .route("/hourly", post(handlers::add_hourly))
        .route("/forecast-step", post(handlers::set_step))
        .route("/clear", post(handlers::clear))
        .route("/translate-page", post(handlers::translate_page))
}
