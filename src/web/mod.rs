pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::ActivityDirectory;

/// Assemble the application router around a shared directory.
///
/// The directory is the only state; tests build their own instance and drive
/// the router in-process.
pub fn app(directory: Arc<ActivityDirectory>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::activities::unregister_handler),
        )
        // Static frontend. The browser app refetches after every mutation, so
        // responses must not be cached.
        .nest_service("/static", ServeDir::new("static"))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(directory)
}
