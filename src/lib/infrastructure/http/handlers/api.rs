//! Routes under `/api`

use std::any::Any;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer};
use utoipa::OpenApi;

use crate::{
    domain::{communication::email_addresses::EmailAddress, contact::ContactService},
    infrastructure::http::{handlers::panic_handler, open_api::ApiDocs, state::AppState},
};

pub mod contact;
pub mod uptime;

/// The contact route with its CORS headers, plus the operational routes
pub fn router<C: ContactService>(fallback: EmailAddress) -> Router<AppState<C>> {
    Router::new()
        .route(
            "/contact",
            post(contact::handler::<C>).options(contact::preflight),
        )
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| panic_handler(err, &fallback),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
}
