//! API handler modules

use std::any::Any;

use axum::{body::Body, http::Response, response::IntoResponse};
use tracing::error;

use crate::domain::communication::email_addresses::EmailAddress;

use super::errors::send_failed;

pub mod api;

/// Catch panics and answer with the generic send failure
pub fn panic_handler(err: Box<dyn Any + Send + 'static>, fallback: &EmailAddress) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(details, "panic while handling request");

    send_failed(fallback).into_response()
}
