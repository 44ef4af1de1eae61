//! HTTP API surface

use actix_cors::Cors;
use actix_web::http::header;

pub mod detect;
pub mod error;
pub mod health;
pub mod openapi;

/// Permissive CORS for the browser demo client
///
/// Any origin is allowed; the header list matches what the demo client
/// sends with its requests.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allowed_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-client-info"),
            header::HeaderName::from_static("apikey"),
        ])
        .max_age(3600)
}
