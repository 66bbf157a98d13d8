//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection + warehouse service construction
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use gudang_auth::JwtValidator;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(jwt_secret: String) -> anyhow::Result<Router> {
    let jwt: Arc<dyn JwtValidator> = Arc::new(gudang_auth::Hs256JwtValidator::new(jwt_secret));
    let auth_state = middleware::AuthState { jwt };

    let services = Arc::new(services::build_services()?);

    // Protected routes: require a valid bearer token.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new()))
}
