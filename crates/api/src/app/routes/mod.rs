use axum::{routing::get, Router};

pub mod dashboard;
pub mod parts;
pub mod reports;
pub mod system;
pub mod transactions;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/parts", parts::router())
        .nest("/transactions", transactions::router())
        .nest("/dashboard", dashboard::router())
        .nest("/reports", reports::router())
}
