use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::PrincipalContext;

pub async fn health() -> axum::response::Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}

pub async fn whoami(
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "principalId": principal.principal_id().to_string(),
            "roles": principal.roles(),
        })),
    )
        .into_response()
}
