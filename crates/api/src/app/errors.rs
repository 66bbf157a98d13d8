use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use gudang_core::DomainError;
use gudang_store::StoreError;
use gudang_warehouse::WarehouseError;

pub fn warehouse_error_to_response(err: WarehouseError) -> axum::response::Response {
    match err {
        WarehouseError::Domain(e) => domain_error_to_response(e),
        WarehouseError::Store(e) => store_error_to_response(e),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::Validation(_) => json_error(StatusCode::BAD_REQUEST, "validation_error", message),
        DomainError::InvalidId(_) => json_error(StatusCode::BAD_REQUEST, "invalid_id", message),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", message),
        DomainError::DuplicateBarcode(_) => {
            json_error(StatusCode::CONFLICT, "duplicate_barcode", message)
        }
        DomainError::InsufficientStock { .. } => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "insufficient_stock", message)
        }
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store failure");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
