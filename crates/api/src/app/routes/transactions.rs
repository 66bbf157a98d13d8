use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use gudang_core::TransactionId;
use gudang_reports::render_receipt;
use gudang_store::TransactionLedger;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route("/:id", get(get_transaction))
        .route("/:id/receipt", get(get_receipt))
}

pub async fn list_transactions(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<dto::HistoryQuery>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "transactions.read") {
        return resp;
    }

    let result = match query.period {
        Some(period) => {
            let (from, to) = period.interval(Utc::now());
            services.store().records_between(from, to)
        }
        None => services.store().records(),
    };

    let mut records = match result {
        Ok(records) => records,
        Err(e) => return errors::store_error_to_response(e),
    };
    // newest first for display
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    (StatusCode::OK, Json(records)).into_response()
}

pub async fn create_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::CreateTransactionRequest>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "transactions.create") {
        return resp;
    }

    match services.warehouse().create_outgoing(body.items) {
        Ok(committed) => {
            (StatusCode::CREATED, Json(dto::outgoing_to_json(committed))).into_response()
        }
        Err(e) => errors::warehouse_error_to_response(e),
    }
}

pub async fn get_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "transactions.read") {
        return resp;
    }

    let id: TransactionId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid transaction id")
        }
    };

    match services.store().record(id) {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "transaction not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_receipt(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "transactions.read") {
        return resp;
    }

    let id: TransactionId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid transaction id")
        }
    };

    match services.store().record(id) {
        Ok(Some(record)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_receipt(&record),
        )
            .into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "transaction not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
