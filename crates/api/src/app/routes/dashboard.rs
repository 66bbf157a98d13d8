use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use gudang_ledger::TransactionKind;
use gudang_reports::top_moving;
use gudang_store::TransactionLedger;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

const DEFAULT_LIMIT: usize = 10;

pub fn router() -> Router {
    Router::new().route("/top-moving", get(get_top_moving))
}

pub async fn get_top_moving(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<dto::TopMovingQuery>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "reports.read") {
        return resp;
    }

    let records = match services.store().records() {
        Ok(records) => records,
        Err(e) => return errors::store_error_to_response(e),
    };

    let direction = query.direction.unwrap_or(TransactionKind::Out);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let items = top_moving(&records, direction, limit);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "direction": direction,
            "items": items,
        })),
    )
        .into_response()
}
