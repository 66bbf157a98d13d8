use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use gudang_ledger::ReportPeriod;
use gudang_reports::ActivityReport;
use gudang_store::TransactionLedger;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/summary", get(get_summary))
}

pub async fn get_summary(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<dto::SummaryQuery>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "reports.read") {
        return resp;
    }

    let records = match services.store().records() {
        Ok(records) => records,
        Err(e) => return errors::store_error_to_response(e),
    };

    let period = query.period.unwrap_or(ReportPeriod::Month);
    let report = ActivityReport::compute(&records, period, Utc::now());

    (StatusCode::OK, Json(report)).into_response()
}
