use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use gudang_core::PartId;
use gudang_inventory::{available_locations, PartFilter, PartInput};
use gudang_store::InventoryStore;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_parts).post(create_part))
        .route("/locations", get(list_locations))
        .route("/:id", get(get_part).put(update_part).delete(delete_part))
}

pub async fn list_parts(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(filter): Query<PartFilter>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "parts.read") {
        return resp;
    }

    let parts = match services.store().list() {
        Ok(parts) => parts,
        Err(e) => return errors::store_error_to_response(e),
    };

    (StatusCode::OK, Json(filter.apply(parts))).into_response()
}

pub async fn list_locations(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "parts.read") {
        return resp;
    }

    let parts = match services.store().list() {
        Ok(parts) => parts,
        Err(e) => return errors::store_error_to_response(e),
    };

    (StatusCode::OK, Json(available_locations(&parts))).into_response()
}

pub async fn get_part(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "parts.read") {
        return resp;
    }

    let id: PartId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid part id"),
    };

    match services.store().get(id) {
        Ok(Some(part)) => (StatusCode::OK, Json(part)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "part not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_part(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<PartInput>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "parts.write") {
        return resp;
    }

    match services.warehouse().add_part(body) {
        Ok(added) => (StatusCode::CREATED, Json(dto::part_added_to_json(added))).into_response(),
        Err(e) => errors::warehouse_error_to_response(e),
    }
}

pub async fn update_part(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<PartInput>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "parts.write") {
        return resp;
    }

    let id: PartId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid part id"),
    };

    match services.warehouse().update_part(id, body) {
        Ok(updated) => (StatusCode::OK, Json(dto::part_updated_to_json(updated))).into_response(),
        Err(e) => errors::warehouse_error_to_response(e),
    }
}

pub async fn delete_part(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = crate::authz::require(&principal, "parts.write") {
        return resp;
    }

    let id: PartId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid part id"),
    };

    match services.warehouse().delete_part(id) {
        Ok(deleted) => (StatusCode::OK, Json(dto::part_deleted_to_json(deleted))).into_response(),
        Err(e) => errors::warehouse_error_to_response(e),
    }
}
