use axum::http::StatusCode;

use gudang_auth::{authorize, Permission, Principal};

use crate::app::errors;
use crate::context::PrincipalContext;

/// Capability gate: checked in the handler before the warehouse service is
/// invoked, never inside the reconciliation logic itself.
pub fn require(
    principal: &PrincipalContext,
    permission: &'static str,
) -> Result<(), axum::response::Response> {
    let resolved = Principal::new(principal.principal_id(), principal.roles().to_vec());
    authorize(&resolved, &Permission::new(permission))
        .map_err(|e| errors::json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string()))
}
