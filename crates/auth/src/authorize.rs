use std::collections::HashSet;

use thiserror::Error;

use crate::permissions::role_permissions;
use crate::{Permission, PrincipalId, Role};

/// A resolved principal for authorization decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn new(principal_id: PrincipalId, roles: Vec<Role>) -> Self {
        Self { principal_id, roles }
    }

    /// Union of the permissions granted by every role.
    pub fn effective_permissions(&self) -> HashSet<Permission> {
        self.roles
            .iter()
            .flat_map(|r| role_permissions(r.as_str()))
            .collect()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Check a principal against one required permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(principal: &Principal, required: &Permission) -> Result<(), AuthzError> {
    let perms = principal.effective_permissions();
    if perms.iter().any(|p| p.is_wildcard()) || perms.contains(required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}
