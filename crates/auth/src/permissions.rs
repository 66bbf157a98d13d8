use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are opaque strings (e.g. "parts.write"). The wildcard `"*"`
/// means "allow all" without hardcoding the full permission list into
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Permissions granted by each known role.
///
/// The three roles come from the shop's staff model: `admin` runs the
/// system, `kepala` handles stock and transactions, `manajer` only reads.
/// Unknown roles grant nothing.
pub fn role_permissions(role: &str) -> Vec<Permission> {
    match role {
        "admin" => vec![Permission::new("*")],
        "kepala" => vec![
            Permission::new("parts.read"),
            Permission::new("parts.write"),
            Permission::new("transactions.read"),
            Permission::new("transactions.create"),
            Permission::new("reports.read"),
        ],
        "manajer" => vec![
            Permission::new("parts.read"),
            Permission::new("transactions.read"),
            Permission::new("reports.read"),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_gets_the_wildcard() {
        let perms = role_permissions("admin");
        assert_eq!(perms.len(), 1);
        assert!(perms[0].is_wildcard());
    }

    #[test]
    fn manajer_is_read_only() {
        let perms = role_permissions("manajer");
        assert!(perms.iter().all(|p| p.as_str().ends_with(".read")));
    }

    #[test]
    fn unknown_roles_grant_nothing() {
        assert!(role_permissions("intern").is_empty());
    }
}
