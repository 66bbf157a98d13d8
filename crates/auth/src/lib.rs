//! `gudang-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: token
//! minting is an external collaborator, and the capability check happens in
//! the caller before the warehouse service is ever invoked.

pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod permissions;
pub mod principal;
pub mod roles;

pub use authorize::{authorize, AuthzError, Principal};
pub use claims::{validate_claims, AuthClaims, TokenValidationError};
pub use jwt::{Hs256JwtValidator, JwtValidator, TokenError};
pub use permissions::{role_permissions, Permission};
pub use principal::PrincipalId;
pub use roles::Role;
