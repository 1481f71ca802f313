//! Staff Role Extractor
//!
//! Resolves the caller's role from the `x-staff-role` request header.
//! There is no session protocol: the header is a declaration, absent or
//! unparsable values fall back to the least-privileged role.

use axum::{extract::FromRequestParts, http::HeaderMap, http::request::Parts};
use shared::models::Role;

/// Header carrying the caller's declared role
pub const STAFF_ROLE_HEADER: &str = "x-staff-role";

/// The caller identity attached to a request
#[derive(Debug, Clone, Copy)]
pub struct CurrentStaff {
    pub role: Role,
}

/// Resolve the role from request headers, defaulting to Basic
pub fn role_from_headers(headers: &HeaderMap) -> Role {
    headers
        .get(STAFF_ROLE_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

impl<S> FromRequestParts<S> for CurrentStaff
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentStaff {
            role: role_from_headers(&parts.headers),
        })
    }
}
