//! Bearer Token Extraction
//!
//! The canonical token carrier for this API is the `Authorization` header
//! in `Bearer <token>` form. Cookies are deliberately not consulted; one
//! extraction point per deployment keeps the auth gate predictable.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from the Authorization header
///
/// Returns `None` when the header is absent, not valid UTF-8, or not in
/// `Bearer <token>` form. The token itself is not validated here.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
