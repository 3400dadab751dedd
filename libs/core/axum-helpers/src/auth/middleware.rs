use super::jwt::JwtAuth;
use crate::errors::error_response;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

/// Extract a bearer token from the `Authorization` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// Authentication middleware for protected routes.
///
/// Gate order: a missing token is unauthenticated (401); a present token
/// is checked against the revocation list BEFORE signature verification,
/// so a logged-out token is rejected (403) even while cryptographically
/// intact; a token that fails verification (bad signature, malformed
/// payload, expired) is rejected (403). On success the decoded claims are
/// inserted into request extensions for downstream ownership checks.
pub async fn require_auth(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer_token(&headers) {
        Some(t) => t,
        None => {
            tracing::debug!("No bearer token in Authorization header");
            return Err(error_response(
                StatusCode::UNAUTHORIZED,
                "No token provided",
            ));
        }
    };

    if auth.is_revoked(&token).await {
        tracing::debug!("Rejected revoked token");
        return Err(error_response(
            StatusCode::FORBIDDEN,
            "Token has been blacklisted",
        ));
    }

    let claims = match auth.verify(&token) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("Token verification failed: {}", e);
            return Err(error_response(
                StatusCode::FORBIDDEN,
                "You must be authenticated to access this route",
            ));
        }
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Inverse gate for register/login routes.
///
/// A present token that verifies successfully means the caller is already
/// authenticated and is rejected. A missing, malformed, or expired token
/// passes through: the gate deliberately fails open, treating anything
/// that does not verify as "not authenticated". The revocation list is
/// not consulted here, so a logged-out-but-unexpired token still counts
/// as authenticated and still blocks.
pub async fn block_if_authenticated(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    if let Some(token) = extract_bearer_token(&headers) {
        if auth.verify(&token).is_ok() {
            return Err(error_response(
                StatusCode::FORBIDDEN,
                "Authenticated users cannot access this route.",
            ));
        }

        tracing::debug!("Ignoring non-verifying token on unauthenticated-only route");
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );

        assert_eq!(
            extract_bearer_token(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_extract_bearer_token_missing_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_extract_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic abc"));

        assert_eq!(extract_bearer_token(&headers), None);
    }
}
