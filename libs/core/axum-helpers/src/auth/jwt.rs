use super::config::TokenConfig;
use super::store::RevocationList;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,   // Subject (user ID)
    pub email: String, // User email at issuance
    pub iat: i64,      // Issued at
    pub exp: i64,      // Expiration time
}

/// Signed bearer token service with an in-memory revocation list.
///
/// Tokens are HS256-signed and expire a fixed duration after issuance.
/// Logout revokes the literal token string; revocation is checked before
/// signature verification on protected routes, so a logged-out token is
/// rejected even while cryptographically intact.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
    ttl_seconds: i64,
    revoked: RevocationList,
}

impl JwtAuth {
    pub fn new(config: &TokenConfig) -> Self {
        tracing::info!(ttl_seconds = config.ttl_seconds, "Token service initialized");

        Self {
            secret: config.secret.clone(),
            ttl_seconds: config.ttl_seconds,
            revoked: RevocationList::new(),
        }
    }

    /// Issue a token for the given user.
    pub fn issue(&self, user_id: &str, email: &str) -> eyre::Result<String> {
        self.issue_with_ttl(user_id, email, self.ttl_seconds)
    }

    fn issue_with_ttl(&self, user_id: &str, email: &str, ttl_seconds: i64) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Revoke a token by its literal string.
    ///
    /// The stored expiry comes from the token's own `exp` claim when it
    /// decodes (expiry itself is not validated here, so an already-expired
    /// token can still be recorded); otherwise from now plus the configured
    /// TTL.
    pub async fn revoke(&self, token: &str) {
        let expires_at = self
            .decode_ignoring_expiry(token)
            .map(|claims| claims.exp)
            .unwrap_or_else(|| Utc::now().timestamp() + self.ttl_seconds);

        self.revoked.revoke(token, expires_at).await;
    }

    /// Check whether a token has been revoked. Membership is on the
    /// literal string and involves no signature verification.
    pub async fn is_revoked(&self, token: &str) -> bool {
        self.revoked.is_revoked(token).await
    }

    /// Drop revocation entries whose tokens have expired anyway.
    pub async fn prune_revoked(&self) -> usize {
        self.revoked.prune_expired(Utc::now().timestamp()).await
    }

    fn decode_ignoring_expiry(&self, token: &str) -> Option<JwtClaims> {
        let mut validation = Validation::default();
        validation.validate_exp = false;

        decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .ok()
        .map(|data| data.claims)
    }
}
