//! In-memory revocation list for logged-out tokens.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Set of revoked token strings, each stored with its expiry timestamp.
///
/// Revocation is keyed on the literal token string, so membership can be
/// checked before any cryptographic verification. The expiry timestamp is
/// kept alongside each entry so [`prune_expired`](Self::prune_expired)
/// can drop tokens that no longer need tracking once they would fail
/// verification anyway. Nothing schedules pruning; entries otherwise
/// live for the process lifetime.
#[derive(Debug, Default, Clone)]
pub struct RevocationList {
    entries: Arc<RwLock<HashMap<String, i64>>>,
}

impl RevocationList {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a token to the revocation list.
    pub async fn revoke(&self, token: &str, expires_at: i64) {
        let mut entries = self.entries.write().await;
        entries.insert(token.to_string(), expires_at);

        tracing::debug!(expires_at, "Token added to revocation list");
    }

    /// Check whether a token has been revoked.
    pub async fn is_revoked(&self, token: &str) -> bool {
        let entries = self.entries.read().await;
        entries.contains_key(token)
    }

    /// Drop entries whose expiry has passed. Returns how many were removed.
    pub async fn prune_expired(&self, now: i64) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, expires_at| *expires_at > now);
        let removed = before - entries.len();

        if removed > 0 {
            tracing::debug!(removed, "Pruned expired revocation entries");
        }

        removed
    }

    /// Number of tracked revocations.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_revoke_and_check() {
        let list = RevocationList::new();
        assert!(!list.is_revoked("token-a").await);

        list.revoke("token-a", 100).await;
        assert!(list.is_revoked("token-a").await);
        assert!(!list.is_revoked("token-b").await);
    }

    #[tokio::test]
    async fn test_revocation_is_by_literal_string() {
        let list = RevocationList::new();
        list.revoke("token-a", 100).await;

        // A different encoding of the "same" credential is a different entry.
        assert!(!list.is_revoked("token-a ").await);
        assert!(!list.is_revoked("Token-a").await);
    }

    #[tokio::test]
    async fn test_prune_expired() {
        let list = RevocationList::new();
        list.revoke("stale", 50).await;
        list.revoke("fresh", 150).await;
        assert_eq!(list.len().await, 2);

        let removed = list.prune_expired(100).await;
        assert_eq!(removed, 1);
        assert!(!list.is_revoked("stale").await);
        assert!(list.is_revoked("fresh").await);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let list = RevocationList::new();
        let other = list.clone();

        list.revoke("shared", 100).await;
        assert!(other.is_revoked("shared").await);
    }
}
