//! In-process shopper session store.
//!
//! Each shopper's cart, view, theme, and copy slot live server-side in a
//! `moka` cache keyed by [`ShopperId`]. Entries expire after seven days of
//! inactivity, matching the session cookie's idle window. State is wrapped in
//! a `tokio` mutex so concurrent requests from the same shopper (HTMX fires
//! several at once) serialize their cart mutations.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::sync::Mutex;

use axis_core::ShopperId;

use crate::models::session::ShopSession;

/// Seven days, matching the cookie's inactivity expiry.
const SESSION_IDLE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Shared handle to every live shopper session.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<ShopperId, Arc<Mutex<ShopSession>>>,
}

impl SessionStore {
    /// Create a new store.
    #[must_use]
    pub fn new() -> Self {
        let sessions = Cache::builder()
            .max_capacity(10_000)
            .time_to_idle(SESSION_IDLE)
            .build();

        Self { sessions }
    }

    /// Fetch the session for a shopper, creating a fresh one on first visit.
    ///
    /// Callers lock the returned mutex for the duration of their read or
    /// mutation and drop the guard before rendering.
    pub async fn session(&self, shopper_id: ShopperId) -> Arc<Mutex<ShopSession>> {
        self.sessions
            .get_with(shopper_id, async { Arc::new(Mutex::new(ShopSession::default())) })
            .await
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axis_core::BrandTheme;

    #[tokio::test]
    async fn test_first_visit_gets_defaults() {
        let store = SessionStore::new();
        let shopper = ShopperId::new();

        let session = store.session(shopper).await;
        let guard = session.lock().await;
        assert_eq!(guard.theme, BrandTheme::Clinical);
        assert!(guard.cart.is_empty());
        assert!(!guard.view.is_cart_open());
    }

    #[tokio::test]
    async fn test_state_persists_across_lookups() {
        let store = SessionStore::new();
        let shopper = ShopperId::new();

        {
            let session = store.session(shopper).await;
            let mut guard = session.lock().await;
            guard.theme = BrandTheme::Hyperpop;
        }

        let session = store.session(shopper).await;
        let guard = session.lock().await;
        assert_eq!(guard.theme, BrandTheme::Hyperpop);
    }

    #[tokio::test]
    async fn test_shoppers_are_isolated() {
        let store = SessionStore::new();
        let first = ShopperId::new();
        let second = ShopperId::new();

        {
            let session = store.session(first).await;
            session.lock().await.theme = BrandTheme::Luxury;
        }

        let session = store.session(second).await;
        let guard = session.lock().await;
        assert_eq!(guard.theme, BrandTheme::Clinical);
    }
}
