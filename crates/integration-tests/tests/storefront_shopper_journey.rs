//! Shopper journey scenarios across the session store, catalog, and cart.
//!
//! Each test plays the sequence of state changes the route handlers perform
//! for a realistic browsing session, then checks the invariants the UI
//! depends on: the cart survives theme switches, back navigation keeps the
//! detail subject, and shoppers never see each other's state.

#![allow(clippy::unwrap_used)]

use axis_core::{BrandTheme, GeneratedCopy, Price, ProductId, Screen, ShopperId, ViewState};
use axis_storefront::catalog::Catalog;
use axis_storefront::sessions::SessionStore;

// =============================================================================
// Full Journeys
// =============================================================================

/// Land on the default theme, switch to the shop, browse a product, buy it,
/// then wander off to another brand skin. The cart must come along.
#[tokio::test]
async fn test_browse_add_and_switch_theme_keeps_cart() {
    let store = SessionStore::new();
    let catalog = Catalog::default();
    let shopper = ShopperId::new();

    // First request: fresh session on the default identity.
    {
        let entry = store.session(shopper).await;
        let shop = entry.lock().await;
        assert_eq!(shop.theme, BrandTheme::Clinical);
        assert_eq!(shop.view.screen(), Screen::Overview);
        assert!(shop.cart.is_empty());
        assert!(shop.copy.ready().is_none());
    }

    // Switch to the hyperpop shop and open the trial pack's detail page.
    {
        let entry = store.session(shopper).await;
        let mut shop = entry.lock().await;
        shop.theme = BrandTheme::Hyperpop;
        shop.view = ViewState::default();
        shop.copy.invalidate();

        shop.view.select_product(ProductId::Hook);
        assert_eq!(shop.view.screen(), Screen::Detail);
    }

    // Add two trial packs and peek at the drawer.
    {
        let entry = store.session(shopper).await;
        let mut shop = entry.lock().await;
        shop.cart.add(catalog.get(ProductId::Hook), 2).unwrap();
        shop.view.open_cart();

        assert_eq!(shop.cart.item_count(), 2);
        assert_eq!(shop.cart.subtotal(), Price::from_cents(3800));
    }

    // Switch to the luxury skin. Presentation resets; the cart does not.
    {
        let entry = store.session(shopper).await;
        let mut shop = entry.lock().await;
        shop.theme = BrandTheme::Luxury;
        shop.view = ViewState::default();
        shop.copy.invalidate();
    }

    let entry = store.session(shopper).await;
    let shop = entry.lock().await;
    assert_eq!(shop.theme, BrandTheme::Luxury);
    assert_eq!(shop.view.screen(), Screen::Overview);
    assert!(!shop.view.is_cart_open());
    assert_eq!(shop.cart.item_count(), 2);
    assert_eq!(shop.cart.subtotal(), Price::from_cents(3800));
}

/// Two shoppers browsing at once never share theme, view, or cart state.
#[tokio::test]
async fn test_concurrent_shoppers_keep_separate_carts() {
    let store = SessionStore::new();
    let catalog = Catalog::default();
    let first = ShopperId::new();
    let second = ShopperId::new();

    {
        let entry = store.session(first).await;
        let mut shop = entry.lock().await;
        shop.theme = BrandTheme::Hyperpop;
        shop.cart.add(catalog.get(ProductId::Habit), 1).unwrap();
    }

    {
        let entry = store.session(second).await;
        let mut shop = entry.lock().await;
        shop.cart.add(catalog.get(ProductId::Hook), 3).unwrap();
        shop.view.select_product(ProductId::Hook);
    }

    let first_entry = store.session(first).await;
    let first_shop = first_entry.lock().await;
    assert_eq!(first_shop.cart.subtotal(), Price::from_cents(5900));
    assert_eq!(first_shop.view.screen(), Screen::Overview);

    let second_entry = store.session(second).await;
    let second_shop = second_entry.lock().await;
    assert_eq!(second_shop.theme, BrandTheme::Clinical);
    assert_eq!(second_shop.cart.subtotal(), Price::from_cents(5700));
    assert_eq!(second_shop.view.selected(), ProductId::Hook);
}

// =============================================================================
// Navigation Invariants
// =============================================================================

#[test]
fn test_back_from_detail_remembers_subject() {
    let mut view = ViewState::default();
    assert_eq!(view.selected(), ProductId::Hook);

    view.select_product(ProductId::Habit);
    view.go_back();

    assert_eq!(view.screen(), Screen::Overview);
    assert_eq!(view.selected(), ProductId::Habit);

    // Re-entering detail shows the same SKU the shopper left.
    view.select_product(view.selected());
    assert_eq!(view.screen(), Screen::Detail);
    assert_eq!(view.selected(), ProductId::Habit);
}

#[test]
fn test_drawer_state_is_orthogonal_to_navigation() {
    let mut view = ViewState::default();

    view.open_cart();
    view.select_product(ProductId::Hook);
    assert!(view.is_cart_open());

    view.go_back();
    assert!(view.is_cart_open());

    view.close_cart();
    assert_eq!(view.screen(), Screen::Overview);
    assert!(!view.is_cart_open());
}

// =============================================================================
// Copy Slot Across Theme Switches
// =============================================================================

/// A theme switch invalidates in-flight copy generation, so a late result
/// for the old theme can never surface under the new one.
#[tokio::test]
async fn test_theme_switch_discards_stale_copy() {
    let store = SessionStore::new();
    let shopper = ShopperId::new();

    // Clinical mount starts a generation.
    let clinical_token = {
        let entry = store.session(shopper).await;
        let mut shop = entry.lock().await;
        assert!(shop.theme.has_generated_copy());
        shop.copy.begin()
    };

    // Shopper switches to luxury before the clinical fetch lands.
    let luxury_token = {
        let entry = store.session(shopper).await;
        let mut shop = entry.lock().await;
        shop.theme = BrandTheme::Luxury;
        shop.view = ViewState::default();
        shop.copy.invalidate();
        shop.copy.begin()
    };

    let entry = store.session(shopper).await;
    let mut shop = entry.lock().await;

    let stale = GeneratedCopy {
        headline: "Clinical headline".to_string(),
        body: "Arrived too late.".to_string(),
    };
    assert!(!shop.copy.resolve(clinical_token, stale));
    assert!(shop.copy.ready().is_none());

    let fresh = GeneratedCopy {
        headline: "Luxury headline".to_string(),
        body: "Arrived in time.".to_string(),
    };
    assert!(shop.copy.resolve(luxury_token, fresh));
    assert_eq!(
        shop.copy.ready().map(|c| c.headline.as_str()),
        Some("Luxury headline")
    );
}
