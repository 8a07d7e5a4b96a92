//! Copy generation scenarios: fallback behavior and the slot lifecycle.
//!
//! These tests run the copy pipeline exactly as the page handlers do, but
//! with no API key configured, so every generation resolves to the fixed
//! fallback pair. The interesting behavior is the lifecycle around it:
//! which results land in the slot and which get dropped as stale.

#![allow(clippy::unwrap_used)]

use axis_core::{BrandTheme, CopyPhase, CopySlot};
use axis_integration_tests::test_config;
use axis_storefront::copy::CopyService;
use axis_storefront::state::AppState;

// =============================================================================
// Fallback Copy
// =============================================================================

#[tokio::test]
async fn test_unconfigured_service_is_not_live() {
    let config = test_config();
    let service = CopyService::new(config.copy.as_ref());
    assert!(!service.is_live());
}

#[tokio::test]
async fn test_every_theme_gets_the_same_fallback_pair() {
    let service = CopyService::new(None);

    for theme in BrandTheme::ALL {
        let copy = service.generate(theme).await;
        assert_eq!(copy.headline, "The Reset Anchor");
        assert_eq!(
            copy.body,
            "Experience the ultimate restoration ritual. Regulate your cortisol and reclaim \
             your sleep with Axis Core."
        );
    }
}

#[tokio::test]
async fn test_app_state_without_key_serves_fallback() {
    let state = AppState::new(test_config());
    assert!(!state.copy().is_live());

    let copy = state.copy().generate(BrandTheme::Luxury).await;
    assert_eq!(copy, CopyService::fallback());
}

// =============================================================================
// Slot Lifecycle
// =============================================================================

/// The handler sequence for one layout mount: begin, generate, resolve.
#[tokio::test]
async fn test_mount_generate_resolve() {
    let service = CopyService::new(None);
    let mut slot = CopySlot::default();

    let token = slot.begin();
    assert_eq!(slot.phase(), &CopyPhase::Loading);

    let copy = service.generate(BrandTheme::Clinical).await;
    assert!(slot.resolve(token, copy));

    let ready = slot.ready().unwrap();
    assert_eq!(ready.headline, "The Reset Anchor");
}

/// A remount while a generation is in flight supersedes it. The first
/// result must be dropped even though its content is perfectly valid.
#[tokio::test]
async fn test_remount_supersedes_in_flight_generation() {
    let service = CopyService::new(None);
    let mut slot = CopySlot::default();

    let first_mount = slot.begin();
    let first_result = service.generate(BrandTheme::Clinical).await;

    // Second mount begins before the first result is applied.
    let second_mount = slot.begin();
    assert!(!slot.resolve(first_mount, first_result));
    assert!(slot.ready().is_none());

    let second_result = service.generate(BrandTheme::Luxury).await;
    assert!(slot.resolve(second_mount, second_result));
    assert!(slot.ready().is_some());
}

/// Unmounting (switching to a theme without generated copy) invalidates
/// without issuing a new token, so the late result has nothing to land on.
#[tokio::test]
async fn test_unmount_invalidates_without_new_attempt() {
    let service = CopyService::new(None);
    let mut slot = CopySlot::default();

    let token = slot.begin();
    slot.invalidate();

    let late = service.generate(BrandTheme::Clinical).await;
    assert!(!slot.resolve(token, late));
    assert_eq!(slot.phase(), &CopyPhase::Loading);
}

/// A fresh mount always starts from the loading phase, even when the
/// previous mount had finished copy on display.
#[tokio::test]
async fn test_new_mount_clears_displayed_copy() {
    let service = CopyService::new(None);
    let mut slot = CopySlot::default();

    let token = slot.begin();
    let copy = service.generate(BrandTheme::Luxury).await;
    slot.resolve(token, copy);
    assert!(slot.ready().is_some());

    slot.begin();
    assert!(slot.ready().is_none());
    assert_eq!(slot.phase(), &CopyPhase::Loading);
}
