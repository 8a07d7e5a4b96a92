//! Session-related types.
//!
//! Per-shopper state held server-side between requests.

use axis_core::{BrandTheme, Cart, CopySlot, ViewState};

/// All state for one shopper.
///
/// Lives in the in-process session store, keyed by [`ShopperId`]. The cart
/// survives theme switches; the view and copy slot reset with the theme.
///
/// [`ShopperId`]: axis_core::ShopperId
#[derive(Debug, Clone, Default)]
pub struct ShopSession {
    /// Which brand skin the shopper is browsing under.
    pub theme: BrandTheme,
    /// Current screen, selected product, and drawer state.
    pub view: ViewState,
    /// Cart contents.
    pub cart: Cart,
    /// Generated marketing copy lifecycle for the current theme.
    pub copy: CopySlot,
}

/// Cookie-backed session keys.
pub mod keys {
    /// Key for the shopper's stable identifier.
    pub const SHOPPER_ID: &str = "shopper_id";
}
