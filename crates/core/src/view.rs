//! Screen navigation and cart-overlay state.

use serde::{Deserialize, Serialize};

use crate::types::product::ProductId;

/// Which screen the shop experience is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Marketing overview with the SKU pickers.
    #[default]
    Overview,
    /// Detail page for the selected SKU.
    Detail,
}

/// Per-session navigation state.
///
/// The cart drawer flag is independent of the active screen: opening or
/// closing the drawer never changes what is behind it, and navigating never
/// touches the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    screen: Screen,
    selected: ProductId,
    cart_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            screen: Screen::Overview,
            selected: ProductId::Hook,
            cart_open: false,
        }
    }
}

impl ViewState {
    /// The active screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// The current detail subject. Meaningful on both screens: returning to
    /// the overview keeps it, so re-entering detail shows the same SKU.
    #[must_use]
    pub const fn selected(&self) -> ProductId {
        self.selected
    }

    /// Whether the cart drawer is visible.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Show the detail screen for the given product.
    pub fn select_product(&mut self, id: ProductId) {
        self.selected = id;
        self.screen = Screen::Detail;
    }

    /// Return to the overview without clearing the detail subject.
    pub fn go_back(&mut self) {
        self.screen = Screen::Overview;
    }

    /// Reveal the cart drawer.
    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    /// Hide the cart drawer.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }
}
