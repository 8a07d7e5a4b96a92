//! Shopping cart state machine.
//!
//! The cart is an ordered list of line items with derived totals. All
//! quantity arithmetic lives here; the web layer only translates form posts
//! into these operations.
//!
//! # Semantics
//!
//! - Adding a product already in the cart merges into the existing line, so
//!   there is never more than one line per product.
//! - Quantity changes are relative deltas. A delta that drives the quantity
//!   to zero or below removes the line.
//! - Removal is its own operation ([`Cart::remove_line`]), not a magic
//!   delta value.
//! - Unknown line IDs are silent no-ops; the only input error is adding
//!   with a zero quantity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::id::LineId;
use crate::types::price::Price;
use crate::types::product::{Product, ProductId};

/// Errors from cart operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// Adds must carry a positive quantity.
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// Result of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The line now holds the given quantity.
    Updated(u32),
    /// The delta drove the quantity to zero or below; the line is gone.
    Removed,
    /// No line with that ID exists; the cart is unchanged.
    NotFound,
}

/// A single cart line: one product at some quantity.
///
/// The line's identity is separate from the product it holds; removing a
/// product and adding it again produces a new [`LineId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineId,
    pub product_id: ProductId,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
    /// Snapshot of the product taken when the line was created.
    pub product: Product,
}

impl LineItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// An ordered shopping cart.
///
/// Lines keep insertion order (first added renders first). Totals are
/// derived on demand, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product to the cart.
    ///
    /// If a line for the same product already exists its quantity is
    /// incremented; otherwise a new line is appended with a fresh ID and a
    /// snapshot of the product. Returns the ID of the affected line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is zero. The
    /// cart is left unchanged.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<LineId, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return Ok(line.id);
        }

        let id = LineId::new();
        self.lines.push(LineItem {
            id,
            product_id: product.id,
            quantity,
            product: product.clone(),
        });
        Ok(id)
    }

    /// Apply a relative quantity change to one line.
    ///
    /// A resulting quantity above zero updates the line in place; zero or
    /// below removes it. Unknown line IDs leave the cart unchanged.
    pub fn update_quantity(&mut self, line_id: LineId, delta: i64) -> UpdateOutcome {
        let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) else {
            return UpdateOutcome::NotFound;
        };

        let new_quantity = i64::from(line.quantity).saturating_add(delta);
        if new_quantity > 0 {
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            UpdateOutcome::Updated(line.quantity)
        } else {
            self.lines.retain(|l| l.id != line_id);
            UpdateOutcome::Removed
        }
    }

    /// Remove a line outright, whatever its quantity.
    ///
    /// Unknown line IDs are a no-op.
    pub fn remove_line(&mut self, line_id: LineId) {
        self.lines.retain(|l| l.id != line_id);
    }

    /// Sum of unit price times quantity across all lines.
    ///
    /// Shipping is never included; it is presented as "calculated at next
    /// step". An empty cart totals exactly zero.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Total number of units across all lines. Drives the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
