//! Axis Core - Shared types and domain state machines.
//!
//! This crate provides the domain model used across Axis Core components:
//! - `storefront` - Public-facing marketing site with the cart flow
//!
//! # Architecture
//!
//! The core crate contains only types and state machines - no I/O, no HTTP
//! clients, no async. The cart, navigation, and copy lifecycle are plain
//! synchronous state so they can be tested without a server.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products, and brand themes
//! - [`cart`] - Cart state machine with merge and delta semantics
//! - [`view`] - Screen navigation and cart-overlay state
//! - [`copy`] - Generated-copy lifecycle with stale-result protection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod copy;
pub mod types;
pub mod view;

pub use cart::{Cart, CartError, LineItem, UpdateOutcome};
pub use copy::{CopyPhase, CopySlot, CopyToken, GeneratedCopy};
pub use types::*;
pub use view::{Screen, ViewState};
