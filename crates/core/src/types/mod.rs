//! Core types for Axis Core.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod theme;

pub use id::*;
pub use price::Price;
pub use product::{Product, ProductId, SpecDetail, UnknownHandle};
pub use theme::{BrandTheme, UnknownTheme};
