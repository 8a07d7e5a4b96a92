//! Product catalog types.
//!
//! The storefront sells exactly one physical product in two configurations,
//! so [`ProductId`] is a closed enum rather than an opaque key. Adding a SKU
//! means adding a variant here and an entry to the catalog; the cart is
//! generic over any `ProductId` and does not change.

use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// Error returned when a URL handle does not name a known product.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown product handle: {0}")]
pub struct UnknownHandle(pub String);

/// The stock-keeping units sold on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductId {
    /// One-week trial pack.
    Hook,
    /// Monthly subscription pack.
    Habit,
}

impl ProductId {
    /// All SKUs in display order.
    pub const ALL: [Self; 2] = [Self::Hook, Self::Habit];

    /// URL handle for this SKU.
    #[must_use]
    pub const fn handle(self) -> &'static str {
        match self {
            Self::Hook => "hook",
            Self::Habit => "habit",
        }
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.handle())
    }
}

impl std::str::FromStr for ProductId {
    type Err = UnknownHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hook" => Ok(Self::Hook),
            "habit" => Ok(Self::Habit),
            _ => Err(UnknownHandle(s.to_owned())),
        }
    }
}

/// One label/value row in a product's spec table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecDetail {
    pub label: String,
    pub value: String,
}

impl SpecDetail {
    /// Build a spec row.
    #[must_use]
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// A product as defined in the static catalog.
///
/// Products are immutable marketing data defined once at startup. Cart lines
/// hold a snapshot of the product taken when the line was created, so a line
/// stays self-contained even if the catalog were to change underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Display name, e.g., "THE HOOK (TRIAL)".
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Flat shipping cost; zero means free shipping.
    pub shipping: Price,
    /// Short strapline shown under the name.
    pub subtitle: String,
    /// Marketing description.
    pub description: String,
    /// What's-in-the-box bullet list.
    pub includes: Vec<String>,
    /// Badge label, e.g., "STARTER PACK".
    pub tag: String,
    /// Stock-keeping code, e.g., "AX-001-TRL".
    pub sku: String,
    /// Spec table rows for the detail page.
    pub details: Vec<SpecDetail>,
    /// Mission-statement lines for the detail page.
    pub mission: Vec<String>,
}
