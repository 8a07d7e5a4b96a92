//! Brand identity themes.

use serde::{Deserialize, Serialize};

/// Error returned when a handle does not name a known theme.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown brand theme: {0}")]
pub struct UnknownTheme(pub String);

/// The three interchangeable brand identities the storefront renders under.
///
/// Pure UI state: switching themes swaps the skin and restarts copy
/// generation but never touches the shopper's cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BrandTheme {
    /// Sterile, data-driven lab aesthetic.
    #[default]
    Clinical,
    /// Opulent, poetic night-ritual aesthetic.
    Luxury,
    /// Loud neo-brutalist aesthetic; the only theme with a shop.
    Hyperpop,
}

impl BrandTheme {
    /// All themes in switcher order.
    pub const ALL: [Self; 3] = [Self::Clinical, Self::Luxury, Self::Hyperpop];

    /// URL handle for this theme.
    #[must_use]
    pub const fn handle(self) -> &'static str {
        match self {
            Self::Clinical => "clinical",
            Self::Luxury => "luxury",
            Self::Hyperpop => "hyperpop",
        }
    }

    /// Human label shown in the brand switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clinical => "Clinical Zen",
            Self::Luxury => "Midnight Bloom",
            Self::Hyperpop => "Gen Z Hyper-Pop",
        }
    }

    /// Whether this theme's layout carries cart controls.
    #[must_use]
    pub const fn has_cart(self) -> bool {
        matches!(self, Self::Hyperpop)
    }

    /// Whether this theme's layout shows AI-generated hero copy.
    #[must_use]
    pub const fn has_generated_copy(self) -> bool {
        matches!(self, Self::Clinical | Self::Luxury)
    }
}

impl std::fmt::Display for BrandTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.handle())
    }
}

impl std::str::FromStr for BrandTheme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clinical" => Ok(Self::Clinical),
            "luxury" => Ok(Self::Luxury),
            "hyperpop" => Ok(Self::Hyperpop),
            _ => Err(UnknownTheme(s.to_owned())),
        }
    }
}
