//! Home page route handlers.
//!
//! One handler renders whichever brand layout the shopper's session selects.
//! A `?theme=` query switches identity before rendering. Every full-page
//! render of a copy-bearing layout counts as a mount: it restarts copy
//! generation for that theme, so an in-flight fetch for a previous mount
//! resolves stale and is discarded.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use axis_core::{BrandTheme, Price, Product, Screen, ViewState};

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::{cart::CartView, copy, copy::CopyView, shopper_id};
use crate::state::AppState;

/// Theme switch query parameter.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub theme: Option<String>,
}

/// Pricing card display data for the hyperpop offer grid.
#[derive(Clone)]
pub struct OfferCardView {
    pub handle: String,
    pub name: String,
    pub price: String,
    /// `None` renders the free-shipping badge.
    pub shipping: Option<String>,
}

impl From<&Product> for OfferCardView {
    fn from(product: &Product) -> Self {
        Self {
            handle: product.id.handle().to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            shipping: format_shipping(product.shipping),
        }
    }
}

/// Shipping price as a display string, `None` when free.
pub(crate) fn format_shipping(shipping: Price) -> Option<String> {
    if shipping.is_free() {
        None
    } else {
        Some(shipping.to_string())
    }
}

/// Clinical layout template.
#[derive(Template, WebTemplate)]
#[template(path = "home/clinical.html")]
pub struct ClinicalTemplate {
    pub theme: BrandTheme,
    pub copy: CopyView,
}

/// Luxury layout template.
#[derive(Template, WebTemplate)]
#[template(path = "home/luxury.html")]
pub struct LuxuryTemplate {
    pub theme: BrandTheme,
    pub copy: CopyView,
}

/// Hyperpop layout template (overview screen with offer grid and cart).
#[derive(Template, WebTemplate)]
#[template(path = "home/hyperpop.html")]
pub struct HyperpopTemplate {
    pub theme: BrandTheme,
    pub hook: OfferCardView,
    pub habit: OfferCardView,
    pub cart: CartView,
    pub cart_open: bool,
}

/// Display the home page under the session's brand identity.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HomeQuery>,
) -> Result<Response> {
    let shopper = shopper_id(&session).await?;
    let entry = state.sessions().session(shopper).await;
    let mut shop = entry.lock().await;

    if let Some(handle) = query.theme.as_deref() {
        let next: BrandTheme = handle
            .parse()
            .map_err(|_| AppError::BadRequest(format!("unknown theme: {handle}")))?;

        if next != shop.theme {
            shop.theme = next;
            shop.view = ViewState::default();
            shop.copy.invalidate();
            tracing::info!(theme = %next, "Brand theme switched");
        }
    }

    // The home URL is the overview screen. Landing here from a detail page
    // navigates back without forgetting the detail subject.
    if shop.view.screen() == Screen::Detail {
        shop.view.go_back();
    }

    // Mount: restart copy generation so the newest render wins.
    if shop.theme.has_generated_copy() {
        let token = shop.copy.begin();
        copy::spawn_generation(state.clone(), shopper, shop.theme, token);
    }

    let theme = shop.theme;
    let response = match theme {
        BrandTheme::Clinical | BrandTheme::Luxury => {
            let copy = CopyView::from_slot(&shop.copy, theme);
            if theme == BrandTheme::Clinical {
                ClinicalTemplate { theme, copy }.into_response()
            } else {
                LuxuryTemplate { theme, copy }.into_response()
            }
        }
        BrandTheme::Hyperpop => {
            let [hook, habit] = state.catalog().all().map(OfferCardView::from);
            HyperpopTemplate {
                theme,
                hook,
                habit,
                cart: CartView::from(&shop.cart),
                cart_open: shop.view.is_cart_open(),
            }
            .into_response()
        }
    };

    Ok(response)
}
