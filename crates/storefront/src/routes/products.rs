//! Product route handlers.
//!
//! The detail screen only exists under the hyperpop identity; the other two
//! layouts are pure marketing pages. Selecting a product records the detail
//! subject in the session's view state, and `POST /back` returns to the
//! overview without forgetting that subject.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use axis_core::{BrandTheme, Product, ProductId, SpecDetail};

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::{cart::CartView, home::format_shipping, shop_session};
use crate::state::AppState;

/// Product display data for the detail template.
#[derive(Clone)]
pub struct ProductView {
    pub handle: String,
    pub name: String,
    pub price: String,
    /// `None` renders the free-shipping badge.
    pub shipping: Option<String>,
    pub subtitle: String,
    pub description: String,
    pub includes: Vec<String>,
    pub tag: String,
    pub sku: String,
    pub details: Vec<SpecDetail>,
    pub mission: Vec<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            handle: product.id.handle().to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            shipping: format_shipping(product.shipping),
            subtitle: product.subtitle.clone(),
            description: product.description.clone(),
            includes: product.includes.clone(),
            tag: product.tag.clone(),
            sku: product.sku.clone(),
            details: product.details.clone(),
            mission: product.mission.clone(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub theme: BrandTheme,
    pub product: ProductView,
    pub cart: CartView,
    pub cart_open: bool,
}

/// Display the product detail screen.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
) -> Result<Response> {
    let id: ProductId = handle
        .parse()
        .map_err(|_| AppError::NotFound(format!("product: {handle}")))?;

    let entry = shop_session(&state, &session).await?;
    let mut shop = entry.lock().await;

    // Detail screens belong to the shop identity only.
    if !shop.theme.has_cart() {
        return Ok(Redirect::to("/").into_response());
    }

    shop.view.select_product(id);

    Ok(ProductShowTemplate {
        theme: shop.theme,
        product: ProductView::from(state.catalog().get(id)),
        cart: CartView::from(&shop.cart),
        cart_open: shop.view.is_cart_open(),
    }
    .into_response())
}

/// Return to the overview screen.
#[instrument(skip(state, session))]
pub async fn back(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let entry = shop_session(&state, &session).await?;
    let mut shop = entry.lock().await;
    shop.view.go_back();

    Ok(Redirect::to("/"))
}
