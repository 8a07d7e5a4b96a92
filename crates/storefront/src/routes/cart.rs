//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! All cart state lives server-side in the shopper session; handlers lock
//! the session, run one cart operation to completion, and respond with the
//! fragment the page swaps in. Mutations append an `HX-Trigger: cart-updated`
//! header so the count badge and drawer refresh themselves.

use std::time::Duration;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use axis_core::{Cart, LineId, ProductId, ShopperId, UpdateOutcome};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::routes::{shop_session, shopper_id};
use crate::state::AppState;

/// Acknowledgment delay between adding to cart and revealing the drawer.
///
/// The detail page shows its "secured" confirmation for this long before the
/// drawer slides open.
pub(crate) const ACK_DELAY: Duration = Duration::from_millis(800);

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub line_id: String,
    pub name: String,
    pub subtitle: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView {
                    line_id: line.id.to_string(),
                    name: line.product.name.clone(),
                    subtitle: line.product.subtitle.clone(),
                    quantity: line.quantity,
                    line_total: line.line_total().to_string(),
                })
                .collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.item_count(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_id: LineId,
    pub delta: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: LineId,
}

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
    pub cart_open: bool,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display the cart drawer fragment.
#[instrument(skip(state, session))]
pub async fn drawer(State(state): State<AppState>, session: Session) -> Result<Response> {
    let entry = shop_session(&state, &session).await?;
    let shop = entry.lock().await;

    Ok(CartDrawerTemplate {
        cart: CartView::from(&shop.cart),
        cart_open: shop.view.is_cart_open(),
    }
    .into_response())
}

/// Add item to cart (HTMX).
///
/// Merges into an existing line for the same product, or appends a new one.
/// Returns the count badge with an HTMX trigger; the drawer reveals itself
/// once the acknowledgment delay elapses.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id: ProductId = form
        .product_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown product: {}", form.product_id)))?;
    let quantity = form.quantity.unwrap_or(1);

    let shopper = shopper_id(&session).await?;
    let entry = state.sessions().session(shopper).await;
    let mut shop = entry.lock().await;

    shop.cart.add(state.catalog().get(product_id), quantity)?;

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product", product_id.handle())]),
    );

    let count = shop.cart.item_count();
    drop(shop);

    schedule_drawer_reveal(state, shopper);

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Adjust a line's quantity by a signed delta (HTMX).
///
/// Driving the quantity to zero or below removes the line. An unknown line
/// id leaves the cart unchanged.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let entry = shop_session(&state, &session).await?;
    let mut shop = entry.lock().await;

    match shop.cart.update_quantity(form.line_id, form.delta) {
        UpdateOutcome::Updated(quantity) => {
            add_breadcrumb("cart", "Quantity updated", None);
            tracing::debug!(line_id = %form.line_id, quantity, "Cart line updated");
        }
        UpdateOutcome::Removed => {
            add_breadcrumb("cart", "Line removed by delta", None);
        }
        UpdateOutcome::NotFound => {
            tracing::debug!(line_id = %form.line_id, "Update for unknown cart line ignored");
        }
    }

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&shop.cart),
        },
    )
        .into_response())
}

/// Remove a line from the cart regardless of quantity (HTMX).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let entry = shop_session(&state, &session).await?;
    let mut shop = entry.lock().await;

    shop.cart.remove_line(form.line_id);
    add_breadcrumb("cart", "Line removed", None);

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&shop.cart),
        },
    )
        .into_response())
}

/// Open the cart drawer (HTMX).
#[instrument(skip(state, session))]
pub async fn open(State(state): State<AppState>, session: Session) -> Result<Response> {
    let entry = shop_session(&state, &session).await?;
    let mut shop = entry.lock().await;
    shop.view.open_cart();

    Ok(CartDrawerTemplate {
        cart: CartView::from(&shop.cart),
        cart_open: true,
    }
    .into_response())
}

/// Close the cart drawer (HTMX).
#[instrument(skip(state, session))]
pub async fn close(State(state): State<AppState>, session: Session) -> Result<Response> {
    let entry = shop_session(&state, &session).await?;
    let mut shop = entry.lock().await;
    shop.view.close_cart();

    Ok(CartDrawerTemplate {
        cart: CartView::from(&shop.cart),
        cart_open: false,
    }
    .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<Response> {
    let entry = shop_session(&state, &session).await?;
    let shop = entry.lock().await;

    Ok(CartCountTemplate {
        count: shop.cart.item_count(),
    }
    .into_response())
}

/// Open the shopper's drawer once the acknowledgment delay elapses.
///
/// Fire-and-forget: the add handler responds immediately and the spawned
/// task flips the drawer flag at the 800 ms mark.
pub(crate) fn schedule_drawer_reveal(state: AppState, shopper: ShopperId) {
    tokio::spawn(async move {
        tokio::time::sleep(ACK_DELAY).await;

        let entry = state.sessions().session(shopper).await;
        entry.lock().await.view.open_cart();
    });
}
