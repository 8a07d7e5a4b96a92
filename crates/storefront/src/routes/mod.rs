//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Themed home page (clinical | luxury | hyperpop)
//! GET  /?theme={handle}        - Switch brand identity, then render home
//! GET  /health                 - Health check
//!
//! # Products (hyperpop only)
//! GET  /products/{handle}      - Product detail screen
//! POST /back                   - Return to the overview screen
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart drawer fragment
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/add               - Add to cart (form: product_id, quantity)
//! POST /cart/update            - Adjust quantity by delta (form: line_id, delta)
//! POST /cart/remove            - Remove a line (form: line_id)
//! POST /cart/open              - Open the drawer
//! POST /cart/close             - Close the drawer
//!
//! # Generated copy
//! GET  /copy                   - Copy fragment (loading | ready; polls while loading)
//! ```

pub mod cart;
pub mod copy;
pub mod home;
pub mod products;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::Mutex;
use tower_sessions::Session;

use axis_core::ShopperId;

use crate::error::Result;
use crate::models::{ShopSession, session_keys};
use crate::state::AppState;

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the shopper's stable ID from the cookie session, minting one on first
/// visit.
async fn shopper_id(session: &Session) -> Result<ShopperId> {
    if let Some(id) = session.get::<ShopperId>(session_keys::SHOPPER_ID).await? {
        return Ok(id);
    }

    let id = ShopperId::new();
    session.insert(session_keys::SHOPPER_ID, id).await?;
    Ok(id)
}

/// Fetch the shopper's server-side state bundle.
async fn shop_session(state: &AppState, session: &Session) -> Result<Arc<Mutex<ShopSession>>> {
    let id = shopper_id(session).await?;
    Ok(state.sessions().session(id).await)
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::drawer))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page (theme switch included)
        .route("/", get(home::home))
        // Product detail + overview navigation
        .route("/products/{handle}", get(products::show))
        .route("/back", post(products::back))
        // Cart routes
        .nest("/cart", cart_routes())
        // Generated copy fragment
        .route("/copy", get(copy::show))
}
