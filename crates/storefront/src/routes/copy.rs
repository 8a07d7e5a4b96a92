//! Generated-copy route handler.
//!
//! The clinical and luxury layouts show an AI-generated headline and body.
//! Generation runs in a background task per layout mount; this fragment
//! renders placeholder copy with a polling attribute while the fetch is in
//! flight, then the finished copy without one.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse, response::Response};
use tower_sessions::Session;
use tracing::instrument;

use axis_core::{BrandTheme, CopySlot, CopyToken, GeneratedCopy, ShopperId};

use crate::error::Result;
use crate::routes::shop_session;
use crate::state::AppState;

/// Copy display data for templates.
#[derive(Clone)]
pub struct CopyView {
    pub loading: bool,
    pub headline: String,
    pub body: String,
}

impl CopyView {
    /// Render a slot's current phase, substituting the theme's placeholder
    /// copy while generation is in flight.
    #[must_use]
    pub fn from_slot(slot: &CopySlot, theme: BrandTheme) -> Self {
        match slot.ready() {
            Some(copy) => Self {
                loading: false,
                headline: copy.headline.clone(),
                body: copy.body.clone(),
            },
            None => {
                let placeholder = placeholder_copy(theme);
                Self {
                    loading: true,
                    headline: placeholder.headline,
                    body: placeholder.body,
                }
            }
        }
    }
}

/// Static hero copy shown while generation is loading.
fn placeholder_copy(theme: BrandTheme) -> GeneratedCopy {
    match theme {
        BrandTheme::Clinical => GeneratedCopy {
            headline: "Neuro-Chemical HPA Regulation".to_string(),
            body: "Targeted vapor dispersion technology designed to accelerate cortisol \
                   reduction through olfactory pathway activation."
                .to_string(),
        },
        BrandTheme::Luxury => GeneratedCopy {
            headline: "The Night Reclaimed.".to_string(),
            body: "A fragrant descent into silence. The Axis Core neuro-restoration ritual \
                   dissolves the day's tension, leaving only stillness."
                .to_string(),
        },
        // The hyperpop layout never requests this fragment.
        BrandTheme::Hyperpop => crate::copy::CopyService::fallback(),
    }
}

/// Generated copy fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/copy.html")]
pub struct CopyTemplate {
    pub theme: BrandTheme,
    pub copy: CopyView,
}

/// Display the generated copy fragment.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let entry = shop_session(&state, &session).await?;
    let shop = entry.lock().await;

    Ok(CopyTemplate {
        theme: shop.theme,
        copy: CopyView::from_slot(&shop.copy, shop.theme),
    }
    .into_response())
}

/// Run copy generation in the background and apply the result to the
/// shopper's slot.
///
/// The token pins the result to the mount that requested it: if the shopper
/// switched themes meanwhile, the slot's generation moved on and the stale
/// result is dropped.
pub(crate) fn spawn_generation(
    state: AppState,
    shopper: ShopperId,
    theme: BrandTheme,
    token: CopyToken,
) {
    tokio::spawn(async move {
        let copy = state.copy().generate(theme).await;

        let entry = state.sessions().session(shopper).await;
        let mut shop = entry.lock().await;
        if shop.copy.resolve(token, copy) {
            tracing::debug!(theme = %theme, "Generated copy applied");
        } else {
            tracing::debug!(theme = %theme, "Stale copy result discarded");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::config::StorefrontConfig;

    fn test_state() -> AppState {
        AppState::new(StorefrontConfig {
            host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            copy: None,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        })
    }

    #[test]
    fn test_loading_view_uses_theme_placeholder() {
        let slot = CopySlot::default();

        let view = CopyView::from_slot(&slot, BrandTheme::Clinical);
        assert!(view.loading);
        assert_eq!(view.headline, "Neuro-Chemical HPA Regulation");

        let view = CopyView::from_slot(&slot, BrandTheme::Luxury);
        assert!(view.loading);
        assert_eq!(view.headline, "The Night Reclaimed.");
    }

    #[test]
    fn test_ready_view_shows_generated_copy() {
        let mut slot = CopySlot::default();
        let token = slot.begin();
        let applied = slot.resolve(
            token,
            GeneratedCopy {
                headline: "Cortisol, Contained".to_string(),
                body: "Vapor in, noise out.".to_string(),
            },
        );
        assert!(applied);

        let view = CopyView::from_slot(&slot, BrandTheme::Clinical);
        assert!(!view.loading);
        assert_eq!(view.headline, "Cortisol, Contained");
        assert_eq!(view.body, "Vapor in, noise out.");
    }

    #[tokio::test]
    async fn test_spawn_generation_resolves_fallback() {
        let state = test_state();
        let shopper = ShopperId::new();

        let token = {
            let entry = state.sessions().session(shopper).await;
            entry.lock().await.copy.begin()
        };

        spawn_generation(state.clone(), shopper, BrandTheme::Luxury, token);

        // Unconfigured service resolves with the fallback pair.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let entry = state.sessions().session(shopper).await;
        let shop = entry.lock().await;
        assert_eq!(
            shop.copy.ready().map(|c| c.headline.as_str()),
            Some("The Reset Anchor")
        );
    }

    #[tokio::test]
    async fn test_spawn_generation_discards_stale_token() {
        let state = test_state();
        let shopper = ShopperId::new();

        let stale = {
            let entry = state.sessions().session(shopper).await;
            let mut shop = entry.lock().await;
            let stale = shop.copy.begin();
            // Theme switched before the fetch landed.
            shop.copy.invalidate();
            stale
        };

        spawn_generation(state.clone(), shopper, BrandTheme::Clinical, stale);

        tokio::time::sleep(Duration::from_millis(50)).await;
        let entry = state.sessions().session(shopper).await;
        let shop = entry.lock().await;
        assert!(shop.copy.ready().is_none());
    }
}
