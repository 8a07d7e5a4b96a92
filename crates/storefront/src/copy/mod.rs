//! AI marketing copy generation.
//!
//! # Architecture
//!
//! - Single-shot requests to the Anthropic Messages API via `reqwest`
//! - One prompt per brand theme, each asking for a JSON headline/body pair
//! - Copy generation NEVER blocks or fails a page: when no API key is
//!   configured or the request errors, the fixed fallback pair is served
//! - Stale-response discipline lives in [`axis_core::CopySlot`]; handlers
//!   spawn generation and resolve against the slot's token
//!
//! # Example
//!
//! ```rust,ignore
//! use axis_storefront::copy::CopyService;
//!
//! let service = CopyService::new(config.copy.as_ref());
//! let copy = service.generate(BrandTheme::Luxury).await;
//! println!("{}", copy.headline);
//! ```

mod client;
mod error;
mod types;

pub use client::CopyClient;
pub use error::CopyError;

use tracing::{debug, warn};

use axis_core::{BrandTheme, GeneratedCopy};

use crate::config::CopyConfig;

/// Marketing copy generator with graceful degradation.
///
/// Wraps an optional [`CopyClient`]. Without an API key the service still
/// works, serving the fallback pair for every theme.
#[derive(Clone)]
pub struct CopyService {
    client: Option<CopyClient>,
}

impl CopyService {
    /// Create the service. `None` config means fallback-only mode.
    #[must_use]
    pub fn new(config: Option<&CopyConfig>) -> Self {
        Self {
            client: config.map(CopyClient::new),
        }
    }

    /// Whether a real API client is configured.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.client.is_some()
    }

    /// Generate copy for a theme. Infallible: any failure yields the fallback.
    pub async fn generate(&self, theme: BrandTheme) -> GeneratedCopy {
        let Some(client) = &self.client else {
            debug!(theme = %theme, "No copy API key configured, using fallback");
            return Self::fallback();
        };

        match client.generate(prompt_for(theme)).await {
            Ok(copy) => copy,
            Err(e) => {
                warn!(theme = %theme, error = %e, "Copy generation failed, using fallback");
                Self::fallback()
            }
        }
    }

    /// The fixed copy served when generation is unavailable or fails.
    #[must_use]
    pub fn fallback() -> GeneratedCopy {
        GeneratedCopy {
            headline: "The Reset Anchor".to_string(),
            body: "Experience the ultimate restoration ritual. Regulate your cortisol and \
                   reclaim your sleep with Axis Core."
                .to_string(),
        }
    }
}

/// The generation prompt for a brand theme.
fn prompt_for(theme: BrandTheme) -> &'static str {
    match theme {
        BrandTheme::Clinical => {
            "Generate a sterile, scientific, and data-driven marketing headline and a short \
             paragraph (max 40 words) for 'Axis Core', a rose-scented shower vaporizer that \
             regulates cortisol levels. Focus on \"HPA Axis Regulation\", \"Bio-availability\", \
             and \"Neuro-chemistry\". Use clinical terminology. Return JSON with keys \
             \"headline\" and \"body\" and nothing else."
        }
        BrandTheme::Luxury => {
            "Generate a mysterious, poetic, and opulent marketing headline and a short paragraph \
             (max 40 words) for 'Axis Core', a rose-scented shower vaporizer. Focus on \
             \"Rituals\", \"Sensory Awakening\", \"Deep Rest\", and \"Indulgence\". Use \
             evocative, velvety language. Return JSON with keys \"headline\" and \"body\" and \
             nothing else."
        }
        BrandTheme::Hyperpop => {
            "Generate a loud, aggressive, Gen-Z viral marketing headline and a short paragraph \
             (max 40 words) for 'Axis Core', a rose-scented shower vaporizer. Focus on \"Fixing \
             Sleep\", \"Main Character Energy\", \"Instant Reset\", and use internet slang/caps. \
             Make it sound like a viral TikTok hook. Return JSON with keys \"headline\" and \
             \"body\" and nothing else."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_pair() {
        let copy = CopyService::fallback();
        assert_eq!(copy.headline, "The Reset Anchor");
        assert_eq!(
            copy.body,
            "Experience the ultimate restoration ritual. Regulate your cortisol and reclaim \
             your sleep with Axis Core."
        );
    }

    #[test]
    fn test_prompts_differ_per_theme() {
        let prompts: Vec<_> = BrandTheme::ALL.iter().map(|t| prompt_for(*t)).collect();
        assert!(prompts[0].contains("HPA Axis Regulation"));
        assert!(prompts[1].contains("Sensory Awakening"));
        assert!(prompts[2].contains("Main Character Energy"));
    }

    #[tokio::test]
    async fn test_unconfigured_service_serves_fallback() {
        let service = CopyService::new(None);
        assert!(!service.is_live());

        let copy = service.generate(BrandTheme::Clinical).await;
        assert_eq!(copy, CopyService::fallback());
    }
}
