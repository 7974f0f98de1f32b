//! AI content generation with local failure recovery.
//!
//! Nothing in this module returns an error to callers: a failed text call
//! yields the fixed fallback paragraph, a failed or imageless image call
//! yields `None`. Degrading the UI is the whole error-handling story.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::warn;

use bazaarlens_common::{SelectedLocation, SimulationConfig};
use gemini_client::{Gemini, ImageParams};

use crate::prompts;

/// Shown in place of the analysis when the text call fails for any reason,
/// including a missing credential.
pub const ANALYSIS_FALLBACK: &str = "Market analysis is unavailable right now. \
     The analysis service could not be reached — try generating again.";

const TEXT_MODEL: &str = "gemini-2.5-flash";
const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Produces the two generation results for a selection. Implemented by the
/// Gemini-backed generator and by in-memory mocks in tests.
#[async_trait]
pub trait AnalysisGenerator: Send + Sync {
    /// Market-analysis markdown. Infallible: failures yield the fallback
    /// string.
    async fn generate_location_analysis(
        &self,
        location: &SelectedLocation,
        config: &SimulationConfig,
    ) -> String;

    /// Storefront panorama as a `data:<mime>;base64,<payload>` URI, or
    /// `None` when no usable image came back. Infallible.
    async fn generate_shop_visualization(
        &self,
        location: &SelectedLocation,
        config: &SimulationConfig,
    ) -> Option<String>;
}

/// Gemini-backed generator. Holds an explicitly constructed client; with no
/// credential available it degrades to the documented fallbacks instead of
/// crashing.
pub struct GeminiGenerator {
    client: Option<Gemini>,
}

impl GeminiGenerator {
    pub fn new(client: Gemini) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// A generator with no credential: every call takes the fallback path.
    pub fn degraded() -> Self {
        Self { client: None }
    }
}

#[async_trait]
impl AnalysisGenerator for GeminiGenerator {
    async fn generate_location_analysis(
        &self,
        location: &SelectedLocation,
        config: &SimulationConfig,
    ) -> String {
        let Some(client) = &self.client else {
            warn!("No AI credential configured, returning fallback analysis");
            return ANALYSIS_FALLBACK.to_string();
        };

        let prompt = prompts::analysis_prompt(location, config);
        match client.generate_text(TEXT_MODEL, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Analysis generation failed, returning fallback");
                ANALYSIS_FALLBACK.to_string()
            }
        }
    }

    async fn generate_shop_visualization(
        &self,
        location: &SelectedLocation,
        config: &SimulationConfig,
    ) -> Option<String> {
        let client = self.client.as_ref()?;

        let prompt = prompts::visualization_prompt(location, config);
        let params = ImageParams {
            aspect_ratio: Some("2:1".to_string()),
        };
        match client.generate_image(IMAGE_MODEL, &prompt, &params).await {
            Ok(Some(image)) => {
                // An inline payload that is not valid base64 counts as "no
                // image", same as an absent one.
                if BASE64.decode(&image.data).is_err() {
                    warn!("Image payload is not valid base64, treating as no image");
                    return None;
                }
                Some(format!("data:{};base64,{}", image.mime_type, image.data))
            }
            Ok(None) => {
                warn!("Image response carried no inline payload");
                None
            }
            Err(e) => {
                warn!(error = %e, "Visualization generation failed");
                None
            }
        }
    }
}
