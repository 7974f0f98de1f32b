use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::debug;

use crate::error::AiError;
use crate::types::*;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Optional knobs for image generation.
#[derive(Debug, Clone, Default)]
pub struct ImageParams {
    /// Aspect ratio hint, e.g. "16:9" or "2:1".
    pub aspect_ratio: Option<String>,
}

/// An inline image payload returned by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64-encoded bytes, exactly as returned by the API.
    pub data: String,
}

/// Google Gemini client. Constructed explicitly and passed to whatever needs
/// it — there is no process-global instance.
#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http: reqwest::Client::new(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, AiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AiError::Config("GEMINI_API_KEY environment variable not set".into()))?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn headers(&self) -> Result<HeaderMap, AiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| AiError::Config("API key contains invalid header bytes".into()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn generate(&self, model: &str, request: &GenerateRequest) -> Result<GenerateResponse, AiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        debug!(model, "Gemini generateContent request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AiError::Api(format!(
                "Gemini API error ({status}): {error_text}"
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Single-turn text generation. Returns the concatenated text parts of
    /// the first candidate.
    pub async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, AiError> {
        let request = GenerateRequest::text_prompt(prompt).generation_config(GenerationConfig {
            max_output_tokens: Some(1024),
            ..Default::default()
        });

        let response = self.generate(model, &request).await?;
        response
            .text()
            .ok_or_else(|| AiError::Api("No text in Gemini response".into()))
    }

    /// Image generation via inline-data response parts. Returns `Ok(None)`
    /// when the model answered without an image payload — that is a normal
    /// outcome, not an error.
    pub async fn generate_image(
        &self,
        model: &str,
        prompt: &str,
        params: &ImageParams,
    ) -> Result<Option<InlineImage>, AiError> {
        let config = GenerationConfig {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            image_config: params.aspect_ratio.as_ref().map(|ratio| ImageConfig {
                aspect_ratio: ratio.clone(),
            }),
            ..Default::default()
        };
        let request = GenerateRequest::text_prompt(prompt).generation_config(config);

        let response = self.generate(model, &request).await?;
        Ok(response.inline_data().map(|data| InlineImage {
            mime_type: data.mime_type.clone(),
            data: data.data.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn generate_text_returns_text_part() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [
                        {"content": {"parts": [{"text": "Connaught Place is a commercial hub."}]}}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = Gemini::new("test-key").with_base_url(server.url());
        let text = client
            .generate_text("gemini-2.5-flash", "analyze")
            .await
            .unwrap();
        assert_eq!(text, "Connaught Place is a commercial hub.");
    }

    #[tokio::test]
    async fn generate_image_extracts_inline_payload() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-flash-image:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [
                        {"content": {"parts": [
                            {"text": "Here is the render."},
                            {"inlineData": {"mimeType": "image/png", "data": "cGFub3JhbWE="}}
                        ]}}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = Gemini::new("test-key").with_base_url(server.url());
        let image = client
            .generate_image("gemini-2.5-flash-image", "render", &ImageParams::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "cGFub3JhbWE=");
    }

    #[tokio::test]
    async fn generate_image_without_payload_is_none() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-flash-image:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "cannot comply"}]}}]}"#)
            .create_async()
            .await;

        let client = Gemini::new("test-key").with_base_url(server.url());
        let image = client
            .generate_image("gemini-2.5-flash-image", "render", &ImageParams::default())
            .await
            .unwrap();
        assert!(image.is_none());
    }

    #[tokio::test]
    async fn non_2xx_status_is_api_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(403)
            .with_body(r#"{"error": {"message": "API key not valid"}}"#)
            .create_async()
            .await;

        let client = Gemini::new("bad-key").with_base_url(server.url());
        let err = client
            .generate_text("gemini-2.5-flash", "analyze")
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::Api(_)), "got {err:?}");
    }
}
