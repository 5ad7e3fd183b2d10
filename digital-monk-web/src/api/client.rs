use digital_monk::client::{GenerateRequest, classify_failure, interpret_response};
use digital_monk::prompt::fortune_prompt;
use digital_monk::{Config, FortuneClient, FortuneError};
use gloo_net::http::Request;

/// Gemini `generateContent` client over the browser's fetch.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: Config,
}

impl GeminiClient {
    pub fn new(config: Config) -> Self {
        if !config.has_api_key() {
            log::error!(
                "Gemini API key (API_KEY) is not set. The application will not be able to fetch fortunes."
            );
        }
        Self { config }
    }
}

impl FortuneClient for GeminiClient {
    async fn request_fortune(&self, situation: &str) -> Result<String, FortuneError> {
        let api_key = self.config.require_api_key()?;

        let request = Request::post(&self.config.generate_url())
            .query([("key", api_key)])
            .json(&GenerateRequest::new(fortune_prompt(situation)))
            .map_err(|e| classify_failure(&format!("Failed to serialize request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| classify_failure(&e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| classify_failure(&format!("Failed to read response: {}", e)))?;

        interpret_response(status, &body)
    }
}
