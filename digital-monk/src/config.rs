//! Oracle connection settings.

use crate::error::FortuneError;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";

/// First non-blank of `primary` and `fallback`.
fn pick_api_key(primary: Option<&str>, fallback: Option<&str>) -> Option<String> {
    let non_blank = |v: &&str| !v.trim().is_empty();
    primary
        .filter(non_blank)
        .or(fallback.filter(non_blank))
        .map(str::to_string)
}

/// Connection settings for the generative-text service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API credential; `None` when not configured.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Config {
    /// Config with the default model and endpoint. A blank key counts as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Config baked in at build time.
    ///
    /// The key comes from `API_KEY`, falling back to `GEMINI_API_KEY`; the model
    /// can be overridden with `GEMINI_MODEL`.
    pub fn from_build_env() -> Self {
        let api_key = pick_api_key(option_env!("API_KEY"), option_env!("GEMINI_API_KEY"));
        let mut config = Self::new(api_key);
        if let Some(model) = option_env!("GEMINI_MODEL").filter(|m| !m.is_empty()) {
            config.model = model.to_string();
        }
        config
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The credential, or `MissingApiKey` when none is configured.
    pub fn require_api_key(&self) -> Result<&str, FortuneError> {
        self.api_key.as_deref().ok_or(FortuneError::MissingApiKey)
    }

    /// `generateContent` URL for the configured model, without the key.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}
