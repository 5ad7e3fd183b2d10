//! Fortune client seam and Gemini `generateContent` wire handling.
//!
//! The transport lives in the frontend crate; everything that decides what a
//! response *means* lives here so it can be exercised natively.

use serde::{Deserialize, Serialize};

use crate::error::FortuneError;

/// Returned instead of a blank fortune.
pub const EMPTY_FORTUNE_FALLBACK: &str =
    "The digital monk ponders deeply... but the ether is quiet. Try rephrasing your query.";

/// Marker the service puts in its message when the credential is rejected.
const INVALID_KEY_MARKER: &str = "API key not valid";

/// Something that can turn a situation sentence into a fortune.
///
/// Implementations issue exactly one request per call and never retry.
#[allow(async_fn_in_trait)]
pub trait FortuneClient {
    async fn request_fortune(&self, situation: &str) -> Result<String, FortuneError>;
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

impl GenerateRequest {
    /// A single-turn request carrying one text prompt, no generation config.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text)
    }
}

// ============================================================================
// Interpretation
// ============================================================================

/// Trim the generated text, substituting the fallback sentence for blank output.
pub fn normalize_fortune(text: Option<&str>) -> String {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => {
            log::warn!("Oracle returned an empty fortune, using fallback");
            EMPTY_FORTUNE_FALLBACK.to_string()
        }
    }
}

/// Map a failure message from the transport or service to an error kind.
pub fn classify_failure(message: &str) -> FortuneError {
    log::error!("Error calling the oracle: {}", message);
    if message.contains(INVALID_KEY_MARKER) {
        FortuneError::InvalidApiKey
    } else {
        FortuneError::ServiceUnavailable
    }
}

/// Decide the outcome of a completed HTTP exchange.
pub fn interpret_response(status: u16, body: &str) -> Result<String, FortuneError> {
    let parsed = serde_json::from_str::<GenerateResponse>(body);
    let success = (200..300).contains(&status);

    match parsed {
        Ok(GenerateResponse {
            error: Some(err), ..
        }) => Err(classify_failure(&err.message)),
        Ok(response) if success => Ok(normalize_fortune(response.text().as_deref())),
        Ok(_) => Err(classify_failure(&format!("HTTP {}: {}", status, body))),
        Err(e) if success => Err(classify_failure(&format!(
            "Failed to parse oracle response: {}",
            e
        ))),
        Err(_) => Err(classify_failure(&format!("HTTP {}: {}", status, body))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateRequest::new("hello")).unwrap();
        assert_eq!(body, json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_success_is_trimmed() {
        let body = json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": " Stay caffeinated. "}]}}]
        })
        .to_string();
        assert_eq!(interpret_response(200, &body).unwrap(), "Stay caffeinated.");
    }

    #[test]
    fn test_parts_are_concatenated() {
        let body = json!({
            "candidates": [{"content": {"parts": [{"text": "Reboot "}, {"text": "your soul."}]}}]
        })
        .to_string();
        assert_eq!(interpret_response(200, &body).unwrap(), "Reboot your soul.");
    }

    #[test]
    fn test_blank_or_missing_text_uses_fallback() {
        let blank = json!({"candidates": [{"content": {"parts": [{"text": "   \n"}]}}]}).to_string();
        assert_eq!(interpret_response(200, &blank).unwrap(), EMPTY_FORTUNE_FALLBACK);

        let none = json!({"candidates": []}).to_string();
        assert_eq!(interpret_response(200, &none).unwrap(), EMPTY_FORTUNE_FALLBACK);
    }

    #[test]
    fn test_invalid_key_error_body() {
        let body = json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })
        .to_string();
        assert_eq!(interpret_response(400, &body), Err(FortuneError::InvalidApiKey));
    }

    #[test]
    fn test_other_failures_are_unavailable() {
        assert_eq!(
            interpret_response(503, "upstream connect error"),
            Err(FortuneError::ServiceUnavailable)
        );
        assert_eq!(
            interpret_response(200, "<html>not json</html>"),
            Err(FortuneError::ServiceUnavailable)
        );
        let quota = json!({"error": {"code": 429, "message": "Resource has been exhausted"}}).to_string();
        assert_eq!(interpret_response(429, &quota), Err(FortuneError::ServiceUnavailable));
    }

    #[test]
    fn test_classify_transport_message() {
        assert_eq!(
            classify_failure("Request failed: API key not valid"),
            FortuneError::InvalidApiKey
        );
        assert_eq!(classify_failure("NetworkError"), FortuneError::ServiceUnavailable);
    }
}
