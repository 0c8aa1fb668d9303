//! AI extraction pass.
//!
//! Builds one structured-output request per run, sends it through the
//! [`InferenceService`] seam, and validates the JSON payload that comes
//! back. Parsing stays on this side of the seam so the whole pass can be
//! exercised with canned payloads and no live backend.

pub mod openai;
pub mod prompts;
pub mod schema;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::Result;
use crate::scan::collapse_whitespace;
use crate::types::link::{ExtractedLink, Platform};

pub use openai::OpenAIInference;

/// Hard cap on input passed to the service, in bytes.
///
/// Longer input is cut at this bound before it enters the prompt; nothing
/// beyond it reaches the backend.
pub const MAX_INPUT_LEN: usize = 15_000;

/// A fully-built structured-output request.
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    /// Chat model identifier.
    pub model: String,

    /// System instructions.
    pub system: String,

    /// User prompt carrying the truncated input text.
    pub user: String,

    /// Strict-mode JSON schema the response must satisfy.
    pub schema: serde_json::Value,
}

/// Boundary to the external inference backend.
///
/// Implementations wrap one provider and return the raw JSON payload
/// produced under the request's schema. Exactly one attempt per call: no
/// streaming, no retries, no engine-imposed timeout.
#[async_trait]
pub trait InferenceService: Send + Sync {
    /// Execute one structured-output call and return the raw payload.
    async fn generate_structured(&self, request: &InferenceRequest) -> Result<String>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}

/// Wire shape of the structured response.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AILinkResponse {
    /// Video links found in the input. An absent field reads as empty.
    #[serde(default)]
    pub videos: Vec<AILinkItem>,
}

/// One video link as reported by the service.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AILinkItem {
    /// Normalized (de-obfuscated) URL.
    pub url: String,

    /// Platform label, free-form.
    pub platform: String,

    /// Short snippet of surrounding source text.
    pub context: Option<String>,

    /// Video title when the source text states one.
    pub title: Option<String>,
}

/// Truncate to at most `max_bytes`, backing up to a char boundary.
pub fn truncate_to_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Build the structured request for one extraction pass.
pub fn build_request(text: &str, model: &str) -> InferenceRequest {
    let clipped = truncate_to_char_boundary(text, MAX_INPUT_LEN);
    if clipped.len() < text.len() {
        debug!(
            original = text.len(),
            clipped = clipped.len(),
            "input truncated for inference"
        );
    }

    InferenceRequest {
        model: model.to_string(),
        system: prompts::EXTRACT_LINKS_PROMPT.to_string(),
        user: prompts::format_extract_links_prompt(clipped),
        schema: schema::strict_object_schema::<AILinkResponse>(),
    }
}

/// Parse a raw service payload into the wire shape.
///
/// Failure here means the service broke the schema contract; callers treat
/// it as a service failure, never as "no matches". Serde would read JSON
/// arrays positionally into the derived structs, so the top-level value and
/// every `videos` entry must be objects before field decoding; anything
/// else fails instead of coercing.
pub fn parse_payload(payload: &str) -> std::result::Result<AILinkResponse, serde_json::Error> {
    use serde::de::Error;

    let value: serde_json::Value = serde_json::from_str(payload)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("payload is not a JSON object"));
    }
    if let Some(items) = value.get("videos").and_then(serde_json::Value::as_array) {
        if items.iter().any(|item| !item.is_object()) {
            return Err(serde_json::Error::custom(
                "videos entries must be JSON objects",
            ));
        }
    }
    serde_json::from_value(value)
}

/// Map the wire response into engine links.
///
/// URLs pass through verbatim; context and title are collapsed to single
/// lines, with empty strings normalized to `None`. A URL that does not
/// parse is kept but logged as a service-quality diagnostic.
pub fn normalize_links(response: AILinkResponse) -> Vec<ExtractedLink> {
    response
        .videos
        .into_iter()
        .map(|item| {
            if Url::parse(&item.url).is_err() {
                warn!(url = %item.url, "service returned a URL that does not parse");
            }
            ExtractedLink {
                url: item.url,
                platform: Platform::from_label(&item.platform),
                context: item
                    .context
                    .map(|c| collapse_whitespace(&c))
                    .filter(|c| !c.is_empty()),
                title: item
                    .title
                    .map(|t| collapse_whitespace(&t))
                    .filter(|t| !t.is_empty()),
            }
        })
        .collect()
}

/// Run one full extraction pass through `service`.
pub async fn extract_with_service<S: InferenceService>(
    service: &S,
    text: &str,
    model: &str,
) -> Result<Vec<ExtractedLink>> {
    let request = build_request(text, model);
    debug!(
        backend = service.name(),
        model = %request.model,
        "dispatching inference request"
    );

    let payload = service.generate_structured(&request).await?;
    let response = parse_payload(&payload)?;
    Ok(normalize_links(response))
}
