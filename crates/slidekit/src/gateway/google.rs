//! Google Slides backend.
//!
//! This module provides the [`GoogleSlidesGateway`] implementation, which
//! calls the Slides REST API (`v1`) with a bearer access token. Obtaining the
//! token is the caller's job.
//!
//! Non-2xx responses are turned into [`Error::Http`] carrying the service's
//! own error message when the body has one.

use crate::error::{Error, Result};
use crate::gateway::Gateway;
use crate::request::Request;
use crate::types::{CreatedPresentation, Placeholder, PresentationInfo, SlideInfo};
use serde::Deserialize;
use serde_json::json;
use ureq::Body;
use ureq::http::Response;

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://slides.googleapis.com";

/// Google Slides gateway.
///
/// # Example
///
/// ```no_run
/// use slidekit::gateway::Gateway;
/// use slidekit::gateway::google::GoogleSlidesGateway;
///
/// let gateway = GoogleSlidesGateway::new("ya29.token");
/// let deck = gateway.get_presentation("1AbC").unwrap();
/// println!("{} slides", deck.slides.len());
/// ```
pub struct GoogleSlidesGateway {
    /// HTTP agent for requests.
    agent: ureq::Agent,
    /// API base URL.
    api_base: String,
    /// OAuth access token.
    access_token: String,
}

impl GoogleSlidesGateway {
    /// Create a gateway against the public API.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_api_base(DEFAULT_API_BASE, access_token)
    }

    /// Create a gateway with a custom API base (for testing or proxies).
    #[must_use]
    pub fn with_api_base(api_base: impl Into<String>, access_token: impl Into<String>) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Get the current API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn presentations_url(&self) -> String {
        format!("{}/v1/presentations", self.api_base)
    }

    fn presentation_url(&self, presentation_id: &str) -> String {
        format!("{}/v1/presentations/{}", self.api_base, presentation_id)
    }

    fn batch_update_url(&self, presentation_id: &str) -> String {
        format!(
            "{}/v1/presentations/{}:batchUpdate",
            self.api_base, presentation_id
        )
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl Gateway for GoogleSlidesGateway {
    fn create_presentation(&self, title: &str) -> Result<CreatedPresentation> {
        let url = self.presentations_url();
        log::debug!("POST {}", url);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.authorization())
            .send_json(json!({ "title": title }))?;

        let presentation: ApiPresentation = check_status(response)?.body_mut().read_json()?;
        Ok(presentation.into())
    }

    fn get_presentation(&self, presentation_id: &str) -> Result<PresentationInfo> {
        let url = self.presentation_url(presentation_id);
        log::debug!("GET {}", url);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.authorization())
            .call()?;

        let presentation: ApiPresentation = check_status(response)?.body_mut().read_json()?;
        Ok(presentation.into())
    }

    fn batch_update(&self, presentation_id: &str, requests: &[Request]) -> Result<()> {
        let url = self.batch_update_url(presentation_id);
        log::debug!("POST {} ({} requests)", url, requests.len());

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.authorization())
            .send_json(json!({ "requests": requests }))?;

        check_status(response)?;
        Ok(())
    }
}

/// Pass 2xx responses through; turn anything else into an error.
fn check_status(mut response: Response<Body>) -> Result<Response<Body>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .body_mut()
        .read_json::<ApiErrorResponse>()
        .map(|body| body.error.message)
        .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));

    Err(Error::http(message, Some(status.as_u16())))
}

// =============================================================================
// Slides API response types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPresentation {
    presentation_id: String,
    #[serde(default)]
    slides: Vec<ApiPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPage {
    object_id: String,
    #[serde(default)]
    page_elements: Vec<ApiPageElement>,
    slide_properties: Option<ApiSlideProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSlideProperties {
    notes_page: Option<ApiNotesPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiNotesPage {
    notes_properties: Option<ApiNotesProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiNotesProperties {
    speaker_notes_object_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPageElement {
    object_id: String,
    shape: Option<ApiShape>,
}

#[derive(Debug, Deserialize)]
struct ApiShape {
    placeholder: Option<ApiPlaceholder>,
}

#[derive(Debug, Deserialize)]
struct ApiPlaceholder {
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl From<ApiPage> for SlideInfo {
    fn from(page: ApiPage) -> Self {
        let notes_object_id = page
            .slide_properties
            .and_then(|p| p.notes_page)
            .and_then(|n| n.notes_properties)
            .and_then(|n| n.speaker_notes_object_id);

        let placeholders = page
            .page_elements
            .into_iter()
            .filter_map(|element| {
                let kind = element.shape?.placeholder?.kind?;
                Some(Placeholder {
                    object_id: element.object_id,
                    kind,
                })
            })
            .collect();

        Self {
            object_id: page.object_id,
            notes_object_id,
            placeholders,
        }
    }
}

impl From<ApiPresentation> for PresentationInfo {
    fn from(p: ApiPresentation) -> Self {
        Self {
            presentation_id: p.presentation_id,
            slides: p.slides.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ApiPresentation> for CreatedPresentation {
    fn from(p: ApiPresentation) -> Self {
        Self {
            initial_slide_id: p.slides.first().map(|s| s.object_id.clone()),
            presentation_id: p.presentation_id,
        }
    }
}
