//! Core types for slide generation.
//!
//! This module contains the layout description ([`SlideConfig`] and its
//! parts), the legacy review record ([`ReviewData`]), the views of a remote
//! deck returned by a gateway, and the final [`GenerationResult`].
//!
//! All input types deserialize from the camelCase JSON documents users write.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Base URL for links to generated decks.
const PRESENTATION_URL_BASE: &str = "https://docs.google.com/presentation/d";

// =============================================================================
// Colors
// =============================================================================

/// An RGB color with channels in `[0, 1]`.
///
/// Missing channels deserialize as `0.0`, matching how the presentation
/// service itself omits zero channels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel.
    #[serde(default)]
    pub red: f64,
    /// Green channel.
    #[serde(default)]
    pub green: f64,
    /// Blue channel.
    #[serde(default)]
    pub blue: f64,
}

impl RgbColor {
    /// Pure black, also the fallback for anything unresolvable.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Pure white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a color from its three channels.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

/// A color as written in a layout document.
///
/// Either a literal `{red, green, blue}` object or a string token that is
/// resolved by [`crate::color::resolve`] (theme key, palette name, or
/// `#RRGGBB`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRef {
    /// A literal color, used as-is.
    Literal(RgbColor),
    /// A named or hex reference.
    Reference(String),
}

impl From<RgbColor> for ColorRef {
    fn from(color: RgbColor) -> Self {
        Self::Literal(color)
    }
}

impl From<&str> for ColorRef {
    fn from(token: &str) -> Self {
        Self::Reference(token.to_string())
    }
}

// =============================================================================
// Slide layout
// =============================================================================

/// Per-deck theme: named colors that override the built-in palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideTheme {
    /// Named colors.
    #[serde(default)]
    pub colors: HashMap<String, RgbColor>,
    /// Preferred font name. Text boxes are currently always set in the
    /// compiler's fixed font.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_font: Option<String>,
}

/// A positioned text box. Geometry is in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideElement {
    /// Text content.
    pub text: String,
    /// Left edge, in points.
    pub x: f64,
    /// Top edge, in points.
    pub y: f64,
    /// Width, in points.
    pub w: f64,
    /// Height, in points.
    pub h: f64,
    /// Font size, in points.
    pub size: f64,
    /// Text color.
    pub color: ColorRef,
    /// Bold text.
    #[serde(default)]
    pub bold: bool,
}

/// One slide of a layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideDefinition {
    /// Background fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorRef>,
    /// Text boxes, in z-order.
    #[serde(default)]
    pub elements: Vec<SlideElement>,
    /// Speaker notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SlideDefinition {
    /// Speaker notes, if present and non-empty.
    #[must_use]
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}

/// A whole deck description.
///
/// When `presentation_id` is set the target deck is cleared and rebuilt;
/// otherwise a new deck titled `title` is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideConfig {
    /// Deck title (used only when creating).
    pub title: String,
    /// Optional theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<SlideTheme>,
    /// Slides, in order.
    #[serde(default)]
    pub slides: Vec<SlideDefinition>,
    /// Existing deck to replace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_id: Option<String>,
}

impl SlideConfig {
    /// Theme colors, if a theme is set.
    #[must_use]
    pub fn theme_colors(&self) -> Option<&HashMap<String, RgbColor>> {
        self.theme.as_ref().map(|t| &t.colors)
    }

    /// Target an existing deck instead of creating a new one.
    pub fn set_presentation_id(&mut self, id: impl Into<String>) {
        self.presentation_id = Some(id.into());
    }
}

// =============================================================================
// Legacy review data
// =============================================================================

/// Outcome of one quality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// No problems.
    Pass,
    /// Minor concerns.
    Warning,
    /// Problems found.
    Issue,
}

impl CheckStatus {
    /// Short label used on slides.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "OK",
            Self::Warning => "WARN",
            Self::Issue => "ISSUE",
        }
    }
}

/// One quality check category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheck {
    /// Check outcome.
    pub status: CheckStatus,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
}

/// The fixed four-category assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAssessment {
    /// Code quality.
    pub code_quality: QualityCheck,
    /// Test coverage.
    pub tests: QualityCheck,
    /// Security.
    pub security: QualityCheck,
    /// Performance.
    pub performance: QualityCheck,
}

/// Review verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Approve the change.
    Approve,
    /// Changes required before merge.
    RequestChanges,
    /// Comment only.
    Comment,
}

impl Verdict {
    /// The verdict as written in review data.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::RequestChanges => "REQUEST_CHANGES",
            Self::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk level of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk (the default).
    #[default]
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
}

impl RiskLevel {
    /// Upper-case label used on slides.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// A code review outcome, rendered by the fixed five-slide template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    /// Pull request number.
    pub pr_number: u64,
    /// Pull request title.
    pub pr_title: String,
    /// Pull request author.
    pub pr_author: String,
    /// Pull request date (ISO 8601).
    pub pr_date: String,
    /// Repository name.
    pub repository: String,

    /// Summary paragraph.
    pub summary: String,
    /// Change bullets.
    #[serde(default)]
    pub changes: Vec<String>,

    /// Quality assessment.
    pub quality_assessment: QualityAssessment,

    /// Issues found.
    #[serde(default)]
    pub issues_found: Vec<String>,
    /// Suggestions.
    #[serde(default)]
    pub suggestions: Vec<String>,

    /// Verdict.
    pub verdict: Verdict,
    /// Verdict explanation.
    pub verdict_explanation: String,

    /// Business impact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_impact: Option<String>,
    /// Risk level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    /// Risk factors.
    #[serde(default)]
    pub risk_factors: Vec<String>,
    /// Affected areas.
    #[serde(default)]
    pub affected_areas: Vec<String>,
}

// =============================================================================
// Remote deck views
// =============================================================================

/// A deck freshly created by a gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPresentation {
    /// Deck id.
    pub presentation_id: String,
    /// The default slide the service adds to every new deck.
    pub initial_slide_id: Option<String>,
}

/// A placeholder shape on a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Shape object id.
    pub object_id: String,
    /// Placeholder type as reported by the service (`TITLE`, `BODY`, ...).
    pub kind: String,
}

/// One slide of a fetched deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideInfo {
    /// Slide object id.
    pub object_id: String,
    /// Speaker notes shape id.
    pub notes_object_id: Option<String>,
    /// Placeholders on the slide.
    pub placeholders: Vec<Placeholder>,
}

impl SlideInfo {
    /// Create a slide with no notes and no placeholders.
    #[must_use]
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            ..Default::default()
        }
    }

    /// Object id of the first placeholder of the given type.
    #[must_use]
    pub fn placeholder(&self, kind: &str) -> Option<&str> {
        self.placeholders
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| p.object_id.as_str())
    }
}

/// A fetched deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresentationInfo {
    /// Deck id.
    pub presentation_id: String,
    /// Slides, in order.
    pub slides: Vec<SlideInfo>,
}

/// Handle to a generated deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Deck id.
    pub presentation_id: String,
    /// Link to open the deck in the editor.
    pub presentation_url: String,
}

impl GenerationResult {
    /// Build the result for a deck id.
    #[must_use]
    pub fn new(presentation_id: impl Into<String>) -> Self {
        let presentation_id = presentation_id.into();
        let presentation_url = format!("{}/{}/edit", PRESENTATION_URL_BASE, presentation_id);
        Self {
            presentation_id,
            presentation_url,
        }
    }
}
