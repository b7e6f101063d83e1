//! Edit operations sent in a batchUpdate call.
//!
//! Each [`Request`] serializes to exactly one entry of the service's
//! `requests` array, e.g. `{"createSlide": {...}}`.

use crate::types::RgbColor;
use serde::Serialize;

/// Units understood by the presentation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    /// English Metric Units (12700 per point).
    Emu,
    /// Points.
    Pt,
}

/// A magnitude with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    /// Value.
    pub magnitude: f64,
    /// Unit of `magnitude`.
    pub unit: Unit,
}

impl Dimension {
    /// A length in EMU.
    #[must_use]
    pub fn emu(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Emu,
        }
    }

    /// A length in points.
    #[must_use]
    pub fn pt(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Pt,
        }
    }
}

/// One elementary edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    /// Add a slide.
    CreateSlide(CreateSlide),
    /// Change page properties (background).
    UpdatePageProperties(UpdatePageProperties),
    /// Add a shape.
    CreateShape(CreateShape),
    /// Insert text into a shape.
    InsertText(InsertText),
    /// Style a shape's text.
    UpdateTextStyle(UpdateTextStyle),
    /// Style a shape's paragraphs.
    UpdateParagraphStyle(UpdateParagraphStyle),
    /// Delete a page or page element.
    DeleteObject(DeleteObject),
}

impl Request {
    /// Short operation name, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateSlide(_) => "createSlide",
            Self::UpdatePageProperties(_) => "updatePageProperties",
            Self::CreateShape(_) => "createShape",
            Self::InsertText(_) => "insertText",
            Self::UpdateTextStyle(_) => "updateTextStyle",
            Self::UpdateParagraphStyle(_) => "updateParagraphStyle",
            Self::DeleteObject(_) => "deleteObject",
        }
    }

    /// Id of the object this operation creates or targets.
    #[must_use]
    pub fn object_id(&self) -> &str {
        match self {
            Self::CreateSlide(r) => &r.object_id,
            Self::UpdatePageProperties(r) => &r.object_id,
            Self::CreateShape(r) => &r.object_id,
            Self::InsertText(r) => &r.object_id,
            Self::UpdateTextStyle(r) => &r.object_id,
            Self::UpdateParagraphStyle(r) => &r.object_id,
            Self::DeleteObject(r) => &r.object_id,
        }
    }

    /// Delete a slide or shape.
    #[must_use]
    pub fn delete(object_id: impl Into<String>) -> Self {
        Self::DeleteObject(DeleteObject {
            object_id: object_id.into(),
        })
    }

    /// Insert text at the start of a shape.
    #[must_use]
    pub fn insert_text_at_start(object_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::InsertText(InsertText {
            object_id: object_id.into(),
            text: text.into(),
            insertion_index: Some(0),
        })
    }
}

// =============================================================================
// Slides and pages
// =============================================================================

/// Predefined slide layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredefinedLayout {
    /// Empty slide.
    Blank,
    /// Title placeholder plus body placeholder.
    TitleAndBody,
}

/// Layout reference for a new slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReference {
    /// Layout to use.
    pub predefined_layout: PredefinedLayout,
}

/// `createSlide` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlide {
    /// Id for the new slide.
    pub object_id: String,
    /// Position in the deck; appended when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insertion_index: Option<usize>,
    /// Layout of the slide.
    pub slide_layout_reference: LayoutReference,
}

/// `updatePageProperties` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageProperties {
    /// Page to update.
    pub object_id: String,
    /// New properties.
    pub page_properties: PageProperties,
    /// Field mask.
    pub fields: String,
}

/// Page properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProperties {
    /// Background fill.
    pub page_background_fill: PageBackgroundFill,
}

/// Page background fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBackgroundFill {
    /// Solid fill.
    pub solid_fill: SolidFill,
}

/// Solid color fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidFill {
    /// Fill color.
    pub color: OpaqueColor,
}

/// A theme-independent color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpaqueColor {
    /// RGB value.
    pub rgb_color: RgbColor,
}

/// Optional color wrapper used in text styles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalColor {
    /// The color.
    pub opaque_color: OpaqueColor,
}

// =============================================================================
// Shapes and text
// =============================================================================

/// Shape types we create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    /// A plain text box.
    TextBox,
}

/// `createShape` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShape {
    /// Id for the new shape.
    pub object_id: String,
    /// Shape type.
    pub shape_type: ShapeType,
    /// Placement.
    pub element_properties: ElementProperties,
}

/// Placement of a new page element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProperties {
    /// Page the element goes on.
    pub page_object_id: String,
    /// Size.
    pub size: Size,
    /// Position.
    pub transform: AffineTransform,
}

/// Width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    /// Width.
    pub width: Dimension,
    /// Height.
    pub height: Dimension,
}

/// Translation-only affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineTransform {
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Horizontal offset.
    pub translate_x: f64,
    /// Vertical offset.
    pub translate_y: f64,
    /// Unit of the offsets.
    pub unit: Unit,
}

/// `insertText` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertText {
    /// Shape to insert into.
    pub object_id: String,
    /// Text to insert.
    pub text: String,
    /// Character offset; defaults to the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insertion_index: Option<usize>,
}

/// `updateTextStyle` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyle {
    /// Shape to style.
    pub object_id: String,
    /// Style to apply.
    pub style: TextStyle,
    /// Field mask.
    pub fields: String,
}

/// Text style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font family.
    pub font_family: String,
    /// Font size.
    pub font_size: Dimension,
    /// Text color.
    pub foreground_color: OptionalColor,
    /// Bold.
    pub bold: bool,
}

/// `updateParagraphStyle` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyle {
    /// Shape to style.
    pub object_id: String,
    /// Style to apply.
    pub style: ParagraphStyle,
    /// Field mask.
    pub fields: String,
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Alignment {
    /// Start of the line (left in LTR text).
    Start,
}

/// Paragraph style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    /// Line spacing, in percent.
    pub line_spacing: f64,
    /// Alignment.
    pub alignment: Alignment,
}

/// `deleteObject` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteObject {
    /// Object to delete.
    pub object_id: String,
}
