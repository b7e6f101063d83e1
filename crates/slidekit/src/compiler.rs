//! Compiling a [`SlideConfig`] into batches of edit operations.
//!
//! Everything here is pure: the [`crate::Client`] supplies the id stamp and
//! fetched deck state, and applies the resulting batches in order.
//!
//! Each slide compiles to a `createSlide`, an optional background update,
//! then four operations per text box (`createShape`, `insertText`,
//! `updateTextStyle`, `updateParagraphStyle`). The four stay contiguous since
//! the last three reference the shape created by the first.

use crate::color::resolve;
use crate::request::{
    AffineTransform, Alignment, CreateShape, CreateSlide, Dimension, ElementProperties,
    InsertText, LayoutReference, OpaqueColor, OptionalColor, PageBackgroundFill, PageProperties,
    ParagraphStyle, PredefinedLayout, Request, ShapeType, Size, SolidFill, TextStyle, Unit,
    UpdatePageProperties, UpdateParagraphStyle, UpdateTextStyle,
};
use crate::types::{PresentationInfo, RgbColor, SlideConfig, SlideElement, SlideInfo};
use std::collections::HashMap;

/// EMU per point.
pub const PT_TO_EMU: f64 = 12700.0;

/// Maximum operations per batchUpdate call.
pub const BATCH_SIZE: usize = 50;

/// Font family for every text box.
pub const DEFAULT_FONT: &str = "Arial";

/// Paragraph line spacing, in percent.
pub const LINE_SPACING: f64 = 115.0;

const TEXT_STYLE_FIELDS: &str = "fontFamily,fontSize,foregroundColor,bold";
const PARAGRAPH_STYLE_FIELDS: &str = "lineSpacing,alignment";

/// An ordered group of operations applied in one call.
pub type Batch = Vec<Request>;

/// Convert points to EMU.
#[must_use]
pub fn pt_to_emu(points: f64) -> f64 {
    points * PT_TO_EMU
}

/// Id of the `index`-th generated slide.
///
/// `stamp` disambiguates ids across runs against the same deck.
#[must_use]
pub fn slide_id(index: usize, stamp: i64) -> String {
    format!("slide_{}_{}", index, stamp)
}

/// Compile a layout into size-bounded batches, preserving order.
#[must_use]
pub fn compile(config: &SlideConfig, stamp: i64) -> Vec<Batch> {
    chunk_requests(build_requests(config, stamp), BATCH_SIZE)
}

/// Build the flat list of slide-building operations.
#[must_use]
pub fn build_requests(config: &SlideConfig, stamp: i64) -> Vec<Request> {
    let theme = config.theme_colors();
    let mut requests = Vec::new();

    for (slide_index, slide) in config.slides.iter().enumerate() {
        let slide_id = slide_id(slide_index, stamp);

        requests.push(Request::CreateSlide(CreateSlide {
            object_id: slide_id.clone(),
            insertion_index: Some(slide_index),
            slide_layout_reference: LayoutReference {
                predefined_layout: PredefinedLayout::Blank,
            },
        }));

        if let Some(background) = &slide.background {
            let color = resolve(background, theme);
            requests.push(background_request(&slide_id, color));
        }

        for (elem_index, element) in slide.elements.iter().enumerate() {
            let element_id = format!("{}_text_{}", slide_id, elem_index);
            requests.extend(text_box_requests(&slide_id, &element_id, element, theme));
        }
    }

    log::debug!(
        "Compiled {} slides into {} requests",
        config.slides.len(),
        requests.len()
    );
    requests
}

/// Split operations into chunks of at most `size`, preserving order.
#[must_use]
pub fn chunk_requests(requests: Vec<Request>, size: usize) -> Vec<Batch> {
    requests
        .chunks(size.max(1))
        .map(<[Request]>::to_vec)
        .collect()
}

/// Operations deleting every existing slide of a deck.
#[must_use]
pub fn clear_requests(slides: &[SlideInfo]) -> Vec<Request> {
    slides
        .iter()
        .map(|slide| Request::delete(slide.object_id.clone()))
        .collect()
}

/// Speaker-notes insertions, pairing fetched slides with layout slides by index.
///
/// Slides without notes, or whose notes shape is unknown, are skipped.
#[must_use]
pub fn notes_requests(config: &SlideConfig, deck: &PresentationInfo) -> Vec<Request> {
    deck.slides
        .iter()
        .zip(&config.slides)
        .filter_map(|(fetched, slide)| {
            let notes = slide.notes_text()?;
            let notes_id = fetched.notes_object_id.as_deref()?;
            Some(Request::insert_text_at_start(notes_id, notes))
        })
        .collect()
}

fn background_request(slide_id: &str, color: RgbColor) -> Request {
    Request::UpdatePageProperties(UpdatePageProperties {
        object_id: slide_id.to_string(),
        page_properties: PageProperties {
            page_background_fill: PageBackgroundFill {
                solid_fill: SolidFill {
                    color: OpaqueColor { rgb_color: color },
                },
            },
        },
        fields: "pageBackgroundFill".to_string(),
    })
}

fn text_box_requests(
    slide_id: &str,
    element_id: &str,
    element: &SlideElement,
    theme: Option<&HashMap<String, RgbColor>>,
) -> [Request; 4] {
    let color = resolve(&element.color, theme);

    [
        Request::CreateShape(CreateShape {
            object_id: element_id.to_string(),
            shape_type: ShapeType::TextBox,
            element_properties: ElementProperties {
                page_object_id: slide_id.to_string(),
                size: Size {
                    width: Dimension::emu(pt_to_emu(element.w)),
                    height: Dimension::emu(pt_to_emu(element.h)),
                },
                transform: AffineTransform {
                    scale_x: 1.0,
                    scale_y: 1.0,
                    translate_x: pt_to_emu(element.x),
                    translate_y: pt_to_emu(element.y),
                    unit: Unit::Emu,
                },
            },
        }),
        Request::InsertText(InsertText {
            object_id: element_id.to_string(),
            text: element.text.clone(),
            insertion_index: None,
        }),
        Request::UpdateTextStyle(UpdateTextStyle {
            object_id: element_id.to_string(),
            style: TextStyle {
                font_family: DEFAULT_FONT.to_string(),
                font_size: Dimension::pt(element.size),
                foreground_color: OptionalColor {
                    opaque_color: OpaqueColor { rgb_color: color },
                },
                bold: element.bold,
            },
            fields: TEXT_STYLE_FIELDS.to_string(),
        }),
        Request::UpdateParagraphStyle(UpdateParagraphStyle {
            object_id: element_id.to_string(),
            style: ParagraphStyle {
                line_spacing: LINE_SPACING,
                alignment: Alignment::Start,
            },
            fields: PARAGRAPH_STYLE_FIELDS.to_string(),
        }),
    ]
}
