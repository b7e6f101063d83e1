//! # slidekit
//!
//! Build presentation decks from declarative slide layouts.
//!
//! This crate provides functionality for:
//! - Loading JSON slide layouts, directly or from `{{variable}}` templates
//! - Resolving theme, palette, and hex colors
//! - Compiling layouts into ordered batches of edit operations
//! - Creating a new deck, or clearing and rebuilding an existing one
//! - Rendering code review results with a fixed five-slide template
//!
//! ## Example
//!
//! ```no_run
//! use slidekit::{Client, NoProgress, loader};
//! use std::path::Path;
//!
//! let config = loader::load_config(Path::new("slides.json")).unwrap();
//! let client = Client::google("ya29.access-token");
//! let result = client.generate_from_config(&config, &mut NoProgress).unwrap();
//! println!("{}", result.presentation_url);
//! ```
//!
//! ## Lifecycle
//!
//! | Layout has `presentationId` | Before building                       |
//! |-----------------------------|---------------------------------------|
//! | no                          | create deck, delete its default slide |
//! | yes                         | fetch deck, delete all of its slides  |
//!
//! Content batches are then applied one at a time, the deck is fetched again
//! to find speaker-notes shapes, and notes go in a final batch. A failing
//! call aborts generation; batches already applied are not rolled back.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod compiler;
pub mod error;
pub mod gateway;
pub mod loader;
pub mod request;
pub mod review;
pub mod template;
pub mod types;

pub use compiler::{BATCH_SIZE, Batch};
pub use error::{Error, ErrorCategory, Result};
pub use gateway::{Gateway, MockGateway};
pub use request::Request;
pub use types::{
    ColorRef, GenerationResult, PresentationInfo, ReviewData, RgbColor, SlideConfig,
    SlideDefinition, SlideElement, SlideTheme,
};

use gateway::google::GoogleSlidesGateway;

/// Progress callback for generation.
///
/// Implement this trait to receive updates as batches are applied. All
/// methods default to doing nothing.
pub trait Progress {
    /// Called once the number of batches to apply is known.
    fn on_start(&mut self, _total_batches: usize) {}

    /// Called after each batch is applied.
    fn on_batch_complete(&mut self, _index: usize, _size: usize) {}

    /// Called after speaker notes are written (`count` may be zero).
    fn on_notes(&mut self, _count: usize) {}
}

/// Progress callback that ignores every update.
pub struct NoProgress;

impl Progress for NoProgress {}

/// High-level client driving a [`Gateway`].
pub struct Client {
    gateway: Box<dyn Gateway>,
    stamp: Option<i64>,
}

impl Client {
    /// Create a client for the Google Slides API.
    #[must_use]
    pub fn google(access_token: impl Into<String>) -> Self {
        Self::with_gateway(Box::new(GoogleSlidesGateway::new(access_token)))
    }

    /// Create a client with a custom gateway (useful for testing).
    #[must_use]
    pub fn with_gateway(gateway: Box<dyn Gateway>) -> Self {
        Self {
            gateway,
            stamp: None,
        }
    }

    /// Use a fixed id stamp instead of the current time.
    #[must_use]
    pub fn with_stamp(mut self, stamp: i64) -> Self {
        self.stamp = Some(stamp);
        self
    }

    // =========================================================================
    // Layout generation
    // =========================================================================

    /// Generate a deck from a slide layout.
    ///
    /// Creates a new deck, or replaces every slide of
    /// `config.presentation_id` when it is set.
    pub fn generate_from_config<P: Progress>(
        &self,
        config: &SlideConfig,
        progress: &mut P,
    ) -> Result<GenerationResult> {
        let presentation_id = match &config.presentation_id {
            Some(id) => {
                self.clear_presentation(id)?;
                id.clone()
            }
            None => self.create_blank_presentation(&config.title)?,
        };

        let batches = compiler::compile(config, self.stamp());
        progress.on_start(batches.len());
        self.apply_batches(&presentation_id, &batches, progress)?;

        let deck = self.gateway.get_presentation(&presentation_id)?;
        let notes = compiler::notes_requests(config, &deck);
        if !notes.is_empty() {
            log::info!("Adding speaker notes to {} slides", notes.len());
            self.gateway.batch_update(&presentation_id, &notes)?;
        }
        progress.on_notes(notes.len());

        Ok(GenerationResult::new(presentation_id))
    }

    /// Delete every slide of an existing deck.
    fn clear_presentation(&self, presentation_id: &str) -> Result<()> {
        log::info!("Replacing content of presentation {}", presentation_id);
        let existing = self.gateway.get_presentation(presentation_id)?;

        if existing.slides.is_empty() {
            log::debug!("Presentation {} has no slides to delete", presentation_id);
            return Ok(());
        }

        log::debug!("Deleting {} existing slides", existing.slides.len());
        let deletes = compiler::clear_requests(&existing.slides);
        self.gateway.batch_update(presentation_id, &deletes)
    }

    /// Create a deck and delete the slide the service adds to it.
    fn create_blank_presentation(&self, title: &str) -> Result<String> {
        log::info!("Creating presentation '{}'", title);
        let created = self.gateway.create_presentation(title)?;

        if let Some(initial) = &created.initial_slide_id {
            self.gateway
                .batch_update(&created.presentation_id, &[Request::delete(initial.clone())])?;
        }

        Ok(created.presentation_id)
    }

    fn apply_batches<P: Progress>(
        &self,
        presentation_id: &str,
        batches: &[Batch],
        progress: &mut P,
    ) -> Result<()> {
        for (index, batch) in batches.iter().enumerate() {
            log::debug!(
                "Applying batch {}/{} ({} requests)",
                index + 1,
                batches.len(),
                batch.len()
            );
            self.gateway.batch_update(presentation_id, batch)?;
            progress.on_batch_complete(index, batch.len());
        }
        Ok(())
    }

    // =========================================================================
    // Review generation
    // =========================================================================

    /// Generate the fixed five-slide deck for a code review.
    ///
    /// Always creates a new deck.
    pub fn generate_from_review<P: Progress>(
        &self,
        data: &ReviewData,
        progress: &mut P,
    ) -> Result<GenerationResult> {
        let title = review::deck_title(data);
        log::info!("Creating presentation '{}'", title);
        let created = self.gateway.create_presentation(&title)?;
        let presentation_id = created.presentation_id;
        let stamp = self.stamp();

        let setup = review::setup_requests(created.initial_slide_id.as_deref(), stamp);
        let deck_setup = vec![setup];
        progress.on_start(2);
        self.apply_batches(&presentation_id, &deck_setup, progress)?;

        let deck = self.gateway.get_presentation(&presentation_id)?;
        let content = review::content_requests(data, &deck, stamp);
        if !content.is_empty() {
            self.gateway.batch_update(&presentation_id, &content)?;
        }
        progress.on_batch_complete(1, content.len());

        Ok(GenerationResult::new(presentation_id))
    }

    fn stamp(&self) -> i64 {
        self.stamp
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis())
    }
}
