//! Presentation gateway trait and implementations.
//!
//! The [`Gateway`] trait is the only surface the generators need from a
//! presentation service: create a deck, fetch a deck, and apply a batch of
//! edits. [`google::GoogleSlidesGateway`] talks to the Google Slides REST API.
//!
//! # Testing
//!
//! Use [`MockGateway`] to generate decks without network access. It keeps
//! decks in memory, applies slide creation and deletion, and records every
//! call for later inspection:
//!
//! ```
//! use slidekit::gateway::{Gateway, MockGateway};
//!
//! let mock = MockGateway::new();
//! let created = mock.create_presentation("Demo").unwrap();
//! assert!(created.initial_slide_id.is_some());
//! assert_eq!(mock.calls().len(), 1);
//! ```

pub mod google;

use crate::error::{Error, Result};
use crate::request::{PredefinedLayout, Request};
use crate::types::{CreatedPresentation, Placeholder, PresentationInfo, SlideInfo};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Capability surface of a presentation service.
///
/// Calls are issued strictly one after another; later calls may reference
/// object ids created by earlier ones.
pub trait Gateway: Send + Sync {
    /// Create an empty deck. The service adds one default slide.
    fn create_presentation(&self, title: &str) -> Result<CreatedPresentation>;

    /// Fetch a deck's slides.
    fn get_presentation(&self, presentation_id: &str) -> Result<PresentationInfo>;

    /// Apply operations atomically, in order.
    fn batch_update(&self, presentation_id: &str, requests: &[Request]) -> Result<()>;
}

/// A call received by a [`MockGateway`].
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    /// `create_presentation`.
    Create {
        /// Requested title.
        title: String,
    },
    /// `get_presentation`.
    Get {
        /// Deck id.
        presentation_id: String,
    },
    /// `batch_update`.
    BatchUpdate {
        /// Deck id.
        presentation_id: String,
        /// Operations received.
        requests: Vec<Request>,
    },
}

#[derive(Debug, Default)]
struct MockState {
    decks: HashMap<String, Vec<SlideInfo>>,
    calls: Vec<GatewayCall>,
    batch_count: usize,
    fail_batch: Option<usize>,
    next_id: usize,
}

/// In-memory gateway for testing.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    /// Create an empty mock gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing deck with the given slide ids.
    pub fn add_presentation(&self, presentation_id: impl Into<String>, slide_ids: &[&str]) {
        let slides = slide_ids.iter().map(|id| mock_slide(id, None)).collect();
        self.lock().decks.insert(presentation_id.into(), slides);
    }

    /// Make the `n`-th `batch_update` call (zero-based) fail.
    pub fn fail_batch_at(&self, n: usize) {
        self.lock().fail_batch = Some(n);
    }

    /// All calls received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    /// Sizes of the batches received so far, in order.
    #[must_use]
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                GatewayCall::BatchUpdate { requests, .. } => Some(requests.len()),
                _ => None,
            })
            .collect()
    }

    /// Current slide ids of a deck.
    #[must_use]
    pub fn slide_ids(&self, presentation_id: &str) -> Vec<String> {
        self.lock()
            .decks
            .get(presentation_id)
            .map(|slides| slides.iter().map(|s| s.object_id.clone()).collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A slide as the service would report it: a notes shape, plus title and
/// body placeholders for `TITLE_AND_BODY` slides.
fn mock_slide(object_id: &str, layout: Option<PredefinedLayout>) -> SlideInfo {
    let placeholders = match layout {
        Some(PredefinedLayout::TitleAndBody) => vec![
            Placeholder {
                object_id: format!("{}_title", object_id),
                kind: "TITLE".to_string(),
            },
            Placeholder {
                object_id: format!("{}_body", object_id),
                kind: "BODY".to_string(),
            },
        ],
        _ => Vec::new(),
    };

    SlideInfo {
        object_id: object_id.to_string(),
        notes_object_id: Some(format!("{}_notes", object_id)),
        placeholders,
    }
}

impl Gateway for MockGateway {
    fn create_presentation(&self, title: &str) -> Result<CreatedPresentation> {
        let mut state = self.lock();
        state.calls.push(GatewayCall::Create {
            title: title.to_string(),
        });

        state.next_id += 1;
        let presentation_id = format!("mock-deck-{}", state.next_id);
        let initial = format!("{}_p", presentation_id);
        state
            .decks
            .insert(presentation_id.clone(), vec![mock_slide(&initial, None)]);

        Ok(CreatedPresentation {
            presentation_id,
            initial_slide_id: Some(initial),
        })
    }

    fn get_presentation(&self, presentation_id: &str) -> Result<PresentationInfo> {
        let mut state = self.lock();
        state.calls.push(GatewayCall::Get {
            presentation_id: presentation_id.to_string(),
        });

        let slides = state
            .decks
            .get(presentation_id)
            .cloned()
            .ok_or_else(|| Error::http(format!("HTTP 404 for {}", presentation_id), Some(404)))?;

        Ok(PresentationInfo {
            presentation_id: presentation_id.to_string(),
            slides,
        })
    }

    fn batch_update(&self, presentation_id: &str, requests: &[Request]) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(GatewayCall::BatchUpdate {
            presentation_id: presentation_id.to_string(),
            requests: requests.to_vec(),
        });

        let index = state.batch_count;
        state.batch_count += 1;
        if state.fail_batch == Some(index) {
            return Err(Error::Api(format!("batch {} rejected", index)));
        }

        let Some(slides) = state.decks.get_mut(presentation_id) else {
            return Err(Error::http(
                format!("HTTP 404 for {}", presentation_id),
                Some(404),
            ));
        };

        // Validate against a copy so a bad batch leaves the deck untouched.
        let mut updated = slides.clone();
        for request in requests {
            match request {
                Request::CreateSlide(create) => {
                    let at = create.insertion_index.unwrap_or(updated.len()).min(updated.len());
                    let layout = create.slide_layout_reference.predefined_layout;
                    updated.insert(at, mock_slide(&create.object_id, Some(layout)));
                }
                Request::DeleteObject(delete) => {
                    let before = updated.len();
                    updated.retain(|s| s.object_id != delete.object_id);
                    if updated.len() == before {
                        return Err(Error::Api(format!(
                            "object {} not found",
                            delete.object_id
                        )));
                    }
                }
                _ => {}
            }
        }
        *slides = updated;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_create_presentation() {
        let mock = MockGateway::new();
        let created = mock.create_presentation("Deck").unwrap();
        assert_eq!(created.presentation_id, "mock-deck-1");
        assert_eq!(created.initial_slide_id.as_deref(), Some("mock-deck-1_p"));
        assert_eq!(mock.slide_ids("mock-deck-1"), vec!["mock-deck-1_p"]);
    }

    #[test]
    fn test_mock_get_unknown_deck() {
        let mock = MockGateway::new();
        let err = mock.get_presentation("missing").unwrap_err();
        assert!(matches!(err, Error::Http { status: Some(404), .. }));
    }

    #[test]
    fn test_mock_applies_create_and_delete() {
        let mock = MockGateway::new();
        mock.add_presentation("deck", &["a", "b"]);

        mock.batch_update(
            "deck",
            &[
                Request::delete("a"),
                crate::review::setup_requests(None, 1).remove(0),
            ],
        )
        .unwrap();

        assert_eq!(mock.slide_ids("deck"), vec!["b", "title_1"]);
        let deck = mock.get_presentation("deck").unwrap();
        assert_eq!(deck.slides[1].placeholder("TITLE"), Some("title_1_title"));
        assert_eq!(deck.slides[1].notes_object_id.as_deref(), Some("title_1_notes"));
    }

    #[test]
    fn test_mock_rejects_unknown_delete_atomically() {
        let mock = MockGateway::new();
        mock.add_presentation("deck", &["a"]);

        let result = mock.batch_update("deck", &[Request::delete("a"), Request::delete("zzz")]);
        assert!(result.is_err());
        assert_eq!(mock.slide_ids("deck"), vec!["a"]);
    }

    #[test]
    fn test_mock_fail_batch_at() {
        let mock = MockGateway::new();
        mock.add_presentation("deck", &[]);
        mock.fail_batch_at(1);

        assert!(mock.batch_update("deck", &[]).is_ok());
        assert!(mock.batch_update("deck", &[]).is_err());
        assert!(mock.batch_update("deck", &[]).is_ok());
        assert_eq!(mock.batch_sizes(), vec![0, 0, 0]);
    }
}
