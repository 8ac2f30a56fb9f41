//! External state and configuration models for the thumbnail strip.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Media kind of a gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Image,
    Video,
}

/// A single gallery entry as supplied by the host.
///
/// The controller only reads the item count and kind; `src`/`thumb` are
/// carried for the per-item renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub kind: ItemKind,
    /// Full-size media source.
    pub src: String,
    /// Dedicated thumbnail source; renderers fall back to `src` when absent.
    pub thumb: Option<String>,
}

impl GalleryItem {
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Image,
            src: src.into(),
            thumb: None,
        }
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Video,
            src: src.into(),
            thumb: None,
        }
    }
}

/// Externally-driven gallery state. Read-only to this crate.
///
/// Invariant: `curr_index < items.len()` once `items` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryState {
    pub items: Vec<GalleryItem>,
    pub curr_index: usize,
}

/// Which edge of the gallery viewer the strip is docked to.
///
/// Top/Bottom dock horizontally, Left/Right dock vertically; the docking
/// edge is the only input to the main-axis selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThumbPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// How thumbnails are fitted inside the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThumbView {
    #[default]
    Default,
    /// Always center the whole strip, even when it would scroll.
    Contain,
}

/// Strip configuration snapshot supplied by the host on every relevant
/// update. Only these fields affect the viewport controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripConfig {
    pub position: ThumbPosition,
    pub view: ThumbView,
    /// Enable pointer panning of the strip.
    pub gestures: bool,
    /// When set, external index changes do not force a scroll.
    pub detached: bool,
    /// Disable thumb interaction entirely (clicks and pans).
    pub disabled: bool,
    /// Fixed thumbnail width in logical pixels.
    pub thumb_width: f32,
    /// Fixed thumbnail height in logical pixels.
    pub thumb_height: f32,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            position: ThumbPosition::Bottom,
            view: ThumbView::Default,
            gestures: true,
            detached: false,
            disabled: false,
            thumb_width: 120.0,
            thumb_height: 90.0,
        }
    }
}

/// Failure reported by a per-item renderer. The controller relays these
/// upward unchanged; loading is never its responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("thumbnail media failed to load: {reason}")]
pub struct ItemLoadError {
    pub reason: String,
}

impl ItemLoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
