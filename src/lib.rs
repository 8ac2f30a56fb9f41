//! Viewport controller for scrollable media thumbnail strips.
//!
//! Keeps a strip of selectable thumbnails centered on an externally-driven
//! current item, abstracting over the two layout orientations (horizontal
//! and vertical docking) and the two interaction modes (index-driven
//! programmatic scrolling and direct pointer panning) without letting the
//! modes fight each other.
//!
//! The crate owns geometry and sequencing only. Rendering, the animated
//! scroll primitive, and raw gesture recognition stay on the host side of
//! three small trait seams: [`ThumbSurface`], [`ScrollAnimator`], and
//! [`GestureRecognizer`].

pub mod adapter;
pub mod controller;
pub mod gesture;
pub mod messages;
pub mod scroll;
pub mod surface;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::{orientation_of, StripAdapter};
pub use controller::StripController;
pub use gesture::{GestureBridge, GestureHandle, GestureRecognizer, PanDelta, PanDirection};
pub use messages::{Followup, StripEvent, SETTLE_DELAY};
pub use scroll::{
    InstantAnimator, ScrollAnimator, ScrollBehavior, ScrollStatus, ScrollTicket, ScrollTo,
};
pub use surface::{Axis, Extent, SnapMode, ThumbSurface};
pub use types::{
    GalleryItem, GalleryState, ItemKind, ItemLoadError, StripConfig, ThumbPosition, ThumbView,
};
