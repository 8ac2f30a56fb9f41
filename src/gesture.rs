//! Pointer-gesture bridge: one recognizer, axis-filtered, leak-free
//! toggles.
//!
//! Raw gesture recognition stays on the host side; the bridge only owns
//! the attachment lifecycle. Pan events translated by the recognizer are
//! delivered to the controller's `pan_start`/`pan_move`/`pan_end`.

use std::fmt;

use crate::surface::Axis;

/// Axis filter handed to the gesture recognizer, so a vertical strip never
/// reacts to horizontal drags and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Horizontal,
    Vertical,
}

/// Pan displacement since gesture start, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanDelta {
    pub x: f32,
    pub y: f32,
}

impl PanDelta {
    /// Component of the delta along the strip's main axis.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// A live recognizer attachment. Dropping the handle releases every
/// listener the recognizer installed.
pub trait GestureHandle {
    /// The axis filter this recognizer was configured with.
    fn direction(&self) -> PanDirection;
}

/// Factory capability for platform gesture recognition.
///
/// Hosts without a gesture library pass no factory at all; gesture
/// activation then degrades to a no-op rather than an error.
pub trait GestureRecognizer {
    /// Attach a pan recognizer restricted to `direction`.
    fn attach(&mut self, direction: PanDirection) -> Box<dyn GestureHandle>;
}

/// Owns at most one recognizer attachment on behalf of the controller.
pub struct GestureBridge {
    factory: Option<Box<dyn GestureRecognizer>>,
    handle: Option<Box<dyn GestureHandle>>,
}

impl GestureBridge {
    pub fn new(factory: Option<Box<dyn GestureRecognizer>>) -> Self {
        Self {
            factory,
            handle: None,
        }
    }

    /// Attach a recognizer filtered to `direction`, replacing any previous
    /// attachment. Without a factory the bridge stays detached.
    pub fn attach(&mut self, direction: PanDirection) {
        // Release the previous attachment before creating the next one.
        self.handle = None;
        let Some(factory) = self.factory.as_mut() else {
            log::debug!("gesture activation without a recognizer factory; ignoring");
            return;
        };
        self.handle = Some(factory.attach(direction));
        log::debug!("gesture recognizer attached ({direction:?})");
    }

    /// Release the current attachment, if any. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if self.handle.take().is_some() {
            log::debug!("gesture recognizer detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Direction filter of the live attachment.
    pub fn direction(&self) -> Option<PanDirection> {
        self.handle.as_ref().map(|h| h.direction())
    }
}

impl fmt::Debug for GestureBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureBridge")
            .field("has_factory", &self.factory.is_some())
            .field("direction", &self.direction())
            .finish()
    }
}
