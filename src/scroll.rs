//! Seam for the animated-scroll primitive.
//!
//! The controller computes targets and sequences snap-mode changes around
//! them; how the viewport actually tweens toward a target is the host's
//! concern. [`InstantAnimator`] covers hosts without a tween primitive.

use crate::surface::{Axis, ThumbSurface};

/// How a programmatic scroll should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump to the target without animation.
    Instant,
    /// Animate toward the target.
    Smooth,
}

/// A scroll request: target offset along the main axis plus behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    pub offset: f32,
    pub behavior: ScrollBehavior,
}

/// Identifies one programmatic scroll so late completions can be told
/// apart from current ones. Opaque to the host; pass it back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollTicket(pub(crate) u64);

/// Whether a scroll request finished within the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStatus {
    /// The move completed synchronously.
    Settled,
    /// The move is in flight; the host must report completion through
    /// `StripController::scroll_settled` with the issued ticket.
    Pending,
}

/// The animated-scroll primitive consumed by the controller.
///
/// Starting a new scroll while one is in flight supersedes the old target;
/// there is no cancel primitive.
pub trait ScrollAnimator {
    fn scroll_to(
        &mut self,
        surface: &mut dyn ThumbSurface,
        axis: Axis,
        target: ScrollTo,
        ticket: ScrollTicket,
    ) -> ScrollStatus;
}

/// Animator that jumps straight to the target, ignoring `Smooth`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantAnimator;

impl ScrollAnimator for InstantAnimator {
    fn scroll_to(
        &mut self,
        surface: &mut dyn ThumbSurface,
        axis: Axis,
        target: ScrollTo,
        _ticket: ScrollTicket,
    ) -> ScrollStatus {
        log::trace!("instant scroll to {:.1} on {axis:?}", target.offset);
        surface.set_scroll(axis, target.offset);
        ScrollStatus::Settled
    }
}
