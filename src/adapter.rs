//! Orientation-aware geometry over exactly one scroll axis.

use std::ops::Range;

use crate::gesture::{PanDelta, PanDirection};
use crate::scroll::{ScrollBehavior, ScrollTo};
use crate::surface::{Axis, Extent, SnapMode, ThumbSurface};
use crate::types::{StripConfig, ThumbPosition};

/// Main-axis classification for a docking position. Pure.
pub fn orientation_of(position: ThumbPosition) -> Axis {
    match position {
        ThumbPosition::Top | ThumbPosition::Bottom => Axis::Horizontal,
        ThumbPosition::Left | ThumbPosition::Right => Axis::Vertical,
    }
}

/// Geometry adapter binding the strip to one main axis.
///
/// The two orientation variants share every operation and differ only in
/// which measurements map to the main axis; the `Axis` tag is the variant.
/// An adapter is a one-shot pure computation from a config snapshot: it is
/// replaced, never mutated, when the docking position changes, and
/// replacement is the only way the main axis changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripAdapter {
    axis: Axis,
    thumb_width: f32,
    thumb_height: f32,
}

impl StripAdapter {
    /// Select the variant for a config snapshot. No measurements are taken
    /// until an operation receives a surface.
    pub fn for_config(config: &StripConfig) -> Self {
        Self {
            axis: orientation_of(config.position),
            thumb_width: config.thumb_width,
            thumb_height: config.thumb_height,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Fixed thumbnail extent along the main axis.
    pub fn thumb_size(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.thumb_width,
            Axis::Vertical => self.thumb_height,
        }
    }

    /// Host container width: intrinsic along the main axis, fixed to the
    /// thumb extent across it.
    pub fn container_width(&self) -> Extent {
        match self.axis {
            Axis::Horizontal => Extent::Fill,
            Axis::Vertical => Extent::Fixed(self.thumb_width),
        }
    }

    /// Host container height; see [`Self::container_width`].
    pub fn container_height(&self) -> Extent {
        match self.axis {
            Axis::Horizontal => Extent::Fixed(self.thumb_height),
            Axis::Vertical => Extent::Fill,
        }
    }

    /// Snap mode to restore after a non-snapped interaction.
    pub fn snap_mode(&self) -> SnapMode {
        match self.axis {
            Axis::Horizontal => SnapMode::MandatoryX,
            Axis::Vertical => SnapMode::MandatoryY,
        }
    }

    /// Axis filter for the gesture recognizer.
    pub fn pan_direction(&self) -> PanDirection {
        match self.axis {
            Axis::Horizontal => PanDirection::Horizontal,
            Axis::Vertical => PanDirection::Vertical,
        }
    }

    /// Current scroll offset along the main axis.
    pub fn scroll_offset(&self, surface: &dyn ThumbSurface) -> f32 {
        surface.scroll_offset(self.axis)
    }

    /// Visible viewport extent along the main axis.
    pub fn client_size(&self, surface: &dyn ThumbSurface) -> f32 {
        surface.client_size(self.axis)
    }

    /// Total content extent along the main axis.
    pub fn content_size(&self, surface: &dyn ThumbSurface) -> f32 {
        surface.content_size(self.axis)
    }

    /// Whether every thumbnail fits without scrolling. Measured on each
    /// call; container size changes independently of the item list.
    pub fn is_content_less_than_container(&self, surface: &dyn ThumbSurface) -> bool {
        self.content_size(surface) <= self.client_size(surface)
    }

    /// Target offset that places thumbnail `index`'s center under the
    /// viewport midpoint, given the lead inset from [`Self::lead_inset`].
    pub fn centralised_scroll_to(&self, index: usize, behavior: ScrollBehavior) -> ScrollTo {
        ScrollTo {
            offset: index as f32 * self.thumb_size(),
            behavior,
        }
    }

    /// Raw offset for an active pan: gesture deltas are inverted relative
    /// to content movement. Clamping is the surface's concern.
    pub fn pan_offset(&self, origin: f32, delta: PanDelta) -> f32 {
        origin - delta.along(self.axis)
    }

    /// Leading inset that centers the strip.
    ///
    /// When the whole strip fits, the block of thumbnails is centered;
    /// otherwise the inset is half a viewport minus half a thumb, so the
    /// thumbnail scrolled to [`Self::centralised_scroll_to`] sits under the
    /// viewport midpoint.
    pub fn lead_inset(&self, surface: &dyn ThumbSurface, item_count: usize) -> f32 {
        let client = self.client_size(surface);
        let thumb = self.thumb_size();
        if self.is_content_less_than_container(surface) {
            (client - thumb * item_count as f32) / 2.0
        } else {
            (client / 2.0) - (thumb / 2.0)
        }
    }

    /// Item indices whose extent intersects the viewport, widened by
    /// `overscan` on both sides. For hosts that window their item row.
    pub fn visible_range(
        &self,
        surface: &dyn ThumbSurface,
        item_count: usize,
        overscan: usize,
    ) -> Range<usize> {
        if item_count == 0 {
            return 0..0;
        }
        let thumb = self.thumb_size().max(1.0);
        let offset = self.scroll_offset(surface);
        let first = (offset / thumb).floor() as usize;
        let last = ((offset + self.client_size(surface) - 1e-6) / thumb).floor() as usize;
        let start = first.saturating_sub(overscan).min(item_count);
        let end = last.saturating_add(1 + overscan).min(item_count);
        log::trace!("strip visible range {start}..{end} (offset={offset:.1})");
        start..end
    }
}
