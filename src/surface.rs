//! Seam between the controller and the concrete scrollable viewport.
//!
//! Measurements flow in through read methods, scroll and presentation
//! writes flow out; the host widget (a scrollable container in whatever UI
//! layer embeds the strip) implements this trait. Reads are synchronous and
//! side-effect-free.

/// The single scroll direction along which thumbnails are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Host sizing for one dimension of the strip container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Track the parent along this dimension.
    Fill,
    /// Fixed size in logical pixels.
    Fixed(f32),
}

/// Scroll-snap behavior applied to the viewport.
///
/// A snap point fighting an animated or gesture-driven scroll causes
/// visible stutter, so `Unset` is active for the duration of either and
/// the mandatory mode is restored afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapMode {
    Unset,
    /// Snap to thumbnail boundaries along the horizontal axis.
    MandatoryX,
    /// Snap to thumbnail boundaries along the vertical axis.
    MandatoryY,
}

/// The viewport element hosting the thumbnail row.
pub trait ThumbSurface {
    /// Current scroll offset along `axis`.
    fn scroll_offset(&self, axis: Axis) -> f32;

    /// Visible viewport extent along `axis`.
    fn client_size(&self, axis: Axis) -> f32;

    /// Total content extent along `axis`.
    fn content_size(&self, axis: Axis) -> f32;

    /// Write a raw scroll position along `axis`. Implementations clamp to
    /// the valid scrollable range.
    fn set_scroll(&mut self, axis: Axis, offset: f32);

    fn set_snap_mode(&mut self, mode: SnapMode);

    /// Toggle the presentation marker shown while the strip is actively
    /// dragged. Purely visual; never scroll-affecting.
    fn set_sliding(&mut self, sliding: bool);

    /// Apply container sizing to the host element.
    fn set_host_size(&mut self, width: Extent, height: Extent);

    /// Apply the leading inset that centers the strip contents.
    fn set_lead_inset(&mut self, inset: f32);
}
