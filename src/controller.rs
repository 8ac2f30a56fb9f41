//! The scroll-synchronization state machine.

use std::fmt;

use crate::adapter::StripAdapter;
use crate::gesture::{GestureBridge, GestureRecognizer, PanDelta};
use crate::messages::{Followup, StripEvent, SETTLE_DELAY};
use crate::scroll::{ScrollAnimator, ScrollBehavior, ScrollStatus, ScrollTicket};
use crate::surface::{SnapMode, ThumbSurface};
use crate::types::{GalleryState, ItemLoadError, StripConfig, ThumbView};

/// Single authority over the strip viewport.
///
/// Reconciles three independent triggers (external index changes, config
/// changes, pointer panning) into one consistent scroll position.
/// Only the controller writes to the surface or replaces the adapter; the
/// gesture bridge reads the adapter's pan filter and nothing else.
///
/// The host's UI-binding layer drives it through plain update methods:
/// [`sync_config`](Self::sync_config), [`sync_state`](Self::sync_state),
/// [`view_ready`](Self::view_ready) plus the deferred re-entry points
/// [`scroll_settled`](Self::scroll_settled) and
/// [`settle_elapsed`](Self::settle_elapsed), and the pan protocol.
pub struct StripController {
    adapter: Option<StripAdapter>,
    config: StripConfig,
    animator: Box<dyn ScrollAnimator>,
    bridge: GestureBridge,
    curr_index: usize,
    item_count: usize,
    synced_once: bool,
    /// Scroll offset captured at pan-start; `Some` only during an active
    /// pan.
    pan_origin: Option<f32>,
    next_ticket: u64,
    inflight: Option<ScrollTicket>,
}

impl StripController {
    /// Build a controller around an injected animator and an optional
    /// gesture capability. No factory means gesture activation is a no-op.
    pub fn new(
        animator: Box<dyn ScrollAnimator>,
        recognizers: Option<Box<dyn GestureRecognizer>>,
    ) -> Self {
        Self {
            adapter: None,
            config: StripConfig::default(),
            animator,
            bridge: GestureBridge::new(recognizers),
            curr_index: 0,
            item_count: 0,
            synced_once: false,
            pan_origin: None,
            next_ticket: 0,
            inflight: None,
        }
    }

    /// Current adapter, if any config has been applied yet.
    pub fn adapter(&self) -> Option<&StripAdapter> {
        self.adapter.as_ref()
    }

    /// Last applied config snapshot.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Apply a config update: rebuild the adapter when the docking position
    /// changed (re-applying host sizing immediately) and toggle gesture
    /// recognition when the flag changed.
    pub fn sync_config(&mut self, surface: &mut dyn ThumbSurface, config: StripConfig) {
        let first = self.adapter.is_none();
        let position_changed = first || self.config.position != config.position;
        let gestures_changed = first || self.config.gestures != config.gestures;
        self.config = config;

        if position_changed {
            let adapter = StripAdapter::for_config(&self.config);
            surface.set_host_size(adapter.container_width(), adapter.container_height());
            log::debug!("strip adapter rebuilt ({:?})", adapter.axis());
            self.adapter = Some(adapter);
            // A recognizer attached before the rebuild keeps running; give
            // it the new axis filter.
            if self.bridge.is_attached() && self.config.gestures {
                self.activate_gestures();
            }
        }

        if gestures_changed {
            if self.config.gestures {
                self.activate_gestures();
            } else {
                self.bridge.detach();
            }
        }
    }

    /// Apply a state update. Centers the strip on the current index unless
    /// thumbnails are detached; the very first sync always positions, and
    /// does so instantly to avoid a visible slide on load.
    pub fn sync_state(&mut self, surface: &mut dyn ThumbSurface, state: &GalleryState) {
        self.item_count = state.items.len();
        self.curr_index = state.curr_index;

        let first = !self.synced_once;
        self.synced_once = true;

        if first || !self.config.detached {
            let behavior = if first {
                ScrollBehavior::Instant
            } else {
                ScrollBehavior::Smooth
            };
            self.scroll_to_index(surface, state.curr_index, behavior);
        }
    }

    /// The first layout is not final inside overlay hosts; ask the host to
    /// schedule one deferred correction pass.
    pub fn view_ready(&self) -> Followup {
        Followup::Settle(SETTLE_DELAY)
    }

    /// Deferred correction requested by [`Self::view_ready`]: re-issue the
    /// instant centering once container dimensions have settled. Repeating
    /// the scroll to an unchanged index is a no-op offset change.
    pub fn settle_elapsed(&mut self, surface: &mut dyn ThumbSurface) {
        self.scroll_to_index(surface, self.curr_index, ScrollBehavior::Instant);
    }

    /// Completion of a programmatic scroll, reported by the host once the
    /// animator finishes. Restores the snap mode. Safe for stale tickets:
    /// the restore only ever sets the current adapter's mode, never
    /// toggles, so a completion racing an orientation change is harmless.
    pub fn scroll_settled(&mut self, surface: &mut dyn ThumbSurface, ticket: ScrollTicket) {
        if self.inflight == Some(ticket) {
            self.inflight = None;
        }
        self.restore_snap(surface);
    }

    /// Re-apply the centralization inset. Call after every host layout
    /// pass: container size changes independently of the item list.
    pub fn layout_pass(&mut self, surface: &mut dyn ThumbSurface) {
        if let Some(adapter) = &self.adapter {
            surface.set_lead_inset(adapter.lead_inset(surface, self.item_count));
        }
    }

    /// Whether the renderer should mark the strip as centralised: either
    /// the config demands containment or the content happens to fit.
    pub fn centralised(&self, surface: &dyn ThumbSurface) -> bool {
        match &self.adapter {
            Some(adapter) => {
                self.config.view == ThumbView::Contain
                    || adapter.is_content_less_than_container(surface)
            }
            None => false,
        }
    }

    /// Begin a pan gesture: capture the origin offset, lift snapping, mark
    /// the strip as sliding. Ignored while thumb interaction is disabled.
    pub fn pan_start(&mut self, surface: &mut dyn ThumbSurface) {
        if self.config.disabled {
            return;
        }
        let Some(adapter) = &self.adapter else {
            return;
        };
        self.pan_origin = Some(adapter.scroll_offset(surface));
        surface.set_snap_mode(SnapMode::Unset);
        surface.set_sliding(true);
    }

    /// Live pan update: write the translated offset directly, bypassing
    /// animation.
    pub fn pan_move(&mut self, surface: &mut dyn ThumbSurface, delta: PanDelta) {
        let (Some(adapter), Some(origin)) = (self.adapter.as_ref(), self.pan_origin) else {
            return;
        };
        surface.set_scroll(adapter.axis(), adapter.pan_offset(origin, delta));
    }

    /// End a pan gesture: restore snapping and clear the sliding marker.
    /// A no-op when a programmatic scroll already took over.
    pub fn pan_end(&mut self, surface: &mut dyn ThumbSurface) {
        if self.pan_origin.take().is_none() {
            return;
        }
        self.restore_snap(surface);
        surface.set_sliding(false);
    }

    /// Relay a thumbnail click as a selection request, suppressed while
    /// interaction is disabled. The viewport itself only moves once the
    /// host echoes the index back through [`Self::sync_state`].
    pub fn thumb_clicked(&self, index: usize) -> Option<StripEvent> {
        if self.config.disabled {
            None
        } else {
            Some(StripEvent::ThumbSelected(index))
        }
    }

    /// Relay a per-item load failure upward unchanged.
    pub fn item_failed(&self, item_index: usize, error: ItemLoadError) -> StripEvent {
        StripEvent::ItemFailed { item_index, error }
    }

    fn scroll_to_index(&mut self, surface: &mut dyn ThumbSurface, index: usize, behavior: ScrollBehavior) {
        if self.item_count == 0 || index >= self.item_count {
            log::debug!(
                "strip scroll skipped: index {index} outside 0..{}",
                self.item_count
            );
            return;
        }
        let adapter = self.ensure_adapter(surface);

        // Programmatic entry supersedes an active pan; a pan-end arriving
        // afterwards becomes a no-op.
        if self.pan_origin.take().is_some() {
            surface.set_sliding(false);
        }

        // A snap point fighting the animated move causes visible stutter.
        surface.set_snap_mode(SnapMode::Unset);

        let target = adapter.centralised_scroll_to(index, behavior);
        let ticket = self.issue_ticket();
        self.inflight = Some(ticket);
        log::debug!(
            "strip scrolling to index {index} (offset={:.1}, {behavior:?})",
            target.offset
        );
        match self
            .animator
            .scroll_to(surface, adapter.axis(), target, ticket)
        {
            ScrollStatus::Settled => self.scroll_settled(surface, ticket),
            ScrollStatus::Pending => {}
        }
    }

    fn restore_snap(&self, surface: &mut dyn ThumbSurface) {
        if let Some(adapter) = &self.adapter {
            surface.set_snap_mode(adapter.snap_mode());
        }
    }

    fn activate_gestures(&mut self) {
        if self.config.disabled {
            return;
        }
        let Some(adapter) = &self.adapter else {
            return;
        };
        self.bridge.attach(adapter.pan_direction());
    }

    /// Hosts normally deliver config before state; if state arrives first,
    /// fall back to an adapter built from the stored (default) config
    /// rather than dropping the first centering scroll.
    fn ensure_adapter(&mut self, surface: &mut dyn ThumbSurface) -> StripAdapter {
        match self.adapter {
            Some(adapter) => adapter,
            None => {
                let adapter = StripAdapter::for_config(&self.config);
                surface.set_host_size(adapter.container_width(), adapter.container_height());
                log::debug!("strip adapter built before any config ({:?})", adapter.axis());
                self.adapter = Some(adapter);
                adapter
            }
        }
    }

    fn issue_ticket(&mut self) -> ScrollTicket {
        self.next_ticket += 1;
        ScrollTicket(self.next_ticket)
    }
}

impl fmt::Debug for StripController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripController")
            .field("adapter", &self.adapter)
            .field("config", &self.config)
            .field("curr_index", &self.curr_index)
            .field("item_count", &self.item_count)
            .field("pan_origin", &self.pan_origin)
            .field("inflight", &self.inflight)
            .finish_non_exhaustive()
    }
}
