//! Recording fakes for the crate's trait seams, shared by the in-module
//! test suites.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::gesture::{GestureHandle, GestureRecognizer, PanDirection};
use crate::scroll::{ScrollAnimator, ScrollStatus, ScrollTicket, ScrollTo};
use crate::surface::{Axis, Extent, SnapMode, ThumbSurface};

/// A measured viewport with per-axis sizes that clamps scroll writes the
/// way a real scroll container does, and records every write.
#[derive(Debug, Default)]
pub(crate) struct FakeSurface {
    pub scroll: [f32; 2],
    pub client: [f32; 2],
    pub content: [f32; 2],
    pub scroll_writes: Vec<(Axis, f32)>,
    pub snap_log: Vec<SnapMode>,
    pub sliding_log: Vec<bool>,
    pub host_size: Option<(Extent, Extent)>,
    pub lead_inset: Option<f32>,
}

fn idx(axis: Axis) -> usize {
    match axis {
        Axis::Horizontal => 0,
        Axis::Vertical => 1,
    }
}

impl FakeSurface {
    /// A horizontally scrolling viewport with the given main-axis client
    /// and content extents.
    pub fn horizontal(client: f32, content: f32) -> Self {
        Self {
            client: [client, 90.0],
            content: [content, 90.0],
            ..Self::default()
        }
    }

    pub fn snap_now(&self) -> Option<SnapMode> {
        self.snap_log.last().copied()
    }

    pub fn sliding_now(&self) -> Option<bool> {
        self.sliding_log.last().copied()
    }
}

impl ThumbSurface for FakeSurface {
    fn scroll_offset(&self, axis: Axis) -> f32 {
        self.scroll[idx(axis)]
    }

    fn client_size(&self, axis: Axis) -> f32 {
        self.client[idx(axis)]
    }

    fn content_size(&self, axis: Axis) -> f32 {
        self.content[idx(axis)]
    }

    fn set_scroll(&mut self, axis: Axis, offset: f32) {
        let max = (self.content[idx(axis)] - self.client[idx(axis)]).max(0.0);
        self.scroll[idx(axis)] = offset.clamp(0.0, max);
        self.scroll_writes.push((axis, offset));
    }

    fn set_snap_mode(&mut self, mode: SnapMode) {
        self.snap_log.push(mode);
    }

    fn set_sliding(&mut self, sliding: bool) {
        self.sliding_log.push(sliding);
    }

    fn set_host_size(&mut self, width: Extent, height: Extent) {
        self.host_size = Some((width, height));
    }

    fn set_lead_inset(&mut self, inset: f32) {
        self.lead_inset = Some(inset);
    }
}

/// One recorded animator invocation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnimatorCall {
    pub axis: Axis,
    pub target: ScrollTo,
    pub ticket: ScrollTicket,
}

/// Cloneable view into a [`SharedAnimator`]'s recorded calls.
#[derive(Debug, Clone, Default)]
pub(crate) struct AnimatorLog(Rc<RefCell<Vec<AnimatorCall>>>);

impl AnimatorLog {
    pub fn calls(&self) -> Vec<AnimatorCall> {
        self.0.borrow().clone()
    }
}

/// Animator that records every request and leaves it pending, so tests
/// control completion through `scroll_settled`.
#[derive(Debug, Default)]
pub(crate) struct SharedAnimator {
    log: AnimatorLog,
}

impl SharedAnimator {
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn log(&self) -> AnimatorLog {
        self.log.clone()
    }
}

impl ScrollAnimator for SharedAnimator {
    fn scroll_to(
        &mut self,
        _surface: &mut dyn ThumbSurface,
        axis: Axis,
        target: ScrollTo,
        ticket: ScrollTicket,
    ) -> ScrollStatus {
        self.log.0.borrow_mut().push(AnimatorCall {
            axis,
            target,
            ticket,
        });
        ScrollStatus::Pending
    }
}

/// Recognizer factory that counts attachments and live handles.
#[derive(Debug, Default)]
pub(crate) struct CountingRecognizer {
    attaches: Rc<Cell<usize>>,
    live: Rc<Cell<usize>>,
    directions: Rc<RefCell<Vec<PanDirection>>>,
}

impl CountingRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attaches(&self) -> Rc<Cell<usize>> {
        self.attaches.clone()
    }

    pub fn live(&self) -> Rc<Cell<usize>> {
        self.live.clone()
    }

    pub fn directions(&self) -> Rc<RefCell<Vec<PanDirection>>> {
        self.directions.clone()
    }
}

struct CountingHandle {
    live: Rc<Cell<usize>>,
    direction: PanDirection,
}

impl GestureHandle for CountingHandle {
    fn direction(&self) -> PanDirection {
        self.direction
    }
}

impl Drop for CountingHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl GestureRecognizer for CountingRecognizer {
    fn attach(&mut self, direction: PanDirection) -> Box<dyn GestureHandle> {
        self.attaches.set(self.attaches.get() + 1);
        self.live.set(self.live.get() + 1);
        self.directions.borrow_mut().push(direction);
        Box::new(CountingHandle {
            live: self.live.clone(),
            direction,
        })
    }
}
