//! Outbound strip events and host follow-up requests.

use std::time::Duration;

use crate::types::ItemLoadError;

/// Delay before the first centering correction. Inside overlay/lightbox
/// layouts the container dimensions are not final at first paint;
/// re-issuing the same instant scroll once they settle corrects the
/// position without a visible slide.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Notifications the strip sends up to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum StripEvent {
    /// A thumbnail was clicked. The host decides whether the current index
    /// actually changes; the strip only moves once the new index is echoed
    /// back through `sync_state`.
    ThumbSelected(usize),
    /// A per-item renderer failed to load its media. Relayed unchanged.
    ItemFailed {
        item_index: usize,
        error: ItemLoadError,
    },
}

/// Asynchronous work the host schedules on the controller's behalf. The
/// controller itself never owns a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    /// Call `StripController::settle_elapsed` after the given delay.
    Settle(Duration),
}
