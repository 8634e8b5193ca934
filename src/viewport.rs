//! Tracks the host viewport and publishes a classified snapshot to
//! subscribers.
//!
//! The [`ViewportTracker`] is the single owner of the current
//! [`ViewportSnapshot`]. Layout adapters never observe the host directly;
//! they are handed a snapshot and re-resolve their policies from it, so
//! every consumer of one render pass sees the same `{width, height, tier}`
//! tuple.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use peniko::kurbo::Size;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::responsive::{Breakpoints, Tier};

/// The current viewport dimensions and their derived tier.
///
/// `tier` is recomputed from `width` whenever a snapshot is built; it is
/// never stored independently of the width it was derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSnapshot {
    pub width: f64,
    pub height: f64,
    pub tier: Tier,
}

impl ViewportSnapshot {
    /// Build a snapshot for known dimensions, classified against the
    /// default breakpoints. Negative dimensions clamp to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self::from_size(Size::new(width, height), &Breakpoints::default())
    }

    pub(crate) fn from_size(size: Size, breakpoints: &Breakpoints) -> Self {
        let width = size.width.max(0.0);
        let height = size.height.max(0.0);
        Self {
            width,
            height,
            tier: breakpoints.tier_for_width(width),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_mobile(&self) -> bool {
        self.tier == Tier::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.tier == Tier::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.tier == Tier::Desktop
    }
}

new_key_type! {
    struct SubscriberKey;
}

type Callback = Rc<dyn Fn(&ViewportSnapshot)>;

struct TrackerState {
    snapshot: ViewportSnapshot,
    breakpoints: Breakpoints,
    subscribers: SlotMap<SubscriberKey, Callback>,
}

/// Owner of the current viewport snapshot.
///
/// The host environment feeds resize notifications in through
/// [`set_viewport_size`](ViewportTracker::set_viewport_size); interested
/// parties read the latest snapshot with
/// [`current`](ViewportTracker::current) or register a callback with
/// [`subscribe`](ViewportTracker::subscribe). Cloning the tracker clones a
/// handle to the same state.
#[derive(Clone)]
pub struct ViewportTracker {
    state: Rc<RefCell<TrackerState>>,
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportTracker {
    /// A tracker with no observable viewport. The snapshot starts at 0x0,
    /// which classifies as mobile. This is the documented fallback for
    /// headless contexts, not an error.
    pub fn new() -> Self {
        Self::with_size(Size::ZERO)
    }

    /// A tracker seeded with the best available dimensions at call time.
    pub fn with_size(size: Size) -> Self {
        let breakpoints = Breakpoints::default();
        let snapshot = ViewportSnapshot::from_size(size, &breakpoints);
        Self {
            state: Rc::new(RefCell::new(TrackerState {
                snapshot,
                breakpoints,
                subscribers: SlotMap::with_key(),
            })),
        }
    }

    /// The latest snapshot. Synchronous and infallible.
    pub fn current(&self) -> ViewportSnapshot {
        self.state.borrow().snapshot
    }

    /// Feed a viewport resize notification into the tracker.
    ///
    /// The whole `{width, height, tier}` tuple is replaced at once, then
    /// subscribers are notified with the new snapshot. Notifications where
    /// the snapshot is unchanged are coalesced away, so bursts of
    /// same-size resize events do not fan out repeatedly.
    pub fn set_viewport_size(&self, size: Size) {
        let changed = {
            let mut state = self.state.borrow_mut();
            let next = ViewportSnapshot::from_size(size, &state.breakpoints);
            if next == state.snapshot {
                None
            } else {
                state.snapshot = next;
                Some(next)
            }
        };
        if let Some(snapshot) = changed {
            // Callbacks run with the state borrow released so they can
            // read `current()` or manage subscriptions re-entrantly.
            let callbacks: SmallVec<[Callback; 4]> =
                self.state.borrow().subscribers.values().cloned().collect();
            for callback in callbacks {
                callback(&snapshot);
            }
        }
    }

    /// Register a callback invoked on every published snapshot change.
    ///
    /// The callback stays registered for the lifetime of the returned
    /// [`Subscription`]; dropping the token deregisters it.
    pub fn subscribe(&self, f: impl Fn(&ViewportSnapshot) + 'static) -> Subscription {
        let key = self
            .state
            .borrow_mut()
            .subscribers
            .insert(Rc::new(f) as Callback);
        Subscription {
            tracker: Rc::downgrade(&self.state),
            key,
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }
}

/// Deregistration token for a tracker subscription.
///
/// Deregisters exactly once, when dropped. Dropping after the tracker
/// itself is gone is a safe no-op.
#[must_use]
pub struct Subscription {
    tracker: Weak<RefCell<TrackerState>>,
    key: SubscriberKey,
}

impl Subscription {
    /// Deregister now instead of at end of scope.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.tracker.upgrade() {
            state.borrow_mut().subscribers.remove(self.key);
        }
    }
}
