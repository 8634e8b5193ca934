//! # Reflow
//! Reflow is an adaptive layout engine for Rust. It classifies a host
//! viewport into one of three tiers (mobile, tablet, desktop) and resolves
//! tier-indexed layout policies into concrete styles, so an application can
//! describe its responsive behavior once and re-render it from a single
//! source of truth.
//!
//! ## Example
//! ```rust
//! use reflow::prelude::*;
//!
//! // The tracker owns the snapshot; the host feeds resize events in.
//! let tracker = ViewportTracker::with_size(Size::new(1200.0, 800.0));
//!
//! let container = AdaptiveContainer::new();
//! let note = AdaptiveVisibility::new().hide_on(Tiers::MOBILE);
//!
//! let snapshot = tracker.current();
//! assert!(snapshot.is_desktop());
//! assert_eq!(container.policy_for(snapshot.tier).width.as_str(), "xl");
//! assert!(note.resolve(&snapshot, vec![Node::block()]).is_some());
//!
//! // After a resize, the same adapters resolve to the tablet policies.
//! tracker.set_viewport_size(Size::new(800.0, 600.0));
//! let snapshot = tracker.current();
//! assert_eq!(container.policy_for(snapshot.tier).width.as_str(), "lg");
//! ```
//!
//! ## Viewport tracking
//! The [`ViewportTracker`](viewport::ViewportTracker) is the sole owner of
//! the current [`ViewportSnapshot`](viewport::ViewportSnapshot). The host
//! environment reports resizes with
//! [`set_viewport_size`](viewport::ViewportTracker::set_viewport_size);
//! every consumer then observes the same atomically-replaced
//! `{width, height, tier}` tuple. Consumers that need push updates register
//! a callback with [`subscribe`](viewport::ViewportTracker::subscribe) and
//! hold the returned [`Subscription`](viewport::Subscription) token; the
//! callback is deregistered when the token drops, so repeated mount and
//! unmount cycles cannot leak observers.
//!
//! In a context with no observable viewport the tracker starts at 0x0,
//! which classifies as mobile. That fallback is silent: no operation in
//! this crate fails or raises.
//!
//! ## Tiers
//! Classification is a pure function of width with fixed thresholds:
//! widths below 768 are [`Tier::Mobile`](responsive::Tier), widths from
//! 768 up to but not including 1024 are `Tier::Tablet`, and anything wider
//! is `Tier::Desktop`. The thresholds partition the whole width domain, so
//! exactly one tier applies to any width.
//!
//! ## Adapters
//! The [`adapters`] are stateless consumers of a snapshot. Each holds a
//! per-tier policy table ([`PerTier`](responsive::PerTier)) and resolves it
//! against a snapshot on every call; none of them caches a tier or writes
//! back to the tracker. See the [module docs](adapters) for the three of
//! them.

pub mod adapters;
pub mod responsive;
pub mod style;
pub mod unit;
pub mod viewport;

pub use peniko::kurbo;

pub mod prelude {
    pub use crate::adapters::{
        AdaptiveContainer, AdaptiveSpacing, AdaptiveVisibility, ContainerPolicy, Direction, Node,
        NodeKind, WidthClass,
    };
    pub use crate::kurbo::Size;
    pub use crate::responsive::{PerTier, Tier, Tiers};
    pub use crate::style::Style;
    pub use crate::unit::{Auto, Pct, Px, PxPct, PxPctAuto, UnitExt};
    pub use crate::viewport::{Subscription, ViewportSnapshot, ViewportTracker};
}
