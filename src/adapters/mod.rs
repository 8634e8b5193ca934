//! The tier-driven layout adapters.
//!
//! Each adapter holds a per-tier policy and resolves it against a
//! [`ViewportSnapshot`](crate::viewport::ViewportSnapshot) at render time:
//!
//! - [`AdaptiveContainer`] wraps content in a container sized and padded
//!   per tier.
//! - [`AdaptiveSpacing`] renders a spacer sized per tier, or nothing on
//!   suppressed tiers.
//! - [`AdaptiveVisibility`] renders its content on the configured tiers and
//!   nothing elsewhere.
//!
//! Adapters are stateless: resolving never mutates them or the snapshot,
//! and the same snapshot always resolves to the same output. Hosts that
//! need live updates subscribe to the
//! [`ViewportTracker`](crate::viewport::ViewportTracker) and re-resolve on
//! each published snapshot; no adapter needs rebuilding across tier
//! changes.

mod container;
mod spacing;
mod visibility;

pub use container::{AdaptiveContainer, ContainerPolicy, WidthClass};
pub use spacing::{AdaptiveSpacing, Direction};
pub use visibility::AdaptiveVisibility;

use crate::style::Style;
use crate::unit::Px;

/// One step of the spacing scale in logical pixels.
pub const SPACING_STEP_PX: f64 = 4.0;

/// Convert spacing-scale steps to pixels.
pub fn spacing_px(steps: u16) -> Px {
    Px(f64::from(steps) * SPACING_STEP_PX)
}

/// Element semantics of a resolved node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Block,
    Inline,
    Spacer,
}

/// A resolved fragment of layout output.
///
/// Adapters that can decline to render return `Option<Node>`; `None` means
/// nothing is emitted at all, never an empty or zero-sized node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub style: Style,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            style: Style::new(),
            children: Vec::new(),
        }
    }

    pub fn block() -> Self {
        Self::new(NodeKind::Block)
    }

    pub fn inline() -> Self {
        Self::new(NodeKind::Inline)
    }

    pub fn style(mut self, style: impl FnOnce(Style) -> Style) -> Self {
        self.style = style(self.style);
        self
    }

    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}
