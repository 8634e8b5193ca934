use crate::responsive::{PerTier, Tier, Tiers};
use crate::style::Style;
use crate::viewport::ViewportSnapshot;

use super::{Node, NodeKind, spacing_px};

/// Axis a spacer extends along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Renders an empty spacer sized per tier, or nothing on suppressed tiers.
///
/// Suppression is checked before sizing: a hidden tier yields no node at
/// all rather than a zero-sized one. Both reads come from the one snapshot
/// passed to [`resolve`](AdaptiveSpacing::resolve), so the suppression
/// decision and the size can never come from different tiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveSpacing {
    sizes: PerTier<u16>,
    direction: Direction,
    hidden: Tiers,
}

impl Default for AdaptiveSpacing {
    fn default() -> Self {
        Self {
            sizes: PerTier {
                mobile: 4,
                tablet: 6,
                desktop: 8,
            },
            direction: Direction::Vertical,
            hidden: Tiers::NONE,
        }
    }
}

impl AdaptiveSpacing {
    pub fn new() -> Self {
        Self::default()
    }

    /// The spacer size for one tier, in spacing-scale steps.
    pub fn size(mut self, tier: Tier, steps: u16) -> Self {
        *self.sizes.get_mut(tier) = steps;
        self
    }

    /// Spacer sizes for all three tiers, narrowest first.
    pub fn sizes(mut self, mobile: u16, tablet: u16, desktop: u16) -> Self {
        self.sizes = PerTier {
            mobile,
            tablet,
            desktop,
        };
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Suppress the spacer entirely on the given tiers.
    pub fn hide_on(mut self, tiers: impl Into<Tiers>) -> Self {
        self.hidden = self.hidden | tiers.into();
        self
    }

    /// Render the spacer for the snapshot's tier, or `None` when that tier
    /// is suppressed.
    pub fn resolve(&self, snapshot: &ViewportSnapshot) -> Option<Node> {
        if self.hidden.contains(snapshot.tier) {
            return None;
        }
        let size = spacing_px(*self.sizes.get(snapshot.tier));
        let style = match self.direction {
            Direction::Vertical => Style::new().height(size),
            Direction::Horizontal => Style::new().width(size),
        };
        Some(Node {
            kind: NodeKind::Spacer,
            style,
            children: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AdaptiveSpacing, Direction};
    use crate::responsive::{Tier, Tiers};
    use crate::unit::PxPctAuto;
    use crate::viewport::ViewportSnapshot;

    #[test]
    fn suppression_precedes_sizing() {
        let spacing = AdaptiveSpacing::new().size(Tier::Mobile, 12).hide_on(Tiers::MOBILE);
        assert_eq!(spacing.resolve(&ViewportSnapshot::new(500.0, 800.0)), None);
    }

    #[test]
    fn sized_per_tier_on_the_configured_axis() {
        let spacing = AdaptiveSpacing::new().sizes(2, 4, 8);

        let tablet = spacing.resolve(&ViewportSnapshot::new(900.0, 800.0)).unwrap();
        assert_eq!(tablet.style.height, PxPctAuto::Px(16.0));
        assert_eq!(tablet.style.width, PxPctAuto::Auto);
        assert!(tablet.children.is_empty());

        let horizontal = AdaptiveSpacing::new()
            .direction(Direction::Horizontal)
            .resolve(&ViewportSnapshot::new(500.0, 800.0))
            .unwrap();
        assert_eq!(horizontal.style.width, PxPctAuto::Px(16.0));
        assert_eq!(horizontal.style.height, PxPctAuto::Auto);
    }

    #[test]
    fn unsuppressed_tiers_still_render() {
        let spacing = AdaptiveSpacing::new().hide_on(Tiers::MOBILE | Tiers::TABLET);
        assert!(spacing.resolve(&ViewportSnapshot::new(500.0, 800.0)).is_none());
        assert!(spacing.resolve(&ViewportSnapshot::new(900.0, 800.0)).is_none());
        assert!(spacing.resolve(&ViewportSnapshot::new(1400.0, 800.0)).is_some());
    }

    #[test]
    fn hide_on_accepts_single_tier() {
        let spacing = AdaptiveSpacing::new().hide_on(Tier::Desktop);
        assert!(spacing.resolve(&ViewportSnapshot::new(1400.0, 800.0)).is_none());
        assert!(spacing.resolve(&ViewportSnapshot::new(500.0, 800.0)).is_some());
    }
}
