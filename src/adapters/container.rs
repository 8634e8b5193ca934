use crate::responsive::{PerTier, Tier};
use crate::style::Style;
use crate::unit::Px;
use crate::viewport::ViewportSnapshot;

use super::{Node, NodeKind, spacing_px};

/// Named container widths.
///
/// A classed width fills the parent up to a fixed content cap. `Full`
/// fills the parent with no cap; `None` applies no width constraint at
/// all, which is also what an unset or unrecognized width degrades to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidthClass {
    None,
    Full,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl WidthClass {
    /// The content cap for classed widths.
    pub fn max_width(self) -> Option<Px> {
        match self {
            WidthClass::None | WidthClass::Full => None,
            WidthClass::Sm => Some(Px(640.0)),
            WidthClass::Md => Some(Px(768.0)),
            WidthClass::Lg => Some(Px(1024.0)),
            WidthClass::Xl => Some(Px(1280.0)),
            WidthClass::Xxl => Some(Px(1536.0)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WidthClass::None => "none",
            WidthClass::Full => "full",
            WidthClass::Sm => "sm",
            WidthClass::Md => "md",
            WidthClass::Lg => "lg",
            WidthClass::Xl => "xl",
            WidthClass::Xxl => "2xl",
        }
    }
}

/// The container layout for one tier.
///
/// Padding and margins are in spacing-scale steps. `max_width` is an
/// explicit pixel cap that wins over the width class's own cap; unset, it
/// falls through to the class cap or to no constraint.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerPolicy {
    pub width: WidthClass,
    pub padding_x: u16,
    pub padding_y: u16,
    pub margin_x: u16,
    pub margin_y: u16,
    pub max_width: Option<Px>,
}

impl ContainerPolicy {
    pub fn new(width: WidthClass, padding: u16) -> Self {
        Self {
            width,
            padding_x: padding,
            padding_y: padding,
            margin_x: 0,
            margin_y: 0,
            max_width: None,
        }
    }

    pub fn width(mut self, width: WidthClass) -> Self {
        self.width = width;
        self
    }

    pub fn padding_x(mut self, steps: u16) -> Self {
        self.padding_x = steps;
        self
    }

    pub fn padding_y(mut self, steps: u16) -> Self {
        self.padding_y = steps;
        self
    }

    pub fn margin_x(mut self, steps: u16) -> Self {
        self.margin_x = steps;
        self
    }

    pub fn margin_y(mut self, steps: u16) -> Self {
        self.margin_y = steps;
        self
    }

    pub fn max_width(mut self, max_width: impl Into<Px>) -> Self {
        self.max_width = Some(max_width.into());
        self
    }

    fn to_style(self) -> Style {
        let mut style = Style::new()
            .padding_horiz(spacing_px(self.padding_x))
            .padding_vert(spacing_px(self.padding_y))
            .margin_horiz(spacing_px(self.margin_x))
            .margin_vert(spacing_px(self.margin_y));
        if self.width != WidthClass::None {
            style = style.width_full();
        }
        // An explicit cap wins over the class cap.
        if let Some(cap) = self.max_width.or(self.width.max_width()) {
            style = style.max_width(cap);
        }
        style
    }
}

/// Wraps content in a container whose width, padding, and margins follow
/// the current tier.
///
/// Defaults match the narrow-to-wide progression: full width with padding
/// 4 on mobile, `lg` with padding 6 on tablet, `xl` with padding 8 on
/// desktop, margins 0 everywhere.
///
/// ```
/// use reflow::adapters::{AdaptiveContainer, WidthClass};
/// use reflow::responsive::Tier;
/// use reflow::viewport::ViewportSnapshot;
///
/// let container = AdaptiveContainer::new()
///     .policy(Tier::Desktop, |p| p.width(WidthClass::Xxl).padding_x(10));
///
/// let node = container.resolve(&ViewportSnapshot::new(1400.0, 900.0), vec![]);
/// assert!(node.children.is_empty());
/// assert_eq!(container.policy_for(Tier::Desktop).width, WidthClass::Xxl);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AdaptiveContainer {
    policies: PerTier<ContainerPolicy>,
}

impl Default for AdaptiveContainer {
    fn default() -> Self {
        Self {
            policies: PerTier {
                mobile: ContainerPolicy::new(WidthClass::Full, 4),
                tablet: ContainerPolicy::new(WidthClass::Lg, 6),
                desktop: ContainerPolicy::new(WidthClass::Xl, 8),
            },
        }
    }
}

impl AdaptiveContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the policy for one tier.
    pub fn policy(
        mut self,
        tier: Tier,
        policy: impl FnOnce(ContainerPolicy) -> ContainerPolicy,
    ) -> Self {
        let slot = self.policies.get_mut(tier);
        *slot = policy(*slot);
        self
    }

    /// The effective policy for a tier.
    pub fn policy_for(&self, tier: Tier) -> &ContainerPolicy {
        self.policies.get(tier)
    }

    /// Render the container for the snapshot's tier.
    ///
    /// Selection happens on every call, so a tier change only requires
    /// resolving again with the new snapshot.
    pub fn resolve(&self, snapshot: &ViewportSnapshot, children: Vec<Node>) -> Node {
        let policy = self.policies.get(snapshot.tier);
        Node {
            kind: NodeKind::Block,
            style: policy.to_style(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AdaptiveContainer, WidthClass};
    use crate::responsive::Tier;
    use crate::unit::{PxPct, PxPctAuto};
    use crate::viewport::ViewportSnapshot;

    #[test]
    fn default_fallback_by_width() {
        let container = AdaptiveContainer::new();
        for (width, class) in [(500.0, "full"), (900.0, "lg"), (1400.0, "xl")] {
            let snapshot = ViewportSnapshot::new(width, 800.0);
            assert_eq!(container.policy_for(snapshot.tier).width.as_str(), class);
        }
    }

    #[test]
    fn default_padding_progression() {
        let container = AdaptiveContainer::new();
        let mobile = container.resolve(&ViewportSnapshot::new(500.0, 800.0), vec![]);
        assert_eq!(mobile.style.padding_left, PxPct::Px(16.0));
        assert_eq!(mobile.style.margin_left, PxPctAuto::Px(0.0));
        assert_eq!(mobile.style.width, PxPctAuto::Pct(100.0));
        assert_eq!(mobile.style.max_width, PxPctAuto::Auto);

        let desktop = container.resolve(&ViewportSnapshot::new(1400.0, 800.0), vec![]);
        assert_eq!(desktop.style.padding_left, PxPct::Px(32.0));
        assert_eq!(desktop.style.max_width, PxPctAuto::Px(1280.0));
    }

    #[test]
    fn width_none_applies_no_constraint() {
        let container =
            AdaptiveContainer::new().policy(Tier::Mobile, |p| p.width(WidthClass::None));
        let node = container.resolve(&ViewportSnapshot::new(400.0, 800.0), vec![]);
        assert_eq!(node.style.width, PxPctAuto::Auto);
        assert_eq!(node.style.max_width, PxPctAuto::Auto);
    }

    #[test]
    fn explicit_max_width_wins_over_class_cap() {
        let container = AdaptiveContainer::new().policy(Tier::Desktop, |p| p.max_width(960));
        let node = container.resolve(&ViewportSnapshot::new(1400.0, 800.0), vec![]);
        assert_eq!(node.style.max_width, PxPctAuto::Px(960.0));
    }

    #[test]
    fn children_pass_through() {
        let container = AdaptiveContainer::new();
        let node = container.resolve(
            &ViewportSnapshot::new(900.0, 800.0),
            vec![super::Node::block(), super::Node::inline()],
        );
        assert_eq!(node.children.len(), 2);
    }
}
