use crate::responsive::Tiers;
use crate::style::Style;
use crate::viewport::ViewportSnapshot;

use super::{Node, NodeKind};

/// Renders content on the configured tiers and nothing elsewhere.
///
/// Content is visible on every tier by default. On a hidden tier the
/// resolve is `None`: the content is absent from the output, not present
/// and invisible, so accessibility trees and absence assertions see
/// nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveVisibility {
    visible_on: Tiers,
    kind: NodeKind,
}

impl Default for AdaptiveVisibility {
    fn default() -> Self {
        Self {
            visible_on: Tiers::ALL,
            kind: NodeKind::Block,
        }
    }
}

impl AdaptiveVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the content only on the given tiers.
    pub fn visible_on(mut self, tiers: impl Into<Tiers>) -> Self {
        self.visible_on = tiers.into();
        self
    }

    /// Hide the content on the given tiers.
    pub fn hide_on(self, tiers: impl Into<Tiers>) -> Self {
        self.visible_on(Tiers::not(tiers.into()))
    }

    /// Wrap the content with inline rather than block semantics.
    pub fn inline(mut self) -> Self {
        self.kind = NodeKind::Inline;
        self
    }

    /// Render the content for the snapshot's tier, or `None` when hidden.
    pub fn resolve(&self, snapshot: &ViewportSnapshot, children: Vec<Node>) -> Option<Node> {
        if !self.visible_on.contains(snapshot.tier) {
            return None;
        }
        Some(Node {
            kind: self.kind,
            style: Style::new(),
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AdaptiveVisibility;
    use crate::adapters::{Node, NodeKind};
    use crate::responsive::{Tier, Tiers};
    use crate::viewport::ViewportSnapshot;

    #[test]
    fn visible_everywhere_by_default() {
        let visibility = AdaptiveVisibility::new();
        for width in [100.0, 900.0, 1400.0] {
            let node = visibility
                .resolve(&ViewportSnapshot::new(width, 800.0), vec![Node::block()])
                .unwrap();
            assert_eq!(node.children.len(), 1, "width {width}");
        }
    }

    #[test]
    fn hidden_tier_renders_nothing() {
        let visibility = AdaptiveVisibility::new().hide_on(Tiers::DESKTOP);
        let resolved = visibility.resolve(&ViewportSnapshot::new(1400.0, 800.0), vec![Node::block()]);
        assert_eq!(resolved, None);

        assert!(visibility
            .resolve(&ViewportSnapshot::new(500.0, 800.0), vec![])
            .is_some());
    }

    #[test]
    fn visible_on_narrows_to_one_tier() {
        let visibility = AdaptiveVisibility::new().visible_on(Tier::Tablet);
        assert!(visibility.resolve(&ViewportSnapshot::new(900.0, 800.0), vec![]).is_some());
        assert!(visibility.resolve(&ViewportSnapshot::new(500.0, 800.0), vec![]).is_none());
        assert!(visibility.resolve(&ViewportSnapshot::new(1400.0, 800.0), vec![]).is_none());
    }

    #[test]
    fn inline_semantics() {
        let node = AdaptiveVisibility::new()
            .inline()
            .resolve(&ViewportSnapshot::new(500.0, 800.0), vec![])
            .unwrap();
        assert_eq!(node.kind, NodeKind::Inline);
    }

    #[test]
    fn exactly_one_clause_applies_per_width() {
        // The visibility decision is a disjunction over mutually exclusive
        // tiers, so flipping one tier's flag only affects that tier.
        let visibility = AdaptiveVisibility::new().hide_on(Tiers::TABLET);
        assert!(visibility.resolve(&ViewportSnapshot::new(767.0, 800.0), vec![]).is_some());
        assert!(visibility.resolve(&ViewportSnapshot::new(768.0, 800.0), vec![]).is_none());
        assert!(visibility.resolve(&ViewportSnapshot::new(1024.0, 800.0), vec![]).is_some());
    }
}
