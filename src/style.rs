//! Resolved layout styles.
//!
//! Adapters resolve their per-tier policies into a [`Style`], a flat bundle
//! of layout properties. Hosts that lay out with taffy can convert it with
//! [`Style::to_taffy_style`]; everything else can read the fields directly.

pub use taffy::style::Display;
use taffy::{
    geometry::{Rect, Size},
    style::Style as TaffyStyle,
};

use crate::unit::{PxPct, PxPctAuto};

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub display: Display,
    pub width: PxPctAuto,
    pub height: PxPctAuto,
    pub min_width: PxPctAuto,
    pub min_height: PxPctAuto,
    pub max_width: PxPctAuto,
    pub max_height: PxPctAuto,
    pub padding_left: PxPct,
    pub padding_top: PxPct,
    pub padding_right: PxPct,
    pub padding_bottom: PxPct,
    pub margin_left: PxPctAuto,
    pub margin_top: PxPctAuto,
    pub margin_right: PxPctAuto,
    pub margin_bottom: PxPctAuto,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            display: Display::Flex,
            width: PxPctAuto::Auto,
            height: PxPctAuto::Auto,
            min_width: PxPctAuto::Auto,
            min_height: PxPctAuto::Auto,
            max_width: PxPctAuto::Auto,
            max_height: PxPctAuto::Auto,
            padding_left: PxPct::Px(0.0),
            padding_top: PxPct::Px(0.0),
            padding_right: PxPct::Px(0.0),
            padding_bottom: PxPct::Px(0.0),
            margin_left: PxPctAuto::Px(0.0),
            margin_top: PxPctAuto::Px(0.0),
            margin_right: PxPctAuto::Px(0.0),
            margin_bottom: PxPctAuto::Px(0.0),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn width(mut self, width: impl Into<PxPctAuto>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the width to 100% of the parent container.
    pub fn width_full(self) -> Self {
        self.width_pct(100.0)
    }

    /// Sets the width as a percentage of the parent container.
    pub fn width_pct(self, width: f64) -> Self {
        self.width(PxPctAuto::Pct(width))
    }

    pub fn height(mut self, height: impl Into<PxPctAuto>) -> Self {
        self.height = height.into();
        self
    }

    pub fn min_width(mut self, min_width: impl Into<PxPctAuto>) -> Self {
        self.min_width = min_width.into();
        self
    }

    pub fn min_height(mut self, min_height: impl Into<PxPctAuto>) -> Self {
        self.min_height = min_height.into();
        self
    }

    pub fn max_width(mut self, max_width: impl Into<PxPctAuto>) -> Self {
        self.max_width = max_width.into();
        self
    }

    pub fn max_height(mut self, max_height: impl Into<PxPctAuto>) -> Self {
        self.max_height = max_height.into();
        self
    }

    pub fn size(self, width: impl Into<PxPctAuto>, height: impl Into<PxPctAuto>) -> Self {
        self.width(width).height(height)
    }

    /// Sets padding on all four sides.
    pub fn padding(self, padding: impl Into<PxPct>) -> Self {
        let padding = padding.into();
        self.padding_horiz(padding).padding_vert(padding)
    }

    /// Sets left and right padding.
    pub fn padding_horiz(mut self, padding: impl Into<PxPct>) -> Self {
        let padding = padding.into();
        self.padding_left = padding;
        self.padding_right = padding;
        self
    }

    /// Sets top and bottom padding.
    pub fn padding_vert(mut self, padding: impl Into<PxPct>) -> Self {
        let padding = padding.into();
        self.padding_top = padding;
        self.padding_bottom = padding;
        self
    }

    /// Sets margin on all four sides.
    pub fn margin(self, margin: impl Into<PxPctAuto>) -> Self {
        let margin = margin.into();
        self.margin_horiz(margin).margin_vert(margin)
    }

    /// Sets left and right margin.
    pub fn margin_horiz(mut self, margin: impl Into<PxPctAuto>) -> Self {
        let margin = margin.into();
        self.margin_left = margin;
        self.margin_right = margin;
        self
    }

    /// Sets top and bottom margin.
    pub fn margin_vert(mut self, margin: impl Into<PxPctAuto>) -> Self {
        let margin = margin.into();
        self.margin_top = margin;
        self.margin_bottom = margin;
        self
    }

    pub fn to_taffy_style(&self) -> TaffyStyle {
        TaffyStyle {
            display: self.display,
            size: Size {
                width: self.width.into(),
                height: self.height.into(),
            },
            min_size: Size {
                width: self.min_width.into(),
                height: self.min_height.into(),
            },
            max_size: Size {
                width: self.max_width.into(),
                height: self.max_height.into(),
            },
            padding: Rect {
                left: self.padding_left.into(),
                top: self.padding_top.into(),
                right: self.padding_right.into(),
                bottom: self.padding_bottom.into(),
            },
            margin: Rect {
                left: self.margin_left.into(),
                top: self.margin_top.into(),
                right: self.margin_right.into(),
                bottom: self.margin_bottom.into(),
            },
            ..Default::default()
        }
    }
}
