use std::ops::{BitOr, Range, RangeFrom, RangeTo};

use bitflags::bitflags;

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
  #[must_use]
  pub struct TierFlags: u8 {
    const MOBILE = 1;
    const TABLET = 2;
    const DESKTOP = 4;
  }
}

/// One of the three mutually exclusive viewport classifications.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    Mobile,
    Tablet,
    Desktop,
}

impl Tier {
    /// All tiers, narrowest first.
    pub const ALL: [Tier; 3] = [Tier::Mobile, Tier::Tablet, Tier::Desktop];

    pub(crate) fn flag(self) -> TierFlags {
        match self {
            Tier::Mobile => TierFlags::MOBILE,
            Tier::Tablet => TierFlags::TABLET,
            Tier::Desktop => TierFlags::DESKTOP,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Mobile => "mobile",
            Tier::Tablet => "tablet",
            Tier::Desktop => "desktop",
        }
    }
}

/// Width breakpoints in logical pixels
pub struct Breakpoints {
    mobile: RangeTo<f64>,
    tablet: Range<f64>,
    desktop: RangeFrom<f64>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: ..768.0,
            tablet: 768.0..1024.0,
            desktop: 1024.0..,
        }
    }
}

impl Breakpoints {
    /// Classify a width into its tier. Total over all finite widths: any
    /// width not covered by the mobile or tablet ranges is desktop.
    pub fn tier_for_width(&self, width: f64) -> Tier {
        if self.mobile.contains(&width) {
            Tier::Mobile
        } else if self.tablet.contains(&width) {
            Tier::Tablet
        } else {
            Tier::Desktop
        }
    }
}

/// A set of tiers, used to target policies at more than one tier at once.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tiers {
    flags: TierFlags,
}

impl Tiers {
    pub const NONE: Tiers = Tiers::new(TierFlags::empty());
    pub const MOBILE: Tiers = Tiers::new(TierFlags::MOBILE);
    pub const TABLET: Tiers = Tiers::new(TierFlags::TABLET);
    pub const DESKTOP: Tiers = Tiers::new(TierFlags::DESKTOP);
    pub const ALL: Tiers = Tiers::new(TierFlags::all());

    const fn new(flags: TierFlags) -> Self {
        Self { flags }
    }

    pub const fn not(tiers: Tiers) -> Self {
        let flags = TierFlags::all().difference(tiers.flags);
        Self { flags }
    }

    pub fn contains(&self, tier: Tier) -> bool {
        self.flags.contains(tier.flag())
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// The tiers in this set, narrowest first.
    pub fn tiers(&self) -> Vec<Tier> {
        Tier::ALL
            .into_iter()
            .filter(|tier| self.contains(*tier))
            .collect()
    }
}

impl BitOr for Tiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}

impl From<Tier> for Tiers {
    fn from(tier: Tier) -> Self {
        Self::new(tier.flag())
    }
}

/// A value per tier. Policy selection over this table is an exhaustive
/// match, so a tier can never be left without a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerTier<T> {
    pub mobile: T,
    pub tablet: T,
    pub desktop: T,
}

impl<T> PerTier<T> {
    pub fn get(&self, tier: Tier) -> &T {
        match tier {
            Tier::Mobile => &self.mobile,
            Tier::Tablet => &self.tablet,
            Tier::Desktop => &self.desktop,
        }
    }

    pub fn get_mut(&mut self, tier: Tier) -> &mut T {
        match tier {
            Tier::Mobile => &mut self.mobile,
            Tier::Tablet => &mut self.tablet,
            Tier::Desktop => &mut self.desktop,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerTier<U> {
        PerTier {
            mobile: f(self.mobile),
            tablet: f(self.tablet),
            desktop: f(self.desktop),
        }
    }
}

impl<T: Clone> PerTier<T> {
    /// The same value for every tier.
    pub fn uniform(value: T) -> Self {
        Self {
            mobile: value.clone(),
            tablet: value.clone(),
            desktop: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::responsive::TierFlags;

    use super::{Breakpoints, PerTier, Tier, Tiers};

    #[test]
    fn boundaries() {
        let bp = Breakpoints::default();
        assert_eq!(bp.tier_for_width(767.0), Tier::Mobile);
        assert_eq!(bp.tier_for_width(768.0), Tier::Tablet);
        assert_eq!(bp.tier_for_width(1023.0), Tier::Tablet);
        assert_eq!(bp.tier_for_width(1024.0), Tier::Desktop);
    }

    #[test]
    fn partition_total() {
        let bp = Breakpoints::default();
        for width in (0..2000).map(f64::from) {
            let tier = bp.tier_for_width(width);
            let matched = Tier::ALL.iter().filter(|t| **t == tier).count();
            assert_eq!(matched, 1);
        }
    }

    #[test]
    fn deterministic() {
        let bp = Breakpoints::default();
        for width in [0.0, 500.0, 768.0, 900.0, 1024.0, 4096.0] {
            assert_eq!(bp.tier_for_width(width), bp.tier_for_width(width));
        }
    }

    #[test]
    fn union() {
        let tiers = Tiers::MOBILE | Tiers::DESKTOP;
        assert!(tiers.contains(Tier::Mobile));
        assert!(tiers.contains(Tier::Desktop));

        assert!(!tiers.contains(Tier::Tablet));
    }

    #[test]
    fn mobile_negated() {
        let tiers = Tiers::not(Tiers::MOBILE);
        assert!(!tiers.contains(Tier::Mobile));

        assert!(tiers.contains(Tier::Tablet));
        assert!(tiers.contains(Tier::Desktop));
    }

    #[test]
    fn negated_union() {
        let tiers = Tiers::not(Tiers::MOBILE | Tiers::DESKTOP);
        assert!(!tiers.contains(Tier::Mobile));
        assert!(!tiers.contains(Tier::Desktop));

        assert!(tiers.contains(Tier::Tablet));
    }

    #[test]
    fn all_flags_cover_every_tier() {
        assert_eq!(TierFlags::all().iter().count(), Tier::ALL.len());
        assert_eq!(Tiers::ALL.tiers(), Tier::ALL.to_vec());
        assert!(Tiers::NONE.is_empty());
    }

    #[test]
    fn per_tier_lookup() {
        let table = PerTier {
            mobile: 1,
            tablet: 2,
            desktop: 3,
        };
        assert_eq!(*table.get(Tier::Mobile), 1);
        assert_eq!(*table.get(Tier::Tablet), 2);
        assert_eq!(*table.get(Tier::Desktop), 3);
        assert_eq!(PerTier::uniform(7).map(|v: i32| v * 2).tablet, 14);
    }
}
