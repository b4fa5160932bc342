//! Strength tiers derived from the entropy estimate.

/// Ordered strength tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

/// How much of the strength bar a given estimate fills, in `[0, 1]`.
/// 120 bits pegs the bar.
pub fn bar_fill(bits: f64) -> f64 {
    (bits / 120.0).min(1.0)
}

impl StrengthLevel {
    /// Classify an entropy estimate. Thresholds are inclusive on the lower
    /// bound and checked descending, first match wins.
    pub fn from_entropy(bits: f64) -> Self {
        if bits >= 100.0 {
            StrengthLevel::VeryStrong
        } else if bits >= 75.0 {
            StrengthLevel::Strong
        } else if bits >= 50.0 {
            StrengthLevel::Moderate
        } else if bits >= 25.0 {
            StrengthLevel::Weak
        } else {
            StrengthLevel::VeryWeak
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    /// ANSI color token for terminal display.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "\x1b[38;5;9m",
            StrengthLevel::Weak => "\x1b[38;5;208m",
            StrengthLevel::Moderate => "\x1b[38;5;220m",
            StrengthLevel::Strong => "\x1b[38;5;112m",
            StrengthLevel::VeryStrong => "\x1b[38;5;46m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_on_the_lower_bound() {
        assert_eq!(StrengthLevel::from_entropy(0.0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_entropy(24.999), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_entropy(25.0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_entropy(50.0), StrengthLevel::Moderate);
        assert_eq!(StrengthLevel::from_entropy(74.999), StrengthLevel::Moderate);
        assert_eq!(StrengthLevel::from_entropy(75.0), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_entropy(99.999), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_entropy(100.0), StrengthLevel::VeryStrong);
        assert_eq!(StrengthLevel::from_entropy(500.0), StrengthLevel::VeryStrong);
    }

    #[test]
    fn tiers_are_monotonic_in_entropy() {
        let mut last = StrengthLevel::VeryWeak;
        for tenth_bits in 0..1500 {
            let level = StrengthLevel::from_entropy(tenth_bits as f64 / 10.0);
            assert!(level >= last);
            last = level;
        }
    }

    #[test]
    fn bar_fill_is_proportional_and_clamped() {
        assert_eq!(bar_fill(0.0), 0.0);
        assert_eq!(bar_fill(60.0), 0.5);
        assert_eq!(bar_fill(120.0), 1.0);
        assert_eq!(bar_fill(400.0), 1.0);
    }
}
