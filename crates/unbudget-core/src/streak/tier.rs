//! Savings tiers derived from streak length.

use serde::{Deserialize, Serialize};

/// Savings tier for a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Under 7 days
    Bronze,
    /// 7-20 days
    Silver,
    /// 21-29 days
    Gold,
    /// 30 days and up
    Platinum,
}

impl Tier {
    pub fn of(streak: u32) -> Tier {
        match streak {
            0..=6 => Tier::Bronze,
            7..=20 => Tier::Silver,
            21..=29 => Tier::Gold,
            _ => Tier::Platinum,
        }
    }

    /// First streak value in this tier.
    pub fn lower_bound(&self) -> u32 {
        match self {
            Tier::Bronze => 0,
            Tier::Silver => 7,
            Tier::Gold => 21,
            Tier::Platinum => 30,
        }
    }

    pub fn next(&self) -> Option<Tier> {
        match self {
            Tier::Bronze => Some(Tier::Silver),
            Tier::Silver => Some(Tier::Gold),
            Tier::Gold => Some(Tier::Platinum),
            Tier::Platinum => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tier::Bronze => "🥉",
            Tier::Silver => "🥈",
            Tier::Gold => "🏆",
            Tier::Platinum => "💎",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress from the current tier toward the next one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierProgress {
    pub tier: Tier,
    pub current: u32,
    /// Streak that unlocks the next tier. `None` at Platinum.
    pub target: Option<u32>,
    /// Share of the way to `target`, in `[0, 1]`. Always 1 at Platinum.
    pub fraction: f64,
}

impl TierProgress {
    pub fn of(streak: u32) -> Self {
        let tier = Tier::of(streak);
        let target = tier.next().map(|next| next.lower_bound());
        let fraction = match target {
            Some(upper) => {
                let lower = tier.lower_bound();
                let span = f64::from(upper - lower);
                (f64::from(streak.saturating_sub(lower)) / span).clamp(0.0, 1.0)
            }
            None => 1.0,
        };

        Self {
            tier,
            current: streak,
            target,
            fraction,
        }
    }

    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }

    /// Days left until the next tier.
    pub fn days_remaining(&self) -> Option<u32> {
        self.target.map(|t| t.saturating_sub(self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::of(0), Tier::Bronze);
        assert_eq!(Tier::of(6), Tier::Bronze);
        assert_eq!(Tier::of(7), Tier::Silver);
        assert_eq!(Tier::of(20), Tier::Silver);
        assert_eq!(Tier::of(21), Tier::Gold);
        assert_eq!(Tier::of(29), Tier::Gold);
        assert_eq!(Tier::of(30), Tier::Platinum);
        assert_eq!(Tier::of(365), Tier::Platinum);
    }

    #[test]
    fn progress_within_each_tier() {
        let bronze = TierProgress::of(0);
        assert_eq!(bronze.target, Some(7));
        assert_eq!(bronze.fraction, 0.0);

        let silver = TierProgress::of(14);
        assert_eq!(silver.tier, Tier::Silver);
        assert_eq!(silver.target, Some(21));
        assert_eq!(silver.fraction, 0.5);
        assert_eq!(silver.days_remaining(), Some(7));

        let gold = TierProgress::of(21);
        assert_eq!(gold.target, Some(30));
        assert_eq!(gold.fraction, 0.0);
        assert_eq!(gold.days_remaining(), Some(9));
    }

    #[test]
    fn platinum_is_complete() {
        let progress = TierProgress::of(45);
        assert_eq!(progress.tier, Tier::Platinum);
        assert_eq!(progress.target, None);
        assert_eq!(progress.percentage(), 100.0);
        assert_eq!(progress.days_remaining(), None);
    }
}
