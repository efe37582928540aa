use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Rank band over monthly income, used for display and gamification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// Classify a monthly income into its tier.
    ///
    /// Bands are disjoint and evaluated highest-first; lower bounds are
    /// inclusive, and anything below ¥800,000 (including negative values)
    /// is Bronze.
    pub fn for_monthly_income(monthly_income: Decimal) -> Tier {
        if monthly_income >= dec!(1_600_000) {
            Tier::Platinum
        } else if monthly_income >= dec!(1_200_000) {
            Tier::Gold
        } else if monthly_income >= dec!(800_000) {
            Tier::Silver
        } else {
            Tier::Bronze
        }
    }

    /// Rank order, 1 (base) to 4 (top).
    pub fn rank(&self) -> u8 {
        match self {
            Tier::Bronze => 1,
            Tier::Silver => 2,
            Tier::Gold => 3,
            Tier::Platinum => 4,
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
            Tier::Bronze => "🔥",
            Tier::Silver => "💎",
            Tier::Gold => "⭐",
            Tier::Platinum => "👑",
        }
    }

    /// Accent colour for the HTML report.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Bronze => "#f97316",
            Tier::Silver => "#6b7280",
            Tier::Gold => "#f59e0b",
            Tier::Platinum => "#8b5cf6",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coaching message for the achievement rate band.
pub fn motivation_message(achievement_rate: Decimal) -> &'static str {
    if achievement_rate >= dec!(100) {
        "Target achieved! Excellent pace!"
    } else if achievement_rate >= dec!(80) {
        "Almost there, keep pushing!"
    } else if achievement_rate >= dec!(60) {
        "Good pace, keep it up"
    } else {
        "Plenty of room to grow, let's go"
    }
}
