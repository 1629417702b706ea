use serde::{Deserialize, Serialize};

/// Bounds every reported score is clamped to.
pub const SCORE_FLOOR: i32 = 300;
pub const SCORE_CEILING: i32 = 850;

/// Minimum score that yields an approve recommendation.
pub const RECOMMEND_MIN: i32 = 620;

/// Ordinal spending category, ordered from most to least conservative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpendingHabits {
    Frugal,
    Average,
    ModerateSpending,
    HighSpending,
}

impl SpendingHabits {
    /// Ordinal weight used by the scoring formula: Frugal=1 .. HighSpending=4.
    pub fn weight(self) -> i32 {
        match self {
            SpendingHabits::Frugal => 1,
            SpendingHabits::Average => 2,
            SpendingHabits::ModerateSpending => 3,
            SpendingHabits::HighSpending => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpendingHabits::Frugal => "Frugal",
            SpendingHabits::Average => "Average",
            SpendingHabits::ModerateSpending => "Moderate Spending",
            SpendingHabits::HighSpending => "High Spending",
        }
    }
}

/// Applicant attributes for a single assessment. Constructed per call; the
/// engine holds no state between assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub annual_income: f64,
    pub loan_amount: f64,
    pub spending: SpendingHabits,
    pub credit_history_years: f64,
}

/// Classification bands derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Low,
    Moderate,
    ModerateHigh,
    High,
}

impl RiskTier {
    pub const LOW_MIN: i32 = 740;
    pub const MODERATE_MIN: i32 = 670;
    pub const MODERATE_HIGH_MIN: i32 = 580;

    /// First matching descending threshold wins; 740 itself is Low.
    pub fn classify(score: i32) -> Self {
        if score >= Self::LOW_MIN {
            RiskTier::Low
        } else if score >= Self::MODERATE_MIN {
            RiskTier::Moderate
        } else if score >= Self::MODERATE_HIGH_MIN {
            RiskTier::ModerateHigh
        } else {
            RiskTier::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::ModerateHigh => "Moderate-High",
            RiskTier::High => "High",
        }
    }
}

/// Outcome of one assessment; a pure function of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score: i32,
    pub risk_tier: RiskTier,
    pub recommended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_follow_descending_thresholds() {
        assert_eq!(RiskTier::classify(740), RiskTier::Low);
        assert_eq!(RiskTier::classify(739), RiskTier::Moderate);
        assert_eq!(RiskTier::classify(670), RiskTier::Moderate);
        assert_eq!(RiskTier::classify(669), RiskTier::ModerateHigh);
        assert_eq!(RiskTier::classify(580), RiskTier::ModerateHigh);
        assert_eq!(RiskTier::classify(579), RiskTier::High);
    }

    #[test]
    fn tier_covers_clamp_bounds() {
        assert_eq!(RiskTier::classify(SCORE_CEILING), RiskTier::Low);
        assert_eq!(RiskTier::classify(SCORE_FLOOR), RiskTier::High);
    }

    #[test]
    fn spending_weights_are_ordinal() {
        assert_eq!(SpendingHabits::Frugal.weight(), 1);
        assert_eq!(SpendingHabits::Average.weight(), 2);
        assert_eq!(SpendingHabits::ModerateSpending.weight(), 3);
        assert_eq!(SpendingHabits::HighSpending.weight(), 4);
    }

    #[test]
    fn spending_parses_kebab_case() {
        let parsed: SpendingHabits =
            serde_json::from_str("\"moderate-spending\"").expect("category should parse");
        assert_eq!(parsed, SpendingHabits::ModerateSpending);
    }
}
