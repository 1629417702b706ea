use crate::types::assessment::{AssessmentInput, AssessmentResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Rule family that produced a score adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreFactor {
    CreditHistory,
    DebtToIncome,
    Spending,
    IncomeLevel,
}

impl ScoreFactor {
    pub fn label(self) -> &'static str {
        match self {
            ScoreFactor::CreditHistory => "credit history",
            ScoreFactor::DebtToIncome => "debt-to-income",
            ScoreFactor::Spending => "spending habits",
            ScoreFactor::IncomeLevel => "income level",
        }
    }
}

/// Discrete contribution to an assessment, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub delta: i32,
    pub note: String,
}

/// Engine output: the contract result plus the adjustments that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub result: AssessmentResult,
    pub components: Vec<ScoreComponent>,
}

/// Renderer-facing record for one assessed applicant. Timestamps and the
/// reference id live here, never in the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub version: String,
    pub generated_at: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant: Option<String>,
    pub input: AssessmentInput,
    pub result: AssessmentResult,
    pub components: Vec<ScoreComponent>,
}

impl AssessmentReport {
    pub fn new(
        applicant: Option<String>,
        input: AssessmentInput,
        outcome: AssessmentOutcome,
    ) -> Self {
        let reference = reference_id(&input);
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            reference,
            applicant,
            input,
            result: outcome.result,
            components: outcome.components,
        }
    }
}

/// Deterministic reference for an assessment: identical inputs always hash to
/// the identical id.
fn reference_id(input: &AssessmentInput) -> String {
    let canonical = format!(
        "{}|{}|{}|{}",
        input.annual_income,
        input.loan_amount,
        input.spending.label(),
        input.credit_history_years
    );
    let digest = Sha256::digest(canonical.as_bytes());
    let hex = digest
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>();
    hex[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::assessment::SpendingHabits;

    fn sample_input() -> AssessmentInput {
        AssessmentInput {
            annual_income: 60000.0,
            loan_amount: 25000.0,
            spending: SpendingHabits::Average,
            credit_history_years: 3.0,
        }
    }

    #[test]
    fn reference_id_is_deterministic() {
        assert_eq!(reference_id(&sample_input()), reference_id(&sample_input()));
    }

    #[test]
    fn reference_id_depends_on_input() {
        let mut other = sample_input();
        other.loan_amount = 26000.0;
        assert_ne!(reference_id(&sample_input()), reference_id(&other));
    }

    #[test]
    fn reference_id_is_short_hex() {
        let reference = reference_id(&sample_input());
        assert_eq!(reference.len(), 16);
        assert!(reference.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
