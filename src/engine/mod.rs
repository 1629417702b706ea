mod rules;

use crate::types::assessment::{
    AssessmentInput, AssessmentResult, RiskTier, RECOMMEND_MIN, SCORE_CEILING, SCORE_FLOOR,
};
use crate::types::report::AssessmentOutcome;
use thiserror::Error;

/// Preconditions violated. Callers wanting field-level detail validate
/// upstream; the engine reports a single kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid assessment input")]
pub struct InvalidInput;

const BASE_SCORE: i32 = 700;

/// Fixed 5-year amortization assumption inherited from the original formula.
/// Loan term is not an input to this model; do not "fix" this constant, since
/// changing it changes scoring outcomes.
const AMORTIZATION_MONTHS: f64 = 60.0;

/// Score an applicant. Pure and reentrant: identical inputs always yield
/// identical outputs.
#[allow(dead_code)]
pub fn assess(input: &AssessmentInput) -> Result<AssessmentResult, InvalidInput> {
    evaluate(input).map(|outcome| outcome.result)
}

/// Same computation as [`assess`], returning the per-factor adjustments that
/// produced the score alongside the result.
pub fn evaluate(input: &AssessmentInput) -> Result<AssessmentOutcome, InvalidInput> {
    validate(input)?;

    let monthly_payment = input.loan_amount / AMORTIZATION_MONTHS;
    let monthly_income = input.annual_income / 12.0;
    let dti = monthly_payment / monthly_income;

    let components = rules::adjustments(input, dti);
    let raw = BASE_SCORE + components.iter().map(|c| c.delta).sum::<i32>();
    let score = raw.clamp(SCORE_FLOOR, SCORE_CEILING);

    Ok(AssessmentOutcome {
        result: AssessmentResult {
            score,
            risk_tier: RiskTier::classify(score),
            recommended: score >= RECOMMEND_MIN,
        },
        components,
    })
}

fn validate(input: &AssessmentInput) -> Result<(), InvalidInput> {
    if !input.annual_income.is_finite() || input.annual_income <= 0.0 {
        return Err(InvalidInput);
    }
    if !input.loan_amount.is_finite() || input.loan_amount <= 0.0 {
        return Err(InvalidInput);
    }
    if !input.credit_history_years.is_finite() || input.credit_history_years < 0.0 {
        return Err(InvalidInput);
    }
    Ok(())
}
