use crate::types::assessment::{AssessmentInput, SpendingHabits};
use crate::types::report::{ScoreComponent, ScoreFactor};

/// Rule adjustments in their fixed application order. Within each factor the
/// guards run top-to-bottom and only the first match applies; rules whose
/// guards all miss contribute nothing.
pub(crate) fn adjustments(input: &AssessmentInput, dti: f64) -> Vec<ScoreComponent> {
    [
        credit_history(input.credit_history_years),
        debt_to_income(dti),
        spending(input.spending),
        income_level(input.annual_income),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn credit_history(years: f64) -> Option<ScoreComponent> {
    // 2 through 5 years inclusive is the neutral band.
    if years < 2.0 {
        Some(component(
            ScoreFactor::CreditHistory,
            -50,
            format!("history under 2 years ({years})"),
        ))
    } else if years > 5.0 {
        Some(component(
            ScoreFactor::CreditHistory,
            30,
            format!("history over 5 years ({years})"),
        ))
    } else {
        None
    }
}

fn debt_to_income(dti: f64) -> Option<ScoreComponent> {
    if dti > 0.43 {
        Some(component(
            ScoreFactor::DebtToIncome,
            -80,
            format!("dti {dti:.3} above 0.43"),
        ))
    } else if dti > 0.35 {
        Some(component(
            ScoreFactor::DebtToIncome,
            -40,
            format!("dti {dti:.3} above 0.35"),
        ))
    } else if dti < 0.2 {
        Some(component(
            ScoreFactor::DebtToIncome,
            30,
            format!("dti {dti:.3} below 0.20"),
        ))
    } else {
        None
    }
}

fn spending(habits: SpendingHabits) -> Option<ScoreComponent> {
    let delta = -(habits.weight() - 1) * 20;
    if delta == 0 {
        return None;
    }
    Some(component(
        ScoreFactor::Spending,
        delta,
        format!("{} profile", habits.label()),
    ))
}

fn income_level(annual_income: f64) -> Option<ScoreComponent> {
    if annual_income > 100000.0 {
        Some(component(
            ScoreFactor::IncomeLevel,
            20,
            "income above 100,000".to_string(),
        ))
    } else if annual_income < 30000.0 {
        Some(component(
            ScoreFactor::IncomeLevel,
            -30,
            "income below 30,000".to_string(),
        ))
    } else {
        None
    }
}

fn component(factor: ScoreFactor, delta: i32, note: String) -> ScoreComponent {
    ScoreComponent { factor, delta, note }
}
