use crate::error::{LendscoreError, Result};
use crate::types::assessment::{AssessmentInput, SpendingHabits};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Parse a currency or count field the way the original form did: trim, strip
/// thousands separators, then parse. The engine never sees raw text.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return Err(LendscoreError::InvalidField {
            field,
            reason: "value is empty".to_string(),
        });
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| LendscoreError::InvalidField {
            field,
            reason: format!("'{raw}' is not a number"),
        })
}

/// Build a validated engine input from raw form values, reporting the first
/// offending field by name. The engine re-validates with a single error kind.
pub fn applicant_input(
    annual_income_raw: &str,
    loan_amount_raw: &str,
    spending: SpendingHabits,
    credit_history_raw: &str,
) -> Result<AssessmentInput> {
    let annual_income = parse_amount("annual-income", annual_income_raw)?;
    let loan_amount = parse_amount("loan-amount", loan_amount_raw)?;
    let credit_history_years = parse_amount("credit-history-years", credit_history_raw)?;
    debug!(annual_income, loan_amount, credit_history_years, "parsed applicant fields");

    check_fields(annual_income, loan_amount, credit_history_years, None)?;

    Ok(AssessmentInput {
        annual_income,
        loan_amount,
        spending,
        credit_history_years,
    })
}

fn check_fields(
    annual_income: f64,
    loan_amount: f64,
    credit_history_years: f64,
    context: Option<&str>,
) -> Result<()> {
    let fail = |field: &'static str, message: &str| {
        Err(LendscoreError::InvalidField {
            field,
            reason: match context {
                Some(context) => format!("{context}: {message}"),
                None => message.to_string(),
            },
        })
    };

    if !annual_income.is_finite() || annual_income <= 0.0 {
        return fail("annual-income", "must be a positive amount");
    }
    if !loan_amount.is_finite() || loan_amount <= 0.0 {
        return fail("loan-amount", "must be a positive amount");
    }
    if !credit_history_years.is_finite() || credit_history_years < 0.0 {
        return fail("credit-history-years", "must be zero or more years");
    }
    Ok(())
}

/// Amounts in batch files may be TOML numbers or strings carrying thousands
/// separators ("60,000").
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn resolve(&self, field: &'static str) -> Result<f64> {
        match self {
            RawAmount::Number(value) => Ok(*value),
            RawAmount::Text(raw) => parse_amount(field, raw),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ApplicantRecord {
    name: Option<String>,
    annual_income: RawAmount,
    loan_amount: RawAmount,
    spending: SpendingHabits,
    credit_history_years: RawAmount,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchFile {
    #[serde(default, rename = "applicant")]
    applicants: Vec<ApplicantRecord>,
}

/// Load a TOML batch file of `[[applicant]]` tables into validated inputs.
pub fn load_batch(path: &Path) -> Result<Vec<(Option<String>, AssessmentInput)>> {
    let content = std::fs::read_to_string(path)?;
    let parsed: BatchFile = toml::from_str(&content).map_err(|e| {
        LendscoreError::BatchParse(format!("{}: {}", path.display(), e))
    })?;
    if parsed.applicants.is_empty() {
        return Err(LendscoreError::BatchParse(format!(
            "{}: no [[applicant]] tables found",
            path.display()
        )));
    }

    let mut applicants = Vec::with_capacity(parsed.applicants.len());
    for (index, record) in parsed.applicants.iter().enumerate() {
        let position = index + 1;
        let label = record
            .name
            .clone()
            .unwrap_or_else(|| format!("applicant {position}"));
        let annual_income = record.annual_income.resolve("annual-income")?;
        let loan_amount = record.loan_amount.resolve("loan-amount")?;
        let credit_history_years = record
            .credit_history_years
            .resolve("credit-history-years")?;

        check_fields(
            annual_income,
            loan_amount,
            credit_history_years,
            Some(&label),
        )?;

        applicants.push((
            record.name.clone(),
            AssessmentInput {
                annual_income,
                loan_amount,
                spending: record.spending,
                credit_history_years,
            },
        ));
    }
    debug!(count = applicants.len(), "loaded batch file");
    Ok(applicants)
}
