use crate::types::report::AssessmentReport;

pub fn to_json(report: &AssessmentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn to_json_batch(reports: &[AssessmentReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::types::assessment::{AssessmentInput, SpendingHabits};

    fn sample_report() -> AssessmentReport {
        let input = AssessmentInput {
            annual_income: 20000.0,
            loan_amount: 25000.0,
            spending: SpendingHabits::HighSpending,
            credit_history_years: 1.0,
        };
        let outcome = engine::evaluate(&input).expect("input should be valid");
        AssessmentReport::new(None, input, outcome)
    }

    #[test]
    fn json_report_contains_score_and_tier() {
        let rendered = to_json(&sample_report()).expect("json should serialize");
        assert!(rendered.contains("\"score\": 560"));
        assert!(rendered.contains("\"risk_tier\": \"high\""));
        assert!(rendered.contains("\"recommended\": false"));
    }

    #[test]
    fn json_report_omits_missing_applicant() {
        let rendered = to_json(&sample_report()).expect("json should serialize");
        assert!(!rendered.contains("\"applicant\""));
    }

    #[test]
    fn json_batch_is_an_array() {
        let rendered =
            to_json_batch(&[sample_report(), sample_report()]).expect("json should serialize");
        assert!(rendered.trim_start().starts_with('['));
    }
}
