use crate::types::assessment::{SCORE_CEILING, SCORE_FLOOR};
use crate::types::report::AssessmentReport;

pub fn to_markdown(report: &AssessmentReport) -> String {
    let mut output = String::new();
    output.push_str("# Credit Assessment\n\n");
    output.push_str(&format!(
        "Reference `{}`, generated {}\n\n",
        report.reference, report.generated_at
    ));
    if let Some(name) = &report.applicant {
        output.push_str(&format!("Applicant: {name}\n\n"));
    }
    output.push_str(&format!(
        "- Score: **{}** (range {SCORE_FLOOR}-{SCORE_CEILING})\n",
        report.result.score
    ));
    output.push_str(&format!(
        "- Risk tier: {}\n",
        report.result.risk_tier.label()
    ));
    output.push_str(&format!(
        "- Recommendation: {}\n\n",
        if report.result.recommended {
            "Approve"
        } else {
            "Decline"
        }
    ));

    output.push_str("## Breakdown\n\n");
    if report.components.is_empty() {
        output.push_str("- no adjustments\n");
    } else {
        for component in &report.components {
            output.push_str(&format!(
                "- {}: {:+} ({})\n",
                component.factor.label(),
                component.delta,
                component.note
            ));
        }
    }
    output
}

pub fn to_markdown_table(reports: &[AssessmentReport]) -> String {
    let mut output = String::new();
    output.push_str("# Batch Assessment\n\n");
    output.push_str("| Applicant | Score | Risk | Recommendation |\n");
    output.push_str("|---|---|---|---|\n");
    for report in reports {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            report.applicant.as_deref().unwrap_or("(unnamed)"),
            report.result.score,
            report.result.risk_tier.label(),
            if report.result.recommended {
                "Approve"
            } else {
                "Decline"
            }
        ));
    }
    output
}
