use crate::types::assessment::{RiskTier, RECOMMEND_MIN, SCORE_CEILING, SCORE_FLOOR};
use crate::types::report::AssessmentReport;
use owo_colors::OwoColorize;

pub fn to_text(report: &AssessmentReport, use_colors: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!("Credit assessment {}\n", report.reference));
    if let Some(name) = &report.applicant {
        output.push_str(&format!("  Applicant: {name}\n"));
    }
    output.push_str(&format!(
        "  Income: {:.0}  Loan: {:.0}  Spending: {}  History: {} years\n",
        report.input.annual_income,
        report.input.loan_amount,
        report.input.spending.label(),
        report.input.credit_history_years
    ));
    output.push_str(&format!(
        "  Score: {} (range {SCORE_FLOOR}-{SCORE_CEILING})\n",
        report.result.score
    ));
    output.push_str(&format!(
        "  Risk: {}\n",
        risk_label(report.result.risk_tier, use_colors)
    ));
    output.push_str(&format!(
        "  Recommendation: {}\n",
        recommendation_label(report.result.recommended, use_colors)
    ));

    output.push_str("  Breakdown:\n");
    if report.components.is_empty() {
        output.push_str("    - no adjustments\n");
    } else {
        for component in &report.components {
            output.push_str(&format!(
                "    - {}: {:+} ({})\n",
                component.factor.label(),
                component.delta,
                component.note
            ));
        }
    }
    output
}

pub fn to_text_summary(reports: &[AssessmentReport], use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(reports.len() + 1);
    for report in reports {
        let name = report.applicant.as_deref().unwrap_or("(unnamed)");
        lines.push(format!(
            "{} | score {} | {} | {}",
            name,
            report.result.score,
            risk_label(report.result.risk_tier, use_colors),
            recommendation_label(report.result.recommended, use_colors)
        ));
    }
    let approved = reports.iter().filter(|r| r.result.recommended).count();
    lines.push(format!(
        "assessed {} applicant(s): {} approve, {} decline (cutoff {RECOMMEND_MIN})",
        reports.len(),
        approved,
        reports.len() - approved
    ));
    lines.join("\n")
}

/// Risk label colors follow the result panel conventions: Low is green,
/// Moderate is yellow, everything else is red.
fn risk_label(tier: RiskTier, use_colors: bool) -> String {
    if !use_colors {
        return tier.label().to_string();
    }
    match tier {
        RiskTier::Low => tier.label().green().to_string(),
        RiskTier::Moderate => tier.label().yellow().to_string(),
        RiskTier::ModerateHigh | RiskTier::High => tier.label().red().to_string(),
    }
}

fn recommendation_label(recommended: bool, use_colors: bool) -> String {
    let label = if recommended { "Approve" } else { "Decline" };
    if !use_colors {
        return label.to_string();
    }
    if recommended {
        label.green().to_string()
    } else {
        label.red().to_string()
    }
}
