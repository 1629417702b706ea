pub mod json;
pub mod md;
pub mod text;

use crate::error::LendscoreError;
use crate::types::config::ColorMode;
use crate::types::report::AssessmentReport;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(
    report: &AssessmentReport,
    format: OutputFormat,
    use_colors: bool,
) -> Result<String, LendscoreError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report, use_colors)),
        OutputFormat::Json => json::to_json(report).map_err(LendscoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(
    reports: &[AssessmentReport],
    format: OutputFormat,
    use_colors: bool,
) -> Result<String, LendscoreError> {
    match format {
        OutputFormat::Text => Ok(text::to_text_summary(reports, use_colors)),
        OutputFormat::Json => json::to_json_batch(reports).map_err(LendscoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown_table(reports)),
    }
}

/// Resolve a color mode against the terminal: auto means "stdout is a TTY".
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}
