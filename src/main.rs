mod cli;
mod config;
mod engine;
mod error;
mod intake;
mod report;
mod types;

use crate::error::LendscoreError;
use crate::types::assessment::{RiskTier, SpendingHabits, RECOMMEND_MIN, SCORE_CEILING, SCORE_FLOOR};
use crate::types::config::{CliConfig, ColorMode, OutputFormatPref};
use crate::types::report::AssessmentReport;
use clap::Parser;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DECLINED: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, LendscoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let loaded = config::load_config()?;

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let format = resolve_format(cmd.format, loaded.as_ref());
            let use_colors = report::should_use_colors(resolve_color(cmd.color, loaded.as_ref()));

            let input = intake::applicant_input(
                &cmd.annual_income,
                &cmd.loan_amount,
                spending_from_cli(cmd.spending),
                &cmd.credit_history_years,
            )?;
            let outcome = engine::evaluate(&input)?;
            let assessment = AssessmentReport::new(cmd.name, input, outcome);

            let rendered = report::render(&assessment, format, use_colors)?;
            println!("{rendered}");

            if assessment.result.recommended {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::DECLINED)
            }
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.file.exists() {
                return Err(LendscoreError::BatchNotFound(cmd.file.display().to_string()));
            }
            let format = resolve_format(cmd.format, loaded.as_ref());
            let use_colors = report::should_use_colors(resolve_color(cmd.color, loaded.as_ref()));

            let applicants = intake::load_batch(&cmd.file)?;
            info!(count = applicants.len(), "assessing batch");

            let mut reports = Vec::with_capacity(applicants.len());
            for (name, input) in applicants {
                let outcome = engine::evaluate(&input)?;
                reports.push(AssessmentReport::new(name, input, outcome));
            }

            let rendered = report::render_batch(&reports, format, use_colors)?;
            println!("{rendered}");

            if reports.iter().all(|r| r.result.recommended) {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::DECLINED)
            }
        }
        cli::Commands::Bands => {
            println!("score bands ({SCORE_FLOOR}-{SCORE_CEILING}):");
            println!("  {}-{SCORE_CEILING}  Low risk", RiskTier::LOW_MIN);
            println!(
                "  {}-{}  Moderate risk",
                RiskTier::MODERATE_MIN,
                RiskTier::LOW_MIN - 1
            );
            println!(
                "  {}-{}  Moderate-High risk",
                RiskTier::MODERATE_HIGH_MIN,
                RiskTier::MODERATE_MIN - 1
            );
            println!(
                "  {SCORE_FLOOR}-{}  High risk",
                RiskTier::MODERATE_HIGH_MIN - 1
            );
            println!("recommendation cutoff: {RECOMMEND_MIN} (approve at or above)");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn spending_from_cli(value: cli::Spending) -> SpendingHabits {
    match value {
        cli::Spending::Frugal => SpendingHabits::Frugal,
        cli::Spending::Average => SpendingHabits::Average,
        cli::Spending::ModerateSpending => SpendingHabits::ModerateSpending,
        cli::Spending::HighSpending => SpendingHabits::HighSpending,
    }
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    loaded: Option<&CliConfig>,
) -> report::OutputFormat {
    if let Some(format) = flag {
        return match format {
            cli::ReportFormat::Text => report::OutputFormat::Text,
            cli::ReportFormat::Json => report::OutputFormat::Json,
            cli::ReportFormat::Md => report::OutputFormat::Md,
        };
    }
    match loaded.and_then(|cfg| cfg.output.format) {
        Some(OutputFormatPref::Json) => report::OutputFormat::Json,
        Some(OutputFormatPref::Md) => report::OutputFormat::Md,
        Some(OutputFormatPref::Text) | None => report::OutputFormat::Text,
    }
}

fn resolve_color(flag: Option<cli::ColorChoice>, loaded: Option<&CliConfig>) -> ColorMode {
    if let Some(choice) = flag {
        return match choice {
            cli::ColorChoice::Auto => ColorMode::Auto,
            cli::ColorChoice::Always => ColorMode::Always,
            cli::ColorChoice::Never => ColorMode::Never,
        };
    }
    loaded
        .and_then(|cfg| cfg.output.color)
        .unwrap_or(ColorMode::Auto)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                LendscoreError::InvalidInput(_) | LendscoreError::InvalidField { .. } => {
                    exit_code::INVALID_INPUT
                }
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
