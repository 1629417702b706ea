use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lendscore",
    version,
    about = "Deterministic credit risk scoring for loan applicants"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single applicant
    Assess(AssessCommand),
    /// Score every applicant in a TOML file
    Batch(BatchCommand),
    /// Print the score bands and recommendation cutoff
    Bands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Spending {
    Frugal,
    Average,
    ModerateSpending,
    HighSpending,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Args)]
pub struct AssessCommand {
    /// Annual income; thousands separators allowed (e.g. 60,000)
    #[arg(long)]
    pub annual_income: String,

    /// Requested loan amount; thousands separators allowed
    #[arg(long)]
    pub loan_amount: String,

    /// Spending habits category
    #[arg(long, value_enum)]
    pub spending: Spending,

    /// Length of credit history in years
    #[arg(long)]
    pub credit_history_years: String,

    /// Applicant label echoed in the report
    #[arg(long)]
    pub name: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub file: PathBuf,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,
}
