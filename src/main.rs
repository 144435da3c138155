//! Life Calculator CLI
//!
//! Command-line interface for take-home pay, expenses, net worth and
//! retirement projections

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use life_calculator::profile::{age_on, load_profile, load_profile_csv, DEFAULT_PROFILE_PATH};
use life_calculator::report::{format_currency, write_projection_csv, write_slices_csv};
use life_calculator::scenario::check_scenario_count;
use life_calculator::{FinancialProfile, FinancialReport, ScenarioRunner};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "life_calculator", version, about = "Personal finance calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Profile file (.json or .csv). Defaults to data/profile.json when present.
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    /// Profile in `section,field,value` CSV form, whatever its extension
    #[arg(long, global = true, conflicts_with = "profile")]
    csv_profile: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print take-home pay, expenses, net worth and the retirement endpoint
    Summary,
    /// Year-by-year retirement projection
    Projection {
        /// Write CSV here instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Expense breakdown (positive categories only)
    Expenses {
        /// Write CSV here instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare final savings across expected returns
    Sweep {
        /// Expected returns in percent, comma separated
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        returns: Vec<f64>,
    },
    /// Print the full report as JSON
    Json,
}

/// Per-field overrides applied on top of the loaded profile
#[derive(Debug, Default, Args)]
struct Overrides {
    /// Gross annual income
    #[arg(long, global = true)]
    gross: Option<f64>,

    /// Flat tax rate (%)
    #[arg(long, global = true)]
    tax_rate: Option<f64>,

    /// Deductions, applied after tax
    #[arg(long, global = true)]
    deductions: Option<f64>,

    #[arg(long, global = true)]
    current_age: Option<u32>,

    /// Derive current age from a birth date (YYYY-MM-DD)
    #[arg(long, global = true, conflicts_with = "current_age")]
    birth_date: Option<NaiveDate>,

    #[arg(long, global = true)]
    retirement_age: Option<u32>,

    /// Savings rate (% of monthly take-home pay)
    #[arg(long, global = true)]
    savings_rate: Option<f64>,

    /// Expected annual return (%)
    #[arg(long, global = true, allow_negative_numbers = true)]
    expected_return: Option<f64>,
}

impl Overrides {
    /// Apply overrides, then reject a projection horizon that is too long
    fn apply(&self, profile: &mut FinancialProfile, today: NaiveDate) -> anyhow::Result<()> {
        if let Some(gross) = self.gross {
            profile.income.gross = gross;
        }
        if let Some(tax_rate) = self.tax_rate {
            profile.income.tax_rate = tax_rate;
        }
        if let Some(deductions) = self.deductions {
            profile.income.deductions = deductions;
        }
        if let Some(age) = self.current_age {
            profile.retirement.current_age = age;
        }
        if let Some(birth_date) = self.birth_date {
            profile.retirement.current_age = age_on(birth_date, today);
        }
        if let Some(age) = self.retirement_age {
            profile.retirement.retirement_age = age;
        }
        if let Some(rate) = self.savings_rate {
            profile.retirement.savings_rate = rate;
        }
        if let Some(rate) = self.expected_return {
            profile.retirement.expected_return = rate;
        }
        profile
            .retirement
            .check_horizon()
            .context("invalid retirement ages")?;
        Ok(())
    }
}

fn resolve_profile(path: Option<&Path>, csv_path: Option<&Path>) -> anyhow::Result<FinancialProfile> {
    if let Some(path) = csv_path {
        return load_profile_csv(path).with_context(|| format!("failed to load CSV profile {}", path.display()));
    }

    match path {
        Some(path) => load_profile(path).with_context(|| format!("failed to load profile {}", path.display())),
        None if Path::new(DEFAULT_PROFILE_PATH).exists() => load_profile(DEFAULT_PROFILE_PATH)
            .with_context(|| format!("failed to load default profile {}", DEFAULT_PROFILE_PATH)),
        None => {
            log::info!("no profile file, using calculator defaults");
            Ok(FinancialProfile::default())
        }
    }
}

fn open_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut profile = resolve_profile(cli.profile.as_deref(), cli.csv_profile.as_deref())?;
    cli.overrides.apply(&mut profile, Local::now().date_naive())?;
    log::debug!("resolved profile: {:?}", profile);

    let report = FinancialReport::from_profile(&profile);

    match cli.command {
        Commands::Summary => {
            print!("{}", report.render_text());
        }
        Commands::Projection { output } => match output {
            Some(path) => {
                write_projection_csv(open_output(&path)?, &report.projection)?;
                println!("Projection written to: {}", path.display());
            }
            None => {
                println!("{:>5} {:>16}", "Age", "Savings");
                println!("{}", "-".repeat(22));
                for point in &report.projection {
                    println!("{:>5} {:>16}", point.year, format_currency(point.savings));
                }
            }
        },
        Commands::Expenses { output } => match output {
            Some(path) => {
                write_slices_csv(open_output(&path)?, &report.expense_slices)?;
                println!("Expenses written to: {}", path.display());
            }
            None => {
                for slice in &report.expense_slices {
                    println!("{:<16} {:>14}", slice.category.label(), format_currency(slice.value));
                }
                println!("{:<16} {:>14}", "Total", format_currency(report.total_expenses));
            }
        },
        Commands::Sweep { returns } => {
            check_scenario_count(returns.len())?;
            let runner = ScenarioRunner::new(profile);
            println!("{:>8} {:>18}", "Return", "Final Savings");
            for result in runner.sweep_returns(&returns) {
                let final_savings = result
                    .summary
                    .map(|s| format_currency(s.final_savings))
                    .unwrap_or_else(|| "-".to_string());
                println!("{:>7.2}% {:>18}", result.assumptions.expected_return, final_savings);
            }
        }
        Commands::Json => {
            serde_json::to_writer_pretty(io::stdout().lock(), &report)?;
            println!();
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("life_calculator error: {error:#}");
        std::process::exit(1);
    }
}
