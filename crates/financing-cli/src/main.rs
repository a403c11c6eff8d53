mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::engine::{GrowthArgs, InstallmentArgs};

/// Project-financing decision support
#[derive(Parser)]
#[command(
    name = "pfc",
    version,
    about = "Project-financing decision support",
    long_about = "Compares capital-allocation strategies for a project with decimal \
                  precision: use own capital first, borrow everything and keep the \
                  capital invested, or a custom blend. Also exposes stand-alone EMI \
                  and compound-growth calculators and the investment catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare financing strategies and recommend the cheapest
    Compare(CompareArgs),
    /// Equal monthly installment for a loan
    Installment(InstallmentArgs),
    /// Compound growth of an invested amount
    Growth(GrowthArgs),
    /// List the investment catalog
    Options,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Installment(args) => commands::engine::run_installment(args),
        Commands::Growth(args) => commands::engine::run_growth(args),
        Commands::Options => commands::catalog::run_options(),
        Commands::Version => {
            println!("pfc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
