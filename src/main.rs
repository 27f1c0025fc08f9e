//! Command-line entry point: load a plan configuration, solve it, print
//! the schedule as JSON on stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use dayplan::{PlanConfig, ScheduleReport, SolveOutcome};

/// Schedule a day of activities under precedence and window constraints.
#[derive(Debug, Parser)]
#[command(name = "dayplan", version, about)]
struct Cli {
    /// Path to the plan configuration (JSON).
    config: PathBuf,

    /// Backtrack ceiling for the search, overriding the configuration.
    #[arg(long)]
    max_backtracks: Option<u64>,

    /// Emit the schedule as a single line instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(3)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = PlanConfig::from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let mut problem = config.into_problem()?;
    if let Some(ceiling) = cli.max_backtracks {
        problem.max_backtracks = ceiling;
    }

    match problem.solve()? {
        SolveOutcome::Solved(schedule) => {
            let report = ScheduleReport::build(&schedule, &problem.catalog);
            let doc = report.to_json();
            if cli.compact {
                println!("{doc}");
            } else {
                println!("{doc:#}");
            }
            Ok(ExitCode::SUCCESS)
        }
        SolveOutcome::Infeasible => {
            eprintln!("No feasible schedule exists.");
            Ok(ExitCode::from(1))
        }
        SolveOutcome::BudgetExceeded => {
            eprintln!(
                "Search stopped after {} backtracks without an answer.",
                problem.max_backtracks
            );
            Ok(ExitCode::from(2))
        }
    }
}
