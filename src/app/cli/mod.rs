//! CLI Adapter.

mod legacy_flags;

use std::path::PathBuf;

use clap::Parser;

use crate::app::commands::OperationOutcome;
use crate::app::logging;
use crate::domain::{AppError, Operation, OperationPlan};

#[derive(Parser, Debug)]
#[command(name = "docbuild")]
#[command(version)]
#[command(
    about = "Manage your LaTeX project: build PDF/DOCX, clean, view, and zip",
    long_about = None,
    after_help = "Flags may be combined; operations always run in the order \
                  generate-pdf, generate-docx, clean, view, zip.\n\
                  Single-dash spellings (-pdf, -docx, -clean, -view, -zip) are accepted."
)]
struct Cli {
    /// Generate PDF from .tex files
    #[arg(long = "generate-pdf")]
    generate_pdf: bool,
    /// Generate DOCX from .tex files
    #[arg(long = "generate-docx")]
    generate_docx: bool,
    /// Clean auxiliary files
    #[arg(long)]
    clean: bool,
    /// View the PDF
    #[arg(long)]
    view: bool,
    /// Create a ZIP of the project
    #[arg(long)]
    zip: bool,
    /// Config file (defaults to ./docbuild.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn plan(&self) -> OperationPlan {
        OperationPlan::new()
            .select(Operation::BuildPdf, self.generate_pdf)
            .select(Operation::BuildDocx, self.generate_docx)
            .select(Operation::Clean, self.clean)
            .select(Operation::View, self.view)
            .select(Operation::Archive, self.zip)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse_from(legacy_flags::normalize(std::env::args_os()));
    logging::init(cli.verbose);

    if let Err(e) = run_cli(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_cli(cli: &Cli) -> Result<(), AppError> {
    let plan = cli.plan();
    if plan.is_empty() {
        tracing::debug!("no operations requested");
        return Ok(());
    }

    crate::run(&plan, cli.config.as_deref(), report_outcome)
}

fn report_outcome(operation: Operation, outcome: &OperationOutcome) {
    let failed = outcome.failed_steps();
    if !failed.is_empty() {
        println!("⚠️  {} finished with {} failing step(s):", operation, failed.len());
        for step in failed {
            match step.exit.code {
                Some(code) => println!("  - {} (exit {})", step.command, code),
                None => println!("  - {} (terminated by signal)", step.command),
            }
        }
        return;
    }

    match outcome {
        OperationOutcome::Cleaned(summary) => {
            println!("✅ Removed {} build artifact(s)", summary.removed.len());
        }
        OperationOutcome::Launched => println!("✅ Launched {}", operation),
        OperationOutcome::Steps(_) => println!("✅ Finished {}", operation),
    }
}
