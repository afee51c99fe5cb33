use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use resume_types::ComplianceReport;

/// Check rendered resume artifacts (.docx, .pdf) for ATS compliance.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Emit reports as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    resume_cli::init_tracing();
    let args = Args::parse();

    let mut failed = false;
    let mut reports: Vec<ComplianceReport> = Vec::new();
    for file in &args.files {
        match ats_engine::check_file(file) {
            Ok(report) => {
                if !report.ats_ready() {
                    failed = true;
                }
                if args.json {
                    reports.push(report);
                } else {
                    println!("{}", ats_engine::format_report(&report));
                }
            }
            Err(e) => {
                eprintln!("{}: {e}", file.display());
                failed = true;
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
