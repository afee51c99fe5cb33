use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

/// Convert a Markdown resume to an ATS-friendly .docx.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Markdown resume to convert
    input: PathBuf,
    /// Directory for the rendered file (default: outputs/ next to the input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    resume_cli::init_tracing();
    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let raw = resume_cli::read_source(&args.input)?;
    let document = resume_parser::parse(&raw);
    info!(blocks = document.blocks.len(), "parsed resume");

    let out = resume_cli::output_path(&args.input, args.output_dir.as_deref(), "docx")?;
    docx_engine::render_to_file(&document, &out)
        .with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
