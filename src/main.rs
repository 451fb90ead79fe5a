mod archive;
mod cli;
mod error;
mod namer;
mod pdf;
mod pipeline;
mod sheet;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use pipeline::SplitRequest;
use std::path::Path;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !has_extension(&cli.pdf, &["pdf"]) {
        anyhow::bail!("expected a .pdf file, got {}", cli.pdf.display());
    }
    if !has_extension(&cli.sheet, &["xls", "xlsx"]) {
        anyhow::bail!("expected a .xls or .xlsx file, got {}", cli.sheet.display());
    }

    let pdf_bytes = std::fs::read(&cli.pdf)
        .with_context(|| format!("Failed to read PDF: {}", cli.pdf.display()))?;
    let sheet_bytes = std::fs::read(&cli.sheet)
        .with_context(|| format!("Failed to read spreadsheet: {}", cli.sheet.display()))?;

    let outcome = match pipeline::run(SplitRequest {
        pdf_bytes,
        sheet_bytes,
    }) {
        Ok(outcome) => outcome,
        Err(err) => {
            // Cause goes to the diagnostic log; the user sees one generic
            // failure message.
            error!("split failed: {err}");
            anyhow::bail!("failed to split and package PDFs");
        }
    };

    std::fs::write(&cli.output, &outcome.archive)
        .with_context(|| format!("Failed to write archive: {}", cli.output.display()))?;

    println!(
        "Split {} page(s) into {} ({} named from spreadsheet)",
        outcome.pages,
        cli.output.display(),
        outcome.named
    );

    Ok(())
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| allowed.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}
