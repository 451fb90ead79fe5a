use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "namesplit")]
#[command(about = "Split a PDF into per-page files named from a spreadsheet column")]
#[command(version)]
pub struct Cli {
    /// PDF file to split
    pub pdf: PathBuf,

    /// Spreadsheet (.xls or .xlsx) whose "Name" column supplies output filenames
    pub sheet: PathBuf,

    /// Output zip archive
    #[arg(short, long, default_value = "pdfs.zip")]
    pub output: PathBuf,
}
