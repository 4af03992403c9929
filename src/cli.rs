use crate::api::{self, Components};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adcrawl", version, about = "Column extraction + weekly ad harvesting (flat files)")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy the second column of a CSV file into a line-delimited text file
    Extract(ExtractArgs),
    /// Fetch store pages and record each page's weekly ad link
    Harvest(HarvestArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Input CSV file
    input: PathBuf,
    /// Output text file (overwritten)
    output: PathBuf,
}

#[derive(Args)]
struct HarvestArgs {
    /// Text file with one store URL per line
    input: PathBuf,
    /// Output CSV file (truncated and re-headered)
    output: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Extract(args) => {
            api::extract_column_file(&args.input, &args.output)?;
        }
        Command::Harvest(args) => {
            let components = Components::default();
            api::harvest_file(&args.input, &args.output, &components)?;
        }
    }
    Ok(())
}
