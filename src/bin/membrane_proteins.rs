use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use health_data::config::{PROTEIN_INPUT, PROTEIN_OUTPUT};
use health_data::proteins::extract::extract_hits;
use health_data::proteins::loader::load_export;
use health_data::proteins::report::{console_lines, save_tsv};

#[derive(Debug, Parser)]
#[command(name = "membrane-proteins")]
#[command(about = "List outer/inner membrane proteins from a UniProt JSON export", long_about = None)]
struct Cli {
    /// UniProt JSON export with a top-level `results` array
    #[arg(default_value = PROTEIN_INPUT)]
    input: PathBuf,

    /// Tab-separated output with full sequences
    #[arg(default_value = PROTEIN_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let Cli { input, output } = Cli::parse();

    let records = load_export(&input)
        .with_context(|| format!("loading protein export {}", input.display()))?;
    let hits = extract_hits(&records);
    log::info!(
        "Found {} membrane locations across {} records",
        hits.len(),
        records.len()
    );

    for line in console_lines(&hits) {
        println!("{line}");
    }

    save_tsv(&output, &hits).with_context(|| format!("writing {}", output.display()))?;
    log::info!("Wrote {}", output.display());
    Ok(())
}
