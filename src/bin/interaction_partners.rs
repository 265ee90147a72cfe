//! Interaction partners CLI
//!
//! List every drug that has a known interaction with a given drug.
//!
//! Usage:
//!   interaction-partners <drug> [--file <interactions.json>]
//!
//! Reads the interaction table from a local file when `--file` is given,
//! otherwise fetches it from the configured reference host. Prints the
//! partner count followed by the partners as a JSON array.

use std::path::PathBuf;

use clap::Parser;
use medtrack_lib::config::ReferenceSources;
use medtrack_lib::reference::file::load_interactions_file;
use medtrack_lib::{interaction_partners, HttpReferenceFetcher, ReferenceFetcher};

#[derive(Parser)]
#[command(name = "interaction-partners")]
#[command(version)]
#[command(about = "List the drugs known to interact with a drug", long_about = None)]
struct Cli {
    /// Drug name, matched exactly against either side of each rule
    drug: String,

    /// Local interaction document instead of the reference host
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    medtrack_lib::init_tracing();
    let cli = Cli::parse();

    let rules = match &cli.file {
        Some(path) => load_interactions_file(path)?,
        None => {
            HttpReferenceFetcher::new(ReferenceSources::from_env())?
                .fetch_interactions()
                .await?
        }
    };

    let partners = interaction_partners(&rules, &cli.drug);
    println!("{} {}", partners.len(), serde_json::to_string(&partners)?);
    Ok(())
}
