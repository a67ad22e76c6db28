//! Search command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs) -> Result<()> {
    let (client, _store) = session::connect(None)?;

    let results = client
        .search(&args.query)
        .await
        .context("Search failed")?;

    if args.json {
        return output::json_pretty(&results);
    }

    println!("{} result(s)", results.total);
    for hit in &results.results {
        println!(
            "{}  {}  [{}] {}",
            hit.id,
            hit.write_date.format("%Y-%m-%d"),
            hit.category,
            hit.title
        );
    }

    Ok(())
}
