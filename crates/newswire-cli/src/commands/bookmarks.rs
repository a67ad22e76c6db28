//! Bookmarks command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct BookmarksArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: BookmarksArgs) -> Result<()> {
    let (client, _store) = session::connect(None)?;

    let list = client
        .bookmarks()
        .await
        .context("Failed to fetch bookmarks")?;

    if args.json {
        return output::json_pretty(&list);
    }

    if list.bookmarks.is_empty() {
        println!("No bookmarks for {}", list.user.username);
        return Ok(());
    }

    for article in &list.bookmarks {
        println!(
            "{:>6}  {}  [{}] {}",
            article.id,
            article.write_date.format("%Y-%m-%d"),
            article.category,
            article.title
        );
    }

    Ok(())
}
