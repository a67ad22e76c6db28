//! Article subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ArticlesCommand {
    #[command(subcommand)]
    pub command: ArticlesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ArticlesSubcommand {
    /// List articles
    List(ListArgs),

    /// Show a single article
    Show(ShowArgs),

    /// Toggle a like on an article
    Like(LikeArgs),

    /// Toggle a bookmark on an article
    Bookmark(BookmarkArgs),
}

pub async fn handle(cmd: ArticlesCommand) -> Result<()> {
    match cmd.command {
        ArticlesSubcommand::List(args) => list(args).await,
        ArticlesSubcommand::Show(args) => show(args).await,
        ArticlesSubcommand::Like(args) => like(args).await,
        ArticlesSubcommand::Bookmark(args) => bookmark(args).await,
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Article id
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct LikeArgs {
    /// Article id
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct BookmarkArgs {
    /// Article id
    pub id: i64,
}

async fn list(args: ListArgs) -> Result<()> {
    let (client, _store) = session::connect(None)?;

    let articles = client
        .list_articles()
        .await
        .context("Failed to fetch articles")?;

    if args.json {
        return output::json_pretty(&articles);
    }

    for article in &articles {
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

async fn show(args: ShowArgs) -> Result<()> {
    let (client, _store) = session::connect(None)?;

    let article = client
        .get_article(args.id)
        .await
        .context("Failed to fetch article")?;

    if args.json {
        return output::json_pretty(&article);
    }

    output::field("Title", &article.title);
    output::field("Writer", &article.writer);
    output::field("Date", &article.write_date.format("%Y-%m-%d %H:%M").to_string());
    output::field("Category", &article.category);
    output::field("Views", &article.views.to_string());
    output::field("Likes", &article.likes.to_string());
    if !article.keywords.is_empty() {
        output::field("Keywords", &article.keywords.join(", "));
    }
    output::field("URL", &article.url);
    println!();
    println!("{}", article.content);

    Ok(())
}

async fn like(args: LikeArgs) -> Result<()> {
    let (client, _store) = session::connect(None)?;

    let created = client
        .toggle_like(args.id)
        .await
        .context("Failed to toggle like")?;

    if created {
        output::success("Liked");
    } else {
        output::success("Like removed");
    }

    Ok(())
}

async fn bookmark(args: BookmarkArgs) -> Result<()> {
    let (client, _store) = session::connect(None)?;

    let created = client
        .toggle_bookmark(args.id)
        .await
        .context("Failed to toggle bookmark")?;

    if created {
        output::success("Bookmarked");
    } else {
        output::success("Bookmark removed");
    }

    Ok(())
}
