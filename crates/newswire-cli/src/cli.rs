//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{articles, bookmarks, login, logout, search, whoami};

/// CLI for the newswire news service.
#[derive(Parser, Debug)]
#[command(name = "newswire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store a session
    Login(login::LoginArgs),

    /// Drop the stored session
    Logout(logout::LogoutArgs),

    /// Display the signed-in account
    Whoami(whoami::WhoamiArgs),

    /// Read and react to articles
    Articles(articles::ArticlesCommand),

    /// List bookmarked articles
    Bookmarks(bookmarks::BookmarksArgs),

    /// Search articles
    Search(search::SearchArgs),
}
