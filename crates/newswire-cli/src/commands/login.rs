//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use newswire_core::{Credentials, CredentialStore};

use crate::output;
use crate::session::{self, API_URL_KEY};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// API base URL
    #[arg(long)]
    pub api: Option<String>,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let (client, store) = session::connect(args.api.as_deref())?;
    let credentials = Credentials::new(&args.username, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    client
        .login(&credentials)
        .await
        .context("Failed to login")?;

    // Remember which service this session belongs to
    store.set(API_URL_KEY, client.base().as_str());

    output::success("Logged in successfully");
    println!();
    output::field("User", &args.username);
    output::field("API", client.base().as_str());

    Ok(())
}
