//! Whoami command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let (client, _store) = session::connect(None)?;

    if !client.has_session() {
        bail!("Not logged in. Run `newswire login` first.");
    }

    let info = client
        .user_info()
        .await
        .context("Failed to fetch account info")?;

    output::field("User", &info.username);
    output::field("User ID", &info.user_id.to_string());
    output::field("API", client.base().as_str());

    Ok(())
}
