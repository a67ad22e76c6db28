//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let (client, _store) = session::connect(None)?;

    client.logout();

    output::success("Logged out");
    Ok(())
}
