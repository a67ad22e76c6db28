//! Session event handling for the CLI.

use newswire_core::SessionEvents;

use crate::output;

/// Prints a re-login hint when the pipeline invalidates the session.
///
/// The web frontend this client mirrors redirects to its login page
/// here; a terminal has no navigation, so the hint is the whole effect.
pub struct CliSessionEvents;

impl SessionEvents for CliSessionEvents {
    fn session_invalidated(&self) {
        output::error("Session expired. Run `newswire login` to sign in again.");
    }
}
