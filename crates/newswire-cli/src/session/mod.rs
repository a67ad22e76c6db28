//! Session persistence and event handling.

mod events;
pub mod storage;

pub use events::CliSessionEvents;
pub use storage::FileCredentialStore;

use std::sync::Arc;

use anyhow::{Context, Result};

use newswire_core::{ApiUrl, CredentialStore};
use newswire_http::ApiClient;

/// Store key for the API base URL chosen at login.
///
/// Lives alongside the token entries so every command talks to the same
/// service the session was created against.
pub const API_URL_KEY: &str = "apiUrl";

/// Default API base URL for local development.
const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Resolve the API base URL: explicit flag, then environment, then the
/// URL stored at login, then the local default.
pub fn resolve_api_url(flag: Option<&str>, store: &FileCredentialStore) -> Result<ApiUrl> {
    let url = flag
        .map(str::to_string)
        .or_else(|| std::env::var("NEWSWIRE_API").ok())
        .or_else(|| store.get(API_URL_KEY))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    ApiUrl::new(&url).context("Invalid API URL")
}

/// Build an API client over the on-disk session store.
pub fn connect(api_flag: Option<&str>) -> Result<(ApiClient, Arc<FileCredentialStore>)> {
    let store = Arc::new(FileCredentialStore::open_default()?);
    let api = resolve_api_url(api_flag, &store)?;
    let client = ApiClient::with_events(api, store.clone(), Arc::new(CliSessionEvents));
    Ok((client, store))
}
