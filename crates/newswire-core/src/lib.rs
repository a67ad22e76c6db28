//! newswire-core - Core types and traits for the newswire client.

pub mod credentials;
pub mod error;
pub mod events;
pub mod store;
pub mod tokens;
pub mod types;

pub use credentials::Credentials;
pub use error::{ApiError, AuthError, Error, TransportError};
pub use events::{NoopSessionEvents, SessionEvents};
pub use store::{ACCESS_TOKEN_KEY, CredentialStore, MemoryCredentialStore, REFRESH_TOKEN_KEY};
pub use tokens::{AccessToken, RefreshToken};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
