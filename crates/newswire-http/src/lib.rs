//! newswire-http - HTTP implementation of the newswire client.
//!
//! Wraps reqwest with the authenticated request pipeline: every outbound
//! request picks up the stored access token, and an expired-token
//! response triggers a refresh exchange and a single retry of the
//! original request.

mod api;
mod client;
mod endpoints;
pub mod models;
mod request;

pub use api::ApiClient;
pub use request::{Method, Request, Response};
