//! Command implementations.

pub mod articles;
pub mod bookmarks;
pub mod login;
pub mod logout;
pub mod search;
pub mod whoami;
