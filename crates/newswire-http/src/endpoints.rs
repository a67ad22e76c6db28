//! API endpoint paths and wire types.

use serde::Deserialize;

/// Token obtain endpoint (login).
pub const TOKEN_OBTAIN: &str = "auth/token/";

/// Token refresh endpoint.
pub const TOKEN_REFRESH: &str = "auth/token/refresh/";

/// Article list endpoint.
pub const ARTICLES: &str = "articles/";

/// Current user info endpoint.
pub const USER_INFO: &str = "user_info/";

/// Current user bookmark list endpoint.
pub const USER_BOOKMARKS: &str = "user_bookmark/";

/// Article search endpoint.
pub const SEARCH: &str = "search/";

/// Path for a single article.
pub fn article_path(id: i64) -> String {
    format!("articles/{}/", id)
}

/// Path for toggling a like on an article.
pub fn article_like_path(id: i64) -> String {
    format!("articles/{}/like/", id)
}

/// Path for toggling a bookmark on an article.
pub fn article_bookmark_path(id: i64) -> String {
    format!("articles/{}/bookmark/", id)
}

/// Response from the token obtain endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenObtainResponse {
    pub access: String,
    pub refresh: String,
}

/// Response from the token refresh endpoint.
///
/// The server may include a rotated refresh token; the client follows
/// the original contract and only consumes the new access token.
#[derive(Debug, Deserialize)]
pub struct TokenRefreshResponse {
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_paths_embed_the_id() {
        assert_eq!(article_path(5), "articles/5/");
        assert_eq!(article_like_path(5), "articles/5/like/");
        assert_eq!(article_bookmark_path(5), "articles/5/bookmark/");
    }
}
