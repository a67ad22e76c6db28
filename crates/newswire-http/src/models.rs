//! Response models for the news API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    pub writer: String,
    #[serde(default)]
    pub email: Option<String>,
    pub write_date: DateTime<Utc>,
    pub category: String,
    pub content: String,
    pub url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub views: i64,
}

/// A news article with the caller's like and bookmark state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub id: i64,
    pub title: String,
    pub writer: String,
    #[serde(default)]
    pub email: Option<String>,
    pub write_date: DateTime<Utc>,
    pub category: String,
    pub content: String,
    pub url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub views: i64,
    // The server reports the like state as 0/1
    #[serde(default)]
    pub is_like: i64,
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl ArticleDetail {
    /// Whether the current user has liked this article.
    pub fn is_liked(&self) -> bool {
        self.is_like != 0
    }
}

/// The authenticated user's account info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub user_id: i64,
}

/// The authenticated user's bookmark list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkList {
    pub user: BookmarkUser,
    #[serde(default)]
    pub bookmarks: Vec<ArticleDetail>,
}

/// Owner of a bookmark list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkUser {
    pub username: String,
}

/// A page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub total: i64,
    pub page: i64,
    pub size: i64,
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// A single search hit.
///
/// Hits come from the search index, not the database: the id is the
/// index document id and the content is a highlighted preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub content_preview: String,
    pub category: String,
    pub writer: String,
    pub write_date: DateTime<Utc>,
    #[serde(default)]
    pub views: i64,
    pub url: String,
    #[serde(default)]
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_detail_from_api_json() {
        let json = r#"{
            "id": 5,
            "title": "Rustls everywhere",
            "writer": "jkim",
            "email": null,
            "write_date": "2025-06-01T09:30:00Z",
            "category": "tech",
            "content": "...",
            "url": "https://news.example.com/5",
            "keywords": ["tls", "rust"],
            "likes": 3,
            "is_like": 1,
            "views": 120,
            "is_bookmarked": false
        }"#;

        let article: ArticleDetail = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, 5);
        assert_eq!(article.keywords, vec!["tls", "rust"]);
        assert!(article.is_liked());
        assert!(!article.is_bookmarked);
    }

    #[test]
    fn summary_tolerates_missing_counters() {
        let json = r#"{
            "id": 1,
            "title": "t",
            "writer": "w",
            "write_date": "2025-06-01T09:30:00+09:00",
            "category": "c",
            "content": "b",
            "url": "https://news.example.com/1"
        }"#;

        let article: ArticleSummary = serde_json::from_str(json).unwrap();
        assert_eq!(article.likes, 0);
        assert_eq!(article.views, 0);
        assert!(article.keywords.is_empty());
    }
}
