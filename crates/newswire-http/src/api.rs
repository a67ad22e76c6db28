//! Authenticated API client.
//!
//! `ApiClient` composes the transport with two hooks: an outbound hook
//! that attaches the stored access token to every request, and an
//! inbound hook that recovers from an expired token by refreshing the
//! session and retrying the original request once.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, instrument, warn};

use newswire_core::error::{AuthError, Error};
use newswire_core::{
    ACCESS_TOKEN_KEY, AccessToken, ApiUrl, Credentials, CredentialStore, NoopSessionEvents,
    REFRESH_TOKEN_KEY, RefreshToken, Result, SessionEvents,
};

use crate::client::HttpClient;
use crate::endpoints::{self, TokenObtainResponse, TokenRefreshResponse};
use crate::models::{ArticleDetail, ArticleSummary, BookmarkList, SearchResults, UserInfo};
use crate::request::{Request, Response};

/// Client for the newswire API.
///
/// Cheap to clone; the underlying connection pool, credential store and
/// event sink are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    store: Arc<dyn CredentialStore>,
    events: Arc<dyn SessionEvents>,
}

impl ApiClient {
    /// Create a client over the given credential store, discarding
    /// session events.
    pub fn new(base: ApiUrl, store: Arc<dyn CredentialStore>) -> Self {
        Self::with_events(base, store, Arc::new(NoopSessionEvents))
    }

    /// Create a client that reports session invalidation to `events`.
    pub fn with_events(
        base: ApiUrl,
        store: Arc<dyn CredentialStore>,
        events: Arc<dyn SessionEvents>,
    ) -> Self {
        Self {
            http: HttpClient::new(base),
            store,
            events,
        }
    }

    /// Returns the API base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        self.http.base()
    }

    /// Whether a stored session is available.
    pub fn has_session(&self) -> bool {
        self.access_token().is_some()
    }

    /// Snapshot the stored access token.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.store.get(ACCESS_TOKEN_KEY).map(AccessToken::new)
    }

    /// Snapshot the stored refresh token.
    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.store.get(REFRESH_TOKEN_KEY).map(RefreshToken::new)
    }

    /// Send a request through the full pipeline.
    ///
    /// The stored access token (if any) is attached before dispatch. A
    /// 401 on the first attempt triggers a refresh exchange followed by
    /// a single retry of the original request; the retry's outcome
    /// supersedes the 401. If the refresh exchange itself fails, the
    /// stored credentials are removed, the session-invalidated event
    /// fires, and the refresh error is returned - never the original
    /// 401. Every other outcome passes through unchanged, including
    /// transport failures and a 401 on the retry itself.
    ///
    /// Concurrently in-flight requests that each observe a 401 will
    /// each run their own refresh exchange; the last stored access
    /// token wins. The pipeline does not de-duplicate refreshes.
    #[instrument(skip(self, request), fields(path = %request.path()))]
    pub async fn send(&self, mut request: Request) -> Result<Response> {
        loop {
            self.attach_auth(&mut request);

            match self.http.execute(&request).await {
                Err(Error::Api(err)) if err.is_auth_error() && !request.retried() => {
                    debug!("access token rejected, attempting refresh");
                    request.mark_retried();

                    match self.refresh_access_token().await {
                        Ok(access) => {
                            request.set_bearer(access.as_str());
                            debug!("token refresh succeeded, retrying original request");
                        }
                        Err(refresh_err) => {
                            warn!(error = %refresh_err, "token refresh failed, invalidating session");
                            self.store.remove(ACCESS_TOKEN_KEY);
                            self.store.remove(REFRESH_TOKEN_KEY);
                            self.events.session_invalidated();
                            return Err(refresh_err);
                        }
                    }
                }
                outcome => return outcome,
            }
        }
    }

    /// Outbound hook: attach the stored access token, if any.
    ///
    /// Never fails the request; with no token stored the request goes
    /// out without an Authorization header.
    fn attach_auth(&self, request: &mut Request) {
        if let Some(token) = self.store.get(ACCESS_TOKEN_KEY) {
            request.set_bearer(&token);
        }
    }

    /// Exchange the stored refresh token for a new access token and
    /// persist it.
    ///
    /// Dispatched directly through the transport, not through [`send`],
    /// so the outbound hook cannot attach the stale Authorization
    /// header to the refresh call.
    ///
    /// [`send`]: ApiClient::send
    async fn refresh_access_token(&self) -> Result<AccessToken> {
        let refresh = self
            .refresh_token()
            .ok_or(AuthError::RefreshTokenMissing)?;

        let request = Request::post(endpoints::TOKEN_REFRESH)
            .with_json(json!({ "refresh": refresh.as_str() }));

        let response = self.http.execute(&request).await?;
        let body: TokenRefreshResponse = response.json()?;

        let access = AccessToken::new(body.access);
        self.store.set(ACCESS_TOKEN_KEY, access.as_str());
        Ok(access)
    }

    // ========================================================================
    // Session Operations
    // ========================================================================

    /// Authenticate and store the session token pair.
    ///
    /// The token obtain endpoint is not a protected endpoint, so this
    /// bypasses the pipeline: a 401 here means bad credentials, not an
    /// expired session, and must not trigger a refresh.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        info!("Creating new session");

        let request = Request::post(endpoints::TOKEN_OBTAIN).with_json(json!({
            "username": credentials.username(),
            "password": credentials.password(),
        }));

        let response = self.http.execute(&request).await?;
        let body: TokenObtainResponse = response.json()?;

        let access = AccessToken::new(body.access);
        let refresh = RefreshToken::new(body.refresh);
        self.store.set(ACCESS_TOKEN_KEY, access.as_str());
        self.store.set(REFRESH_TOKEN_KEY, refresh.as_str());

        debug!("Session created successfully");
        Ok(())
    }

    /// Drop the stored session.
    ///
    /// Local only; the service has no token revocation endpoint.
    pub fn logout(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
    }

    // ========================================================================
    // News Operations
    // ========================================================================

    /// Fetch the article list.
    pub async fn list_articles(&self) -> Result<Vec<ArticleSummary>> {
        let response = self.send(Request::get(endpoints::ARTICLES)).await?;
        response.json()
    }

    /// Fetch a single article with the caller's like/bookmark state.
    pub async fn get_article(&self, id: i64) -> Result<ArticleDetail> {
        let response = self.send(Request::get(endpoints::article_path(id))).await?;
        response.json()
    }

    /// Toggle a like on an article.
    ///
    /// Returns `true` if the like was created, `false` if it was
    /// removed.
    pub async fn toggle_like(&self, id: i64) -> Result<bool> {
        let response = self
            .send(Request::post(endpoints::article_like_path(id)))
            .await?;
        Ok(response.status() == 201)
    }

    /// Toggle a bookmark on an article.
    ///
    /// Returns `true` if the bookmark was created, `false` if it was
    /// removed.
    pub async fn toggle_bookmark(&self, id: i64) -> Result<bool> {
        let response = self
            .send(Request::post(endpoints::article_bookmark_path(id)))
            .await?;
        Ok(response.status() == 201)
    }

    /// Fetch the authenticated user's account info.
    pub async fn user_info(&self) -> Result<UserInfo> {
        let response = self.send(Request::get(endpoints::USER_INFO)).await?;
        response.json()
    }

    /// Fetch the authenticated user's bookmark list.
    pub async fn bookmarks(&self) -> Result<BookmarkList> {
        let response = self.send(Request::get(endpoints::USER_BOOKMARKS)).await?;
        response.json()
    }

    /// Search articles.
    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let response = self
            .send(Request::get(endpoints::SEARCH).with_query("q", query))
            .await?;
        response.json()
    }
}

// Custom Debug impl that avoids requiring Debug on the injected traits
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", self.http.base())
            .finish_non_exhaustive()
    }
}
