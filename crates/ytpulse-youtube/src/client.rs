//! HTTP client for the YouTube Data API v3.
//!
//! Wraps `reqwest` with API key management, typed response deserialization,
//! and the page-token pagination loop. Non-2xx responses surface the message
//! from the API error envelope as [`YoutubeError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::YoutubeError;
use crate::paging::{fetch_all_pages, Page};
use crate::types::{
    ApiErrorEnvelope, CommentThread, CommentThreadListResponse, PlaylistItemListResponse,
};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Client for the YouTube Data API v3.
///
/// Manages the HTTP client, API key, and endpoint URLs. Use
/// [`YoutubeClient::new`] for production or [`YoutubeClient::with_base_url`]
/// to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    playlist_items_url: Url,
    comment_threads_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production YouTube API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("ytpulse/0.1 (comment-sentiment)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining an endpoint name appends a path segment rather than
        // replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised)
            .map_err(|e| YoutubeError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        let playlist_items_url = base
            .join("playlistItems")
            .map_err(|e| YoutubeError::Api(format!("invalid base URL '{base_url}': {e}")))?;
        let comment_threads_url = base
            .join("commentThreads")
            .map_err(|e| YoutubeError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            playlist_items_url,
            comment_threads_url,
        })
    }

    /// Fetches one page of `playlistItems.list` with `part=contentDetails`.
    ///
    /// Pass `page_token = None` for the first page; the response's
    /// `next_page_token` feeds the next call.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] if the API returns a non-2xx status.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_playlist_items_page(
        &self,
        playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemListResponse, YoutubeError> {
        let page_size = page_size.to_string();
        let mut params = vec![
            ("part", "contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.request_url(&self.playlist_items_url, &params);
        self.get_json(url, &format!("playlistItems(playlistId={playlist_id})"))
            .await
    }

    /// Fetches one page of `commentThreads.list` with `part=snippet` and
    /// `textFormat=plainText` (top-level comments only).
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] if the API returns a non-2xx status.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_comment_threads_page(
        &self,
        video_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, YoutubeError> {
        let page_size = page_size.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", page_size.as_str()),
            ("textFormat", "plainText"),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.request_url(&self.comment_threads_url, &params);
        self.get_json(url, &format!("commentThreads(videoId={video_id})"))
            .await
    }

    /// Fetches every video ID in a playlist, following page tokens to
    /// exhaustion. IDs come back in playlist item order.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Self::list_playlist_items_page`];
    /// items from earlier pages are discarded.
    pub async fn list_playlist_video_ids(
        &self,
        playlist_id: &str,
        page_size: u32,
    ) -> Result<Vec<String>, YoutubeError> {
        fetch_all_pages(|token| async move {
            let response = self
                .list_playlist_items_page(playlist_id, page_size, token.as_deref())
                .await?;
            Ok(Page {
                items: response
                    .items
                    .into_iter()
                    .map(|item| item.content_details.video_id)
                    .collect(),
                next_page_token: response.next_page_token,
            })
        })
        .await
    }

    /// Fetches every top-level comment thread of a video, following page
    /// tokens to exhaustion. Threads come back in response order.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Self::list_comment_threads_page`];
    /// items from earlier pages are discarded.
    pub async fn list_video_comment_threads(
        &self,
        video_id: &str,
        page_size: u32,
    ) -> Result<Vec<CommentThread>, YoutubeError> {
        fetch_all_pages(|token| async move {
            let response = self
                .list_comment_threads_page(video_id, page_size, token.as_deref())
                .await?;
            Ok(Page {
                items: response.items,
                next_page_token: response.next_page_token,
            })
        })
        .await
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters. Clones the endpoint URL and appends `key` plus the given
    /// parameters via [`Url::query_pairs_mut`].
    fn request_url(&self, endpoint: &Url, params: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request and parses the response body as `T`.
    ///
    /// `context` names the operation for error messages; the URL itself is
    /// never echoed because its query string carries the API key.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] on network failure, [`YoutubeError::Api`]
    /// for a non-2xx status, and [`YoutubeError::Deserialize`] if the body is
    /// not the expected JSON shape.
    async fn get_json<T>(&self, url: Url, context: &str) -> Result<T, YoutubeError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(YoutubeError::Api(format!(
                "{context} failed with HTTP {}: {}",
                status.as_u16(),
                api_error_message(&body),
            )));
        }

        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Pulls the human-readable message out of the API error envelope, falling
/// back to the raw body when it is not the expected JSON shape.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
