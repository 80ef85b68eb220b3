//! YouTube Data API v3 response types.
//!
//! Models the JSON returned by the two list endpoints the pipeline uses.
//! Both share the same envelope shape: an `items` array, an optional
//! `nextPageToken` continuation cursor, and `pageInfo` counters. Fields the
//! pipeline never reads are omitted and ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Paging counters present on every list response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_results: i64,
    #[serde(default)]
    pub results_per_page: i64,
}

// ---------------------------------------------------------------------------
// playlistItems.list
// ---------------------------------------------------------------------------

/// Response envelope for `playlistItems.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

/// One playlist entry; requested with `part=contentDetails`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
}

// ---------------------------------------------------------------------------
// commentThreads.list
// ---------------------------------------------------------------------------

/// Response envelope for `commentThreads.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

/// One comment thread; requested with `part=snippet`, so only the top-level
/// comment is present (replies are not fetched).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

/// The fields of a top-level comment the pipeline extracts. `updated_at` is
/// absent when the comment was never edited.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_display_name: String,
    pub text_display: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Error envelope
// ---------------------------------------------------------------------------

/// Body shape of a non-2xx API response:
/// `{"error": {"code": 403, "message": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}
