//! Comment collection across playlists and videos.
//!
//! Two sequential passes: playlists to video IDs, then video IDs to comment
//! records. Order is preserved throughout (playlist order, then item order,
//! then response order) and duplicate video IDs across playlists are kept.
//! Any single fetch failure aborts the whole collection.

use ytpulse_core::CommentRecord;

use crate::client::YoutubeClient;
use crate::error::YoutubeError;
use crate::types::CommentThread;

/// Fetch the video IDs of every playlist, concatenated in playlist order.
///
/// # Errors
///
/// Propagates the first [`YoutubeError`] from any playlist fetch.
pub async fn collect_video_ids(
    client: &YoutubeClient,
    playlist_ids: &[String],
    page_size: u32,
) -> Result<Vec<String>, YoutubeError> {
    let mut video_ids: Vec<String> = Vec::new();
    for playlist_id in playlist_ids {
        let ids = client
            .list_playlist_video_ids(playlist_id, page_size)
            .await?;
        tracing::debug!(playlist = %playlist_id, videos = ids.len(), "listed playlist videos");
        video_ids.extend(ids);
    }
    Ok(video_ids)
}

/// Fetch all top-level comment threads for each video, flattened into one
/// ordered record sequence.
///
/// # Errors
///
/// Propagates the first [`YoutubeError`] from any video fetch; there is no
/// per-video isolation.
pub async fn collect_comments(
    client: &YoutubeClient,
    video_ids: &[String],
    page_size: u32,
) -> Result<Vec<CommentRecord>, YoutubeError> {
    let mut records: Vec<CommentRecord> = Vec::new();
    for video_id in video_ids {
        let threads = client
            .list_video_comment_threads(video_id, page_size)
            .await?;
        tracing::debug!(video = %video_id, comments = threads.len(), "listed comment threads");
        records.extend(
            threads
                .into_iter()
                .map(|thread| thread_to_record(video_id, thread)),
        );
    }
    Ok(records)
}

/// Run both collection passes for the configured playlists.
///
/// # Errors
///
/// Propagates the first [`YoutubeError`] from either pass.
pub async fn collect_playlist_comments(
    client: &YoutubeClient,
    playlist_ids: &[String],
    playlist_page_size: u32,
    comment_page_size: u32,
) -> Result<Vec<CommentRecord>, YoutubeError> {
    let video_ids = collect_video_ids(client, playlist_ids, playlist_page_size).await?;
    tracing::info!(
        playlists = playlist_ids.len(),
        videos = video_ids.len(),
        "collected video IDs"
    );

    let records = collect_comments(client, &video_ids, comment_page_size).await?;
    tracing::info!(comments = records.len(), "collected comment threads");
    Ok(records)
}

/// Flatten a comment thread's nested snippet into a record. A comment that
/// was never edited has no `updated_at`; it inherits `published_at`.
fn thread_to_record(video_id: &str, thread: CommentThread) -> CommentRecord {
    let snippet = thread.snippet.top_level_comment.snippet;
    CommentRecord {
        published_at: snippet.published_at,
        author: snippet.author_display_name,
        video_id: video_id.to_owned(),
        text: snippet.text_display,
        updated_at: snippet.updated_at.unwrap_or(snippet.published_at),
        sentiment: None,
    }
}
