//! The `analyze` pipeline: collect, classify, report, export.

use std::path::PathBuf;

use ytpulse_core::AppConfig;
use ytpulse_sentiment::classify_comments;
use ytpulse_youtube::{collect_playlist_comments, YoutubeClient};

use crate::export::write_export;
use crate::report::print_recommendation;

/// Run the full pipeline against the configured (or overridden) playlists.
///
/// Every stage is fail-fast: a collection or export error aborts the run
/// before the recommendation or the file is produced.
///
/// # Errors
///
/// Returns an error on client construction failure, any fetch failure, or
/// an export write failure.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    playlist_overrides: Vec<String>,
    output_override: Option<PathBuf>,
) -> anyhow::Result<()> {
    let playlist_ids = if playlist_overrides.is_empty() {
        config.playlist_ids.clone()
    } else {
        playlist_overrides
    };
    let output_path = output_override.unwrap_or_else(|| config.output_path.clone());

    let client = YoutubeClient::new(&config.youtube_api_key, config.request_timeout_secs)?;

    tracing::info!(
        channel = %config.channel_handle,
        playlists = playlist_ids.len(),
        "starting comment collection"
    );

    let mut records = collect_playlist_comments(
        &client,
        &playlist_ids,
        config.playlist_page_size,
        config.comment_page_size,
    )
    .await?;

    let tally = classify_comments(&mut records);
    tracing::info!(
        positive = tally.positive,
        negative = tally.negative,
        neutral = tally.neutral,
        total = tally.total(),
        "classified comments"
    );

    print_recommendation(&tally);

    write_export(&output_path, &records)?;
    tracing::info!(
        path = %output_path.display(),
        rows = records.len(),
        "wrote sentiment export"
    );

    Ok(())
}
