//! Tab-delimited export of classified comment records.

use std::path::Path;

use chrono::SecondsFormat;
use ytpulse_core::CommentRecord;

/// Header row: leading row-index column (unnamed, as spreadsheet imports
/// expect), then the record fields in order.
const HEADER: [&str; 7] = [
    "",
    "Timestamp",
    "Username",
    "VideoID",
    "Comment",
    "Date",
    "Sentiment",
];

/// Write all records to `path` as a tab-separated UTF-8 file with a header
/// row and a leading row-index column. Any existing file is overwritten.
///
/// Timestamps serialize as RFC 3339 with a `Z` suffix. The delimiter inside
/// comment text is handled by the writer's quoting.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row cannot be written.
pub(crate) fn write_export(path: &Path, records: &[CommentRecord]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    writer.write_record(HEADER)?;

    for (index, record) in records.iter().enumerate() {
        let index_field = index.to_string();
        let published = record
            .published_at
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        let updated = record.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true);
        let sentiment = record
            .sentiment
            .map_or_else(String::new, |category| category.to_string());

        writer.write_record([
            index_field.as_str(),
            published.as_str(),
            record.author.as_str(),
            record.video_id.as_str(),
            record.text.as_str(),
            updated.as_str(),
            sentiment.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
