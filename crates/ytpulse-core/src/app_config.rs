use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub youtube_api_key: String,
    /// Channel handle the configured playlists belong to. Informational only;
    /// the API calls are keyed on playlist IDs.
    pub channel_handle: String,
    pub playlist_ids: Vec<String>,
    pub playlist_page_size: u32,
    pub comment_page_size: u32,
    pub request_timeout_secs: u64,
    pub output_path: PathBuf,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("youtube_api_key", &"[redacted]")
            .field("channel_handle", &self.channel_handle)
            .field("playlist_ids", &self.playlist_ids)
            .field("playlist_page_size", &self.playlist_page_size)
            .field("comment_page_size", &self.comment_page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("output_path", &self.output_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}
