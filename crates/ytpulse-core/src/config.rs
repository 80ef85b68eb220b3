use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Playlists analyzed when `YTPULSE_PLAYLIST_IDS` is not set.
const DEFAULT_PLAYLIST_IDS: &[&str] = &[
    "PLWKjhJtqVAbn21gs5UnLhCQ82f923WCgM",
    "PLWKjhJtqVAbmMuZ3saqRIBimAKIMYkt0E",
];

/// `playlistItems.list` caps `maxResults` at 50.
const MAX_PLAYLIST_PAGE_SIZE: u32 = 50;

/// `commentThreads.list` caps `maxResults` at 100.
const MAX_COMMENT_PAGE_SIZE: u32 = 100;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_page_size = |var: &str, default: &str, max: u32| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        let size = raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if size == 0 || size > max {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("page size must be between 1 and {max}, got {size}"),
            });
        }
        Ok(size)
    };

    let youtube_api_key = require("YOUTUBE_API_KEY")?;

    let channel_handle = or_default("YTPULSE_CHANNEL_HANDLE", "@freecodecamp");
    let playlist_ids = parse_playlist_ids(&or_default(
        "YTPULSE_PLAYLIST_IDS",
        &DEFAULT_PLAYLIST_IDS.join(","),
    ))?;

    let playlist_page_size =
        parse_page_size("YTPULSE_PLAYLIST_PAGE_SIZE", "50", MAX_PLAYLIST_PAGE_SIZE)?;
    let comment_page_size =
        parse_page_size("YTPULSE_COMMENT_PAGE_SIZE", "100", MAX_COMMENT_PAGE_SIZE)?;
    let request_timeout_secs = parse_u64("YTPULSE_REQUEST_TIMEOUT_SECS", "30")?;

    let output_path = PathBuf::from(or_default("YTPULSE_OUTPUT_PATH", "sentiment_analysis.csv"));
    let log_level = or_default("YTPULSE_LOG_LEVEL", "info");

    Ok(AppConfig {
        youtube_api_key,
        channel_handle,
        playlist_ids,
        playlist_page_size,
        comment_page_size,
        request_timeout_secs,
        output_path,
        log_level,
    })
}

/// Split a comma-separated playlist ID list, trimming whitespace and
/// dropping empty segments. At least one ID must remain.
fn parse_playlist_ids(raw: &str) -> Result<Vec<String>, ConfigError> {
    let ids: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if ids.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "YTPULSE_PLAYLIST_IDS".to_string(),
            reason: "no playlist IDs given".to_string(),
        });
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("YOUTUBE_API_KEY", "test-api-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "YOUTUBE_API_KEY"),
            "expected MissingEnvVar(YOUTUBE_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_only_api_key() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.youtube_api_key, "test-api-key");
        assert_eq!(cfg.channel_handle, "@freecodecamp");
        assert_eq!(cfg.playlist_ids, DEFAULT_PLAYLIST_IDS);
        assert_eq!(cfg.playlist_page_size, 50);
        assert_eq!(cfg.comment_page_size, 100);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.output_path.to_str(), Some("sentiment_analysis.csv"));
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn playlist_ids_override_splits_on_commas() {
        let mut map = full_env();
        map.insert("YTPULSE_PLAYLIST_IDS", "PL-one, PL-two ,PL-three");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.playlist_ids, vec!["PL-one", "PL-two", "PL-three"]);
    }

    #[test]
    fn playlist_ids_all_empty_segments_is_invalid() {
        let mut map = full_env();
        map.insert("YTPULSE_PLAYLIST_IDS", " , ,");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YTPULSE_PLAYLIST_IDS"),
            "expected InvalidEnvVar(YTPULSE_PLAYLIST_IDS), got: {result:?}"
        );
    }

    #[test]
    fn playlist_page_size_above_provider_max_is_invalid() {
        let mut map = full_env();
        map.insert("YTPULSE_PLAYLIST_PAGE_SIZE", "400");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YTPULSE_PLAYLIST_PAGE_SIZE"),
            "expected InvalidEnvVar(YTPULSE_PLAYLIST_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn comment_page_size_zero_is_invalid() {
        let mut map = full_env();
        map.insert("YTPULSE_COMMENT_PAGE_SIZE", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YTPULSE_COMMENT_PAGE_SIZE"),
            "expected InvalidEnvVar(YTPULSE_COMMENT_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn comment_page_size_override_applies() {
        let mut map = full_env();
        map.insert("YTPULSE_COMMENT_PAGE_SIZE", "25");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.comment_page_size, 25);
    }

    #[test]
    fn request_timeout_invalid_value_errors() {
        let mut map = full_env();
        map.insert("YTPULSE_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YTPULSE_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(YTPULSE_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn output_path_override_applies() {
        let mut map = full_env();
        map.insert("YTPULSE_OUTPUT_PATH", "/tmp/out.tsv");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.output_path.to_str(), Some("/tmp/out.tsv"));
    }
}
